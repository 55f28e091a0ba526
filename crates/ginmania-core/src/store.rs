//! Store: the data-access capability the search service reads from.
//!
//! A [`CatalogueStore`] hands back candidate gins for a normalized query and
//! reports how much of the pipeline it already applied. [`MemoryStore`] is
//! the linear-scan variant: it matches over its shared catalogue, clones only
//! the survivors, and leaves ordering and pagination to the service.
//! Pushdown variants (see `ginmania-store`) filter, order and page inside the
//! backing database.

use std::sync::Arc;

use async_trait::async_trait;

use crate::search::{matches, NormalizedQuery};
use crate::types::Gin;

/// How much of the search pipeline a store applied before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pushdown {
    /// Unfiltered candidates; the service must match, sort and page. For
    /// stores that can only list, such as a plain feed or export.
    None,
    /// Only matching gins, in no particular order; the service sorts and pages.
    Filter,
    /// Matching gins, sorted by name and already windowed by limit/offset.
    FilterAndPage,
}

/// What a store returned for a single fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub gins: Vec<Gin>,
    pub applied: Pushdown,
}

impl Fetched {
    pub fn new(gins: Vec<Gin>, applied: Pushdown) -> Self {
        Self { gins, applied }
    }
}

/// A fetch request as seen by a store. Bounds are already validated.
#[derive(Debug, Clone, Copy)]
pub struct StoreQuery<'a> {
    pub query: &'a NormalizedQuery,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store failed (connectivity, timeout, malformed query).
    #[error("catalogue store failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Backend(Box::new(err))
    }
}

/// Read-only access to the catalogue.
///
/// Implementations must honour the matching rules of
/// [`matches`](crate::search::matches) exactly when they report
/// [`Pushdown::Filter`] or better, and must order by name in byte order when
/// they report [`Pushdown::FilterAndPage`].
#[async_trait]
pub trait CatalogueStore: Send + Sync {
    async fn fetch(&self, query: StoreQuery<'_>) -> Result<Fetched, StoreError>;

    /// Short backend label used in logs.
    fn kind(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// A fixed catalogue held in memory, read-only after construction.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    gins: Arc<[Gin]>,
}

impl MemoryStore {
    pub fn new(gins: impl Into<Vec<Gin>>) -> Self {
        let gins: Vec<Gin> = gins.into();
        Self { gins: gins.into() }
    }

    /// The built-in four-gin catalogue.
    pub fn seeded() -> Self {
        Self::new(default_catalogue())
    }

    pub fn len(&self) -> usize {
        self.gins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gins.is_empty()
    }
}

#[async_trait]
impl CatalogueStore for MemoryStore {
    async fn fetch(&self, query: StoreQuery<'_>) -> Result<Fetched, StoreError> {
        let gins = self
            .gins
            .iter()
            .filter(|gin| matches(gin, query.query))
            .cloned()
            .collect();
        Ok(Fetched::new(gins, Pushdown::Filter))
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}

/// The static catalogue served when no database is configured.
pub fn default_catalogue() -> Vec<Gin> {
    vec![
        Gin::new(
            "Hendrick's",
            "Scotland",
            ["cucumber", "rose"],
            "Known for its delicate infusion of cucumber and rose petals.",
        ),
        Gin::new(
            "Tanqueray No. Ten",
            "England",
            ["grapefruit", "lime", "chamomile"],
            "A citrus-forward gin crafted in small batches with fresh fruits.",
        ),
        Gin::new(
            "Four Pillars Rare Dry",
            "Australia",
            ["orange", "pepperberry", "lemon myrtle"],
            "Combines native Australian botanicals with traditional gin notes.",
        ),
        Gin::new(
            "Ki No Bi Kyoto Dry",
            "Japan",
            ["yuzu", "green tea", "ginger"],
            "A dry gin that showcases Japanese botanicals from the Kyoto region.",
        ),
    ]
}
