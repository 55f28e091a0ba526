//! Search layer: query normalization, matching, pagination and the service
//! that ties them to a [`CatalogueStore`].
//!
//! ```text
//! SearchFilter ──► validate ──► normalize ──► store.fetch ──► match ──► paginate
//! ```
//!
//! Matching and pagination only run in-process for the stages the store did
//! not push down (see [`Pushdown`]).

use std::fmt;
use std::sync::Arc;

use crate::store::{CatalogueStore, Pushdown, StoreError, StoreQuery};
use crate::types::{Gin, SearchFilter};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("limit and offset must be non-negative")]
    InvalidPagination,
    #[error("search service is not configured with a catalogue store")]
    NotConfigured,
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// Query normalizer
// ---------------------------------------------------------------------------

/// A trimmed, ASCII-lowercased search needle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedQuery {
    needle: String,
}

impl NormalizedQuery {
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// An empty query matches every gin.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

pub fn normalize(raw: &str) -> NormalizedQuery {
    NormalizedQuery {
        needle: raw.trim().to_ascii_lowercase(),
    }
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// True when the query is a case-insensitive substring of the name, country,
/// description, or any single botanical.
pub fn matches(gin: &Gin, query: &NormalizedQuery) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.as_str();

    contains_folded(&gin.name, needle)
        || contains_folded(&gin.country, needle)
        || contains_folded(&gin.description, needle)
        || gin.botanicals.iter().any(|b| contains_folded(b, needle))
}

// Byte-window comparison is sound for UTF-8: a valid needle can only line up
// with whole characters, and ASCII folding never touches multi-byte sequences.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    let (haystack, needle) = (haystack.as_bytes(), needle.as_bytes());
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Sort by name (byte order, stable), skip `offset`, keep at most `limit`.
/// A `limit` of 0 means no cap.
pub fn paginate(mut gins: Vec<Gin>, limit: u64, offset: u64) -> Vec<Gin> {
    gins.sort_by(|a, b| a.name.cmp(&b.name));

    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let limit = match limit {
        0 => usize::MAX,
        n => usize::try_from(n).unwrap_or(usize::MAX),
    };

    gins.into_iter().skip(offset).take(limit).collect()
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Validates filters and runs the search pipeline against a store.
///
/// Cheap to clone; clones share the store handle.
#[derive(Clone)]
pub struct SearchService {
    store: Option<Arc<dyn CatalogueStore>>,
}

impl fmt::Debug for SearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchService")
            .field("store", &self.store.as_ref().map(|s| s.kind()))
            .finish()
    }
}

impl SearchService {
    pub fn new(store: Arc<dyn CatalogueStore>) -> Self {
        Self { store: Some(store) }
    }

    /// A service with no backing store. Every valid search fails with
    /// [`SearchError::NotConfigured`].
    pub fn unconfigured() -> Self {
        Self { store: None }
    }

    pub fn store_kind(&self) -> Option<&'static str> {
        self.store.as_ref().map(|s| s.kind())
    }

    pub async fn search(&self, filter: SearchFilter) -> Result<Vec<Gin>, SearchError> {
        if filter.limit < 0 || filter.offset < 0 {
            return Err(SearchError::InvalidPagination);
        }
        let limit = filter.limit.unsigned_abs();
        let offset = filter.offset.unsigned_abs();

        let store = self.store.as_ref().ok_or(SearchError::NotConfigured)?;
        let query = normalize(&filter.query);

        let fetched = store
            .fetch(StoreQuery {
                query: &query,
                limit,
                offset,
            })
            .await
            .map_err(|err| {
                tracing::warn!(store = store.kind(), error = %err, "catalogue fetch failed");
                err
            })?;

        let results = match fetched.applied {
            Pushdown::FilterAndPage => fetched.gins,
            Pushdown::Filter => paginate(fetched.gins, limit, offset),
            Pushdown::None => {
                let mut gins = fetched.gins;
                if !query.is_empty() {
                    gins.retain(|gin| matches(gin, &query));
                }
                paginate(gins, limit, offset)
            }
        };

        tracing::debug!(
            store = store.kind(),
            query = query.as_str(),
            limit,
            offset,
            results = results.len(),
            "search completed"
        );

        Ok(results)
    }

    /// Search with a bare query string and no pagination bounds.
    pub async fn search_query(&self, query: &str) -> Result<Vec<Gin>, SearchError> {
        self.search(SearchFilter::from_query(query)).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
