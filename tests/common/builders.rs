//! Test builders: ergonomic constructors for `Gin`, services and stores.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ginmania::store::{Fetched, StoreQuery};
use ginmania::{CatalogueStore, Gin, MemoryStore, SearchService, StoreError};

// ---------------------------------------------------------------------------
// GinBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Gin`] test fixtures.
///
/// # Example
///
/// ```rust
/// let gin = GinBuilder::new("Monkey 47")
///     .country("Germany")
///     .botanical("lingonberry")
///     .build();
/// ```
pub struct GinBuilder {
    name: String,
    country: String,
    botanicals: Vec<String>,
    description: String,
}

impl GinBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: "Nowhere".to_string(),
            botanicals: Vec::new(),
            description: String::new(),
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn botanical(mut self, botanical: impl Into<String>) -> Self {
        self.botanicals.push(botanical.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn build(self) -> Gin {
        Gin {
            name: self.name,
            country: self.country,
            botanicals: self.botanicals,
            description: self.description,
        }
    }
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// A service over an in-memory store holding `gins`.
pub fn memory_service(gins: Vec<Gin>) -> SearchService {
    SearchService::new(Arc::new(MemoryStore::new(gins)))
}

/// A service over the built-in four-gin catalogue.
pub fn seeded_service() -> SearchService {
    SearchService::new(Arc::new(MemoryStore::seeded()))
}

// ---------------------------------------------------------------------------
// Scripted stores
// ---------------------------------------------------------------------------

/// A store whose every fetch fails, counting how often it was asked.
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogueStore for FailingStore {
    async fn fetch(&self, _query: StoreQuery<'_>) -> Result<Fetched, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::backend(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "dial tcp 127.0.0.1:5432: connection refused",
        )))
    }

    fn kind(&self) -> &'static str {
        "failing"
    }
}

/// A store that sleeps before answering from memory.
pub struct SlowStore {
    pub delay: Duration,
    pub inner: MemoryStore,
}

#[async_trait]
impl CatalogueStore for SlowStore {
    async fn fetch(&self, query: StoreQuery<'_>) -> Result<Fetched, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.fetch(query).await
    }

    fn kind(&self) -> &'static str {
        "slow"
    }
}
