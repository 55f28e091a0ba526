//! ginmania: Gin Mania catalogue search service.
//!
//! This crate wires the workspace together and re-exports the pieces that
//! integration tests and the binary need.
//!
//! # Architecture
//!
//! ```text
//! HTTP (ginmania-http) ──► SearchService (ginmania-core) ──► CatalogueStore
//!                                                            ├─ MemoryStore
//!                                                            └─ PgStore (ginmania-store)
//! ```

pub mod app;
pub mod logging;

pub use ginmania_core::{
    config, search, store, types, CatalogueStore, Gin, MemoryStore, SearchError, SearchFilter,
    SearchService, StoreError,
};
pub use ginmania_http as http;
pub use ginmania_store as postgres;
