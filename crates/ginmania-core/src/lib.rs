//! ginmania-core: catalogue search core for Gin Mania.
//!
//! This crate holds the entity model, the search pipeline and the store
//! capability it reads through, plus the shared configuration types.
//!
//! # Architecture
//!
//! ```text
//! SearchFilter ──► SearchService ──► CatalogueStore (memory | postgres)
//!                       │
//!                       └──► normalize ─► matches ─► paginate
//! ```
//!
//! The transport adapter (`ginmania-http`) owns a [`SearchService`] and maps
//! its [`SearchError`] kinds to status codes.

pub mod config;
pub mod search;
pub mod store;
pub mod types;

pub use search::{SearchError, SearchService};
pub use store::{CatalogueStore, MemoryStore, StoreError};
pub use types::{Gin, SearchFilter};
