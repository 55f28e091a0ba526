//! ginmania-store: PostgreSQL catalogue store for ginmania.
//!
//! [`connect`] builds a pool from [`DatabaseConfig`](ginmania_core::config::DatabaseConfig)
//! and proves it live; [`PgStore`] implements
//! [`CatalogueStore`](ginmania_core::CatalogueStore) with the whole search
//! pushed down into SQL.

pub mod pool;
pub mod repository;

pub use pool::{connect, ConnectError};
pub use repository::PgStore;
pub use sqlx::postgres::PgPool;
