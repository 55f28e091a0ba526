//! ginmania-http: HTTP transport adapter for the catalogue search service.
//!
//! Maps `GET /gins` query parameters onto a
//! [`SearchFilter`](ginmania_core::SearchFilter), maps
//! [`SearchError`](ginmania_core::SearchError) kinds onto status codes, and
//! serves the router until a shutdown signal arrives.

pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use middleware::{RequestId, REQUEST_ID_HEADER};
pub use router::{build, AppState};
pub use server::{serve, shutdown_signal};
