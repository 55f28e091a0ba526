//! Core types for ginmania-core.
//!
//! The searchable [`Gin`] record and the [`SearchFilter`] value object that
//! carries a query plus pagination bounds into the search pipeline.

use serde::{Deserialize, Serialize};

/// A gin product in the catalogue.
///
/// Records are immutable once loaded. Persisted rows carry an id and
/// timestamps, but those never leave the store layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gin {
    /// Display name and primary sort key.
    pub name: String,
    pub country: String,
    /// Botanicals in the order the distiller lists them. May be empty.
    #[serde(default)]
    pub botanicals: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Gin {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        botanicals: impl IntoIterator<Item = impl Into<String>>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            botanicals: botanicals.into_iter().map(Into::into).collect(),
            description: description.into(),
        }
    }
}

/// Query and pagination options for a single search.
///
/// `limit == 0` means "no cap" and `offset == 0` means "from the start".
/// Bounds are signed so that negative input can reach the service and be
/// rejected there with [`SearchError::InvalidPagination`](crate::search::SearchError).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub query: String,
    pub limit: i64,
    pub offset: i64,
}

impl SearchFilter {
    /// A filter with the given query and no pagination bounds.
    pub fn from_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: 0,
            offset: 0,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }
}
