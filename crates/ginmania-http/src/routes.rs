//! Route handlers for `/healthz` and `/gins`.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use ginmania_core::{Gin, SearchFilter};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::router::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub async fn healthz() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Raw `/gins` query string. Bounds stay strings so that malformed values
/// produce our own error message instead of a generic rejection.
#[derive(Debug, Default, Deserialize)]
pub struct GinsParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GinsResponse {
    pub query: String,
    pub limit: i64,
    pub offset: i64,
    pub results: Vec<Gin>,
}

pub async fn gins(
    State(state): State<AppState>,
    params: Result<Query<GinsParams>, QueryRejection>,
) -> Result<Json<GinsResponse>, ApiError> {
    let Query(params) =
        params.map_err(|rejection| ApiError::InvalidParameter(rejection.body_text()))?;
    let filter = parse_filter(params)?;

    let results = state.search.search(filter.clone()).await?;

    Ok(Json(GinsResponse {
        query: filter.query,
        limit: filter.limit,
        offset: filter.offset,
        results,
    }))
}

pub fn parse_filter(params: GinsParams) -> Result<SearchFilter, ApiError> {
    Ok(SearchFilter {
        limit: parse_bound("limit", params.limit.as_deref())?,
        offset: parse_bound("offset", params.offset.as_deref())?,
        query: params.q,
    })
}

// Absent or empty means 0.
fn parse_bound(name: &str, raw: Option<&str>) -> Result<i64, ApiError> {
    match raw {
        None | Some("") => Ok(0),
        Some(raw) => match raw.parse::<i64>() {
            Ok(n) if n >= 0 => Ok(n),
            _ => Err(ApiError::InvalidParameter(format!(
                "{name} must be a non-negative integer"
            ))),
        },
    }
}
