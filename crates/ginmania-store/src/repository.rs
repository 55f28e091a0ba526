//! Query-pushdown catalogue store over the `gin` table.
//!
//! Matching, ordering and the limit/offset window all run inside PostgreSQL.
//! The predicate mirrors [`ginmania_core::search::matches`]: each column is
//! folded with `lower(... COLLATE "C")`, which only touches ASCII letters,
//! and the needle is LIKE-escaped so it is compared as a literal substring.
//! Equal names fall back to insertion order (`id`), the same order a
//! [`MemoryStore`](ginmania_core::MemoryStore) keeps for ties.

use async_trait::async_trait;
use ginmania_core::store::{CatalogueStore, Fetched, Pushdown, StoreError, StoreQuery};
use ginmania_core::Gin;
use sqlx::postgres::PgPool;

const SEARCH_SQL: &str = r#"
SELECT name, country, botanicals, description
FROM gin
WHERE $1::text IS NULL
   OR lower(name COLLATE "C") LIKE $1 ESCAPE '\'
   OR lower(country COLLATE "C") LIKE $1 ESCAPE '\'
   OR lower(description COLLATE "C") LIKE $1 ESCAPE '\'
   OR EXISTS (
        SELECT 1 FROM unnest(botanicals) AS botanical
        WHERE lower(botanical COLLATE "C") LIKE $1 ESCAPE '\'
   )
ORDER BY name COLLATE "C" ASC, id ASC
LIMIT $2 OFFSET $3
"#;

#[derive(Debug, sqlx::FromRow)]
struct GinRow {
    name: String,
    country: String,
    botanicals: Option<Vec<String>>,
    description: Option<String>,
}

impl From<GinRow> for Gin {
    fn from(row: GinRow) -> Self {
        Gin {
            name: row.name,
            country: row.country,
            botanicals: row.botanicals.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
        }
    }
}

/// Catalogue store backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection, waiting for checked-out ones.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl CatalogueStore for PgStore {
    async fn fetch(&self, query: StoreQuery<'_>) -> Result<Fetched, StoreError> {
        // Postgres text cannot hold NUL, so no row can match and the driver
        // would reject the parameter.
        if query.query.as_str().contains('\0') {
            return Ok(Fetched::new(Vec::new(), Pushdown::FilterAndPage));
        }
        let pattern = (!query.query.is_empty()).then(|| like_pattern(query.query.as_str()));
        let limit = match query.limit {
            0 => None,
            n => Some(i64::try_from(n).unwrap_or(i64::MAX)),
        };
        let offset = i64::try_from(query.offset).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, GinRow>(SEARCH_SQL)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        let gins = rows.into_iter().map(Gin::from).collect();
        Ok(Fetched::new(gins, Pushdown::FilterAndPage))
    }

    fn kind(&self) -> &'static str {
        "postgres"
    }
}

/// `%needle%` with LIKE metacharacters escaped by `\`.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
