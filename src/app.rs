//! Process wiring: pick the catalogue store, build the router, serve.

use std::sync::Arc;

use anyhow::Context;
use ginmania_core::config::{CatalogueBackend, Config};
use ginmania_core::{MemoryStore, SearchService};
use ginmania_store::PgStore;
use tokio::net::TcpListener;

/// The search service plus whatever must be closed on the way out.
pub struct Catalogue {
    pub search: SearchService,
    postgres: Option<PgStore>,
}

impl Catalogue {
    pub async fn close(self) {
        if let Some(store) = self.postgres {
            store.close().await;
            tracing::info!("postgres pool closed");
        }
    }
}

/// Build the configured store and wrap it in a [`SearchService`].
pub async fn open_catalogue(cfg: &Config) -> anyhow::Result<Catalogue> {
    match cfg.catalogue.backend {
        CatalogueBackend::Memory => {
            let store = MemoryStore::seeded();
            tracing::info!(gins = store.len(), "serving the built-in catalogue");
            Ok(Catalogue {
                search: SearchService::new(Arc::new(store)),
                postgres: None,
            })
        }
        CatalogueBackend::Postgres => {
            let pool = ginmania_store::connect(&cfg.database)
                .await
                .context("open database")?;
            let store = PgStore::new(pool);
            Ok(Catalogue {
                search: SearchService::new(Arc::new(store.clone())),
                postgres: Some(store),
            })
        }
    }
}

/// Run the server until SIGINT/SIGTERM.
pub async fn run(cfg: Config) -> anyhow::Result<()> {
    let catalogue = open_catalogue(&cfg).await?;
    let router = ginmania_http::build(&cfg.server, catalogue.search.clone());

    let listener = TcpListener::bind(&cfg.server.address)
        .await
        .with_context(|| format!("bind {}", cfg.server.address))?;

    tracing::info!(
        address = %listener.local_addr()?,
        environment = %cfg.app.environment,
        store = catalogue.search.store_kind(),
        "starting Gin Mania server"
    );

    let served = ginmania_http::serve(
        listener,
        router,
        cfg.server.shutdown_timeout(),
        ginmania_http::shutdown_signal(),
    )
    .await;

    catalogue.close().await;
    served
}
