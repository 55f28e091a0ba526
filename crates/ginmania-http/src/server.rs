//! Server loop with graceful shutdown.

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{bail, Context};
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Serve `router` on `listener` until `signal` resolves, then stop accepting
/// and give in-flight requests `shutdown_timeout` to finish.
///
/// `signal` yields the name of whatever triggered the shutdown.
pub async fn serve<S>(
    listener: TcpListener,
    router: Router,
    shutdown_timeout: Duration,
    signal: S,
) -> anyhow::Result<()>
where
    S: Future<Output = &'static str>,
{
    let token = CancellationToken::new();
    let server = axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(token.clone().cancelled_owned())
    .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            return result.context("listen and serve");
        }
        name = signal => {
            tracing::info!(signal = name, "shutdown signal received");
        }
    }

    token.cancel();
    match tokio::time::timeout(shutdown_timeout, server).await {
        Ok(result) => {
            result.context("server shutdown")?;
            tracing::info!("server stopped gracefully");
            Ok(())
        }
        Err(_) => {
            tracing::error!(timeout = ?shutdown_timeout, "server shutdown timed out");
            bail!("server shutdown timed out after {shutdown_timeout:?}");
        }
    }
}

/// Resolves on SIGINT or, on unix, SIGTERM.
pub async fn shutdown_signal() -> &'static str {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "cannot listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}
