//! Logging bootstrap for the binary.
//!
//! `RUST_LOG` wins over `logging.level` when it is set. JSON output is meant
//! for log shippers, so it carries the current span (and with it the request
//! id) and never emits ANSI colour codes.

use anyhow::anyhow;
use ginmania_core::config::{Config, LogEncoding};
use tracing_subscriber::EnvFilter;

pub fn init(cfg: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(cfg.logging.level.to_ascii_lowercase()))?;
    let development = cfg.development_logging();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(development)
        .with_file(development)
        .with_line_number(development);

    let result = match cfg.logging.encoding {
        LogEncoding::Json => builder
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_ansi(false)
            .try_init(),
        LogEncoding::Console => builder.try_init(),
    };
    result.map_err(|err| anyhow!("install tracing subscriber: {err}"))
}
