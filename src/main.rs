use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ginmania::config::Config;

#[derive(Parser)]
#[command(name = "ginmania", about = "Gin Mania catalogue search service")]
struct Cli {
    /// TOML file layered over the built-in defaults (environment still wins).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Validate the configuration and exit.
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = Config::load(cli.config.as_deref()).context("load config")?;
    if cli.check_config {
        println!("configuration ok");
        return Ok(());
    }

    ginmania::logging::init(&cfg).context("initialize logger")?;
    ginmania::app::run(cfg).await
}
