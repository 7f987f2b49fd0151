use anyhow::Context;
use clap::Parser;
use epyl_kernel::config::load_site_config;
use epyl_logger::Logger;
use epyl_server::Server;
use std::path::PathBuf;

/// Serve the exported EPYL site.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (TOML, JSON or YAML).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = load_site_config(cli.config.as_deref())
        .context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}
