use anyhow::Context;
use clap::Parser;
use epyl_kernel::config::load_site_config;
use epyl_logger::Logger;
use std::path::PathBuf;

/// Render the EPYL landing page to static HTML.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (TOML, JSON or YAML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory, overrides `export.out_dir`.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = load_site_config(cli.config.as_deref())
        .context("Critical: Configuration is malformed")?;
    if let Some(out) = cli.out {
        cfg.export.out_dir = out;
    }

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    let index = epyl_export::export(&cfg).context("Export failed")?;
    tracing::info!(path = %index.display(), "Done");
    Ok(())
}
