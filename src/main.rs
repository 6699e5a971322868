//! folio - a portfolio and blog site from compiled-in content.

mod build;
mod cli;
mod config;
mod content;
mod generator;
mod inspect;
mod markdown;
mod pages;
mod query;
mod router;
mod serve;
mod state;
mod utils;

use anyhow::{Context, Result};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use content::ContentStore;
use serve::serve_site;
use std::io::{Write, stdout};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let store = ContentStore::builtin().context("Built-in content is invalid")?;

    match &cli.command {
        Commands::Build { .. } => build_site(&store, &config),
        Commands::Serve { .. } => serve_site(&store, &config),
        command => {
            let out = inspect::run(&store, command)?;
            stdout().lock().write_all(out.as_bytes())?;
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments.
///
/// The config file is optional; without one the defaults apply.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.clone().unwrap_or_else(|| "./".into());
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate().with_context(|| {
        format!("Invalid configuration ({})", config.config_path.display())
    })?;

    Ok(config)
}
