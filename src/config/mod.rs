//! Site configuration management for `folio.toml`.
//!
//! The file is optional: every field has a default, so a missing config
//! builds the site as shipped.
//!
//! # Sections
//!
//! | Section     | Purpose                                       |
//! |-------------|-----------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url)            |
//! | `[build]`   | Output path, minify, RSS, sitemap, highlight  |
//! | `[serve]`   | Development server (interface, port)          |
//! | `[contact]` | Simulated contact submission delay            |
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://bilal.dev"
//!
//! [build]
//! output = "public"
//! minify = true
//!
//! [build.rss]
//! enable = true
//!
//! [serve]
//! port = 5277
//! ```

mod base;
mod build;
mod contact;
pub mod defaults;
mod error;
mod serve;

pub use error::ConfigError;

use base::BaseConfig;
use build::BuildConfig;
use contact::ContactConfig;
use serve::ServeConfig;

use crate::{
    cli::{Cli, Commands},
    markdown::Highlighter,
};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Longest accepted contact delay.
const MAX_CONTACT_DELAY_MS: u64 = 60_000;

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Project root (set from the CLI)
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Path to the config file, whether or not it exists (set from the CLI)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Contact form settings
    #[serde(default)]
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = Some(path.to_path_buf())
    }

    /// Absolute-or-root-relative feed path.
    pub fn rss_path(&self) -> PathBuf {
        self.build.output.join(&self.build.rss.path)
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap.path)
    }

    /// Highlighter for the configured theme.
    pub fn highlighter(&self) -> Result<Highlighter, ConfigError> {
        Highlighter::new(&self.build.highlight.theme)
            .map_err(|err| ConfigError::Validation(format!("[build.highlight.theme]: {err}")))
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.clone().unwrap_or_else(|| self.get_root().to_owned());
        self.set_root(&root);
        self.config_path = root.join(&cli.config);

        if let Some(render) = cli.render_args() {
            Self::update_option(&mut self.build.minify, render.minify.as_ref());
            if let Some(url) = &render.base_url {
                self.base.url = Some(url.clone());
            }
        }

        match &cli.command {
            Commands::Build { output, clean, rss, sitemap, .. } => {
                Self::update_option(&mut self.build.output, output.as_ref());
                self.build.clean |= *clean;
                Self::update_option(&mut self.build.rss.enable, rss.as_ref());
                Self::update_option(&mut self.build.sitemap.enable, sitemap.as_ref());
            }
            Commands::Serve { render, interface, port } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                if render.base_url.is_none() {
                    self.base.url = Some(self.serve_url());
                }
            }
            _ => {}
        }

        self.build.output = root.join(&self.build.output);
    }

    /// Local address of the dev server.
    pub fn serve_url(&self) -> String {
        format!("http://{}:{}", self.serve.interface, self.serve.port)
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate configuration after CLI overrides are applied
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            return Err(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into(),
            ));
        }

        if self.build.rss.enable && self.base.url.is_none() {
            return Err(ConfigError::Validation(
                "[base.url] is required for RSS generation".into(),
            ));
        }

        if self.build.sitemap.enable && self.base.url.is_none() {
            return Err(ConfigError::Validation(
                "[base.url] is required for sitemap generation".into(),
            ));
        }

        self.highlighter()?;

        if self.contact.delay_ms > MAX_CONTACT_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "[contact.delay_ms] must be at most {MAX_CONTACT_DELAY_MS}"
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
