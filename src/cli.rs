//! Command-line interface definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Portfolio and blog site: build it, serve it, or inspect its content
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root; the config file and output directory are resolved against it
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, global = true, default_value = "folio.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by commands that render pages
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Override base URL for the site, e.g. for a CI deployment
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Which collection `tags` lists
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagSource {
    #[default]
    Posts,
    Projects,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Export every page as static HTML
    Build {
        #[command(flatten)]
        render: RenderArgs,

        /// Output directory (relative to root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Clean output directory completely before building
        #[arg(long)]
        clean: bool,

        /// enable rss feed generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        rss: Option<bool>,

        /// enable sitemap generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        sitemap: Option<bool>,
    },

    /// Serve the site, rendering pages on request
    Serve {
        #[command(flatten)]
        render: RenderArgs,

        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List blog posts, newest first
    Posts {
        /// Case-insensitive text matched against title and summary
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only posts carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Include drafts
        #[arg(long)]
        drafts: bool,

        #[arg(long)]
        json: bool,
    },

    /// List projects
    Projects {
        /// Case-insensitive text matched against title and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only projects carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only featured projects
        #[arg(short, long)]
        featured: bool,

        #[arg(long)]
        json: bool,
    },

    /// List distinct tags
    Tags {
        #[arg(value_enum, default_value_t)]
        source: TagSource,

        #[arg(long)]
        json: bool,
    },

    /// Print a post's table of contents
    Toc {
        slug: String,

        #[arg(long)]
        json: bool,
    },

    /// Show a post's metadata, neighbours and related posts
    Post {
        slug: String,

        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Render options of `build` and `serve`.
    pub fn render_args(&self) -> Option<&RenderArgs> {
        match &self.command {
            Commands::Build { render, .. } | Commands::Serve { render, .. } => Some(render),
            _ => None,
        }
    }
}
