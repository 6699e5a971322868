//! Static export.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()   ──► clean / create the output directory
//!     │
//!     ├── site_pages()       ──► render every route → <path>/index.html
//!     │
//!     ├── 404.html, assets/site.css
//!     │
//!     └── build_rss(), build_sitemap()  (when enabled)
//! ```

use crate::{
    config::SiteConfig,
    content::ContentStore,
    generator::{rss::build_rss, site_pages, sitemap::build_sitemap},
    log,
    pages::{Page, STYLESHEET, STYLESHEET_PATH, Site},
    router::{Route, split_url},
    utils::{
        log::ProgressBar,
        minify::{MinifyType, minify},
    },
};
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Export the whole site into `config.build.output`.
///
/// If `config.build.clean` is true, clears the output directory first.
pub fn build_site(store: &ContentStore, config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let site = Site::new(store, config)?;
    let pages = site_pages(store);

    log!("build"; "exporting {} pages", pages.len());
    let progress = ProgressBar::new("pages", pages.len());
    for page in &pages {
        let (path, query) = split_url(&page.path);
        let rendered = site.render(&Route::resolve(store, path, query));
        if rendered.status != 200 {
            progress.finish();
            bail!("{} rendered with status {}", page.path, rendered.status);
        }
        write_page(&output_file(output, &page.path), rendered, config)?;
        progress.inc();
    }
    progress.finish();

    write_page(&output.join("404.html"), site.not_found(), config)?;
    write_file(&output.join(STYLESHEET_PATH.trim_start_matches('/')), STYLESHEET.as_bytes())?;

    build_rss(store, config)?;
    build_sitemap(store, config)?;

    log_build_result(output)
}

/// Create the output directory, removing it first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// `/blog/tag/react/` → `<output>/blog/tag/react/index.html`.
fn output_file(output: &Path, url_path: &str) -> PathBuf {
    url_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(output.to_path_buf(), |dir, segment| dir.join(segment))
        .join("index.html")
}

fn write_page(path: &Path, page: Page, config: &SiteConfig) -> Result<()> {
    let html = page.into_string();
    let html = minify(MinifyType::Html(html.as_bytes()), config);
    write_file(path, &html)
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Log build result based on output directory contents
fn log_build_result(output: &Path) -> Result<()> {
    let file_count = fs::read_dir(output)?.filter_map(Result::ok).count();

    if file_count == 0 {
        log!("warn"; "output is empty");
    } else {
        log!("build"; "done: {}", output.display());
    }

    Ok(())
}
