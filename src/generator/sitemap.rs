//! Sitemap generation.
//!
//! Lists every exported page for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog</loc>
//!     <lastmod>2025-01-15</lastmod>
//!   </url>
//! </urlset>
//! ```

use super::{SitePage, site_pages};
use crate::{
    config::SiteConfig,
    content::ContentStore,
    log,
    utils::{
        date::iso_date,
        minify::{MinifyType, minify},
    },
};
use anyhow::{Context, Result};
use std::fs;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Write the sitemap if enabled in config.
pub fn build_sitemap(store: &ContentStore, config: &SiteConfig) -> Result<()> {
    if config.build.sitemap.enable {
        let xml = sitemap_xml(store, config);
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);
        let path = config.sitemap_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

        log!("sitemap"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    }
    Ok(())
}

/// Sitemap XML for every page of [`site_pages`].
pub fn sitemap_xml(store: &ContentStore, config: &SiteConfig) -> String {
    render_urlset(config.base.url_root(), &site_pages(store))
}

// ============================================================================
// Rendering
// ============================================================================

fn render_urlset(root: &str, pages: &[SitePage]) -> String {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    for page in pages {
        let loc = format!("{root}{}", page.path);
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
        if let Some(lastmod) = page.lastmod {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", iso_date(lastmod)));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn page(path: &str, lastmod: Option<(i32, u32, u32)>) -> SitePage {
        SitePage {
            path: path.to_string(),
            lastmod: lastmod.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<it's \"x\">"), "&lt;it&apos;s &quot;x&quot;&gt;");
    }

    #[test]
    fn test_urlset_empty() {
        let xml = render_urlset("https://ada.dev", &[]);

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_urlset_entries() {
        let xml = render_urlset(
            "https://ada.dev",
            &[page("/", Some((2025, 1, 15))), page("/about", None)],
        );

        assert!(xml.contains("<loc>https://ada.dev/</loc>"));
        assert!(xml.contains("<lastmod>2025-01-15</lastmod>"));
        assert!(xml.contains("<loc>https://ada.dev/about</loc>"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert_eq!(xml.matches("<lastmod>").count(), 1);
    }

    #[test]
    fn test_sitemap_xml_builtin() {
        let store = ContentStore::builtin().unwrap();
        let mut config = SiteConfig::default();
        config.base.url = Some("https://ada.dev/".into());
        let xml = sitemap_xml(&store, &config);

        assert!(xml.contains("<loc>https://ada.dev/blog/nextjs-performance-deep-dive</loc>"));
        assert!(xml.contains("<lastmod>2024-12-20</lastmod>"));
        assert!(xml.contains("<loc>https://ada.dev/projects/tag/fintech/</loc>"));
        assert_eq!(xml.matches("<url>").count(), site_pages(&store).len());
    }

    #[test]
    fn test_build_sitemap_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.base.url = Some("https://ada.dev".into());
        config.build.output = dir.path().to_path_buf();
        config.build.sitemap.enable = true;

        build_sitemap(&ContentStore::builtin().unwrap(), &config).unwrap();
        let written = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(written.contains("<loc>https://ada.dev/contact</loc>"));
        assert!(!written.contains('\n'));
    }
}
