//! `[build]` section configuration.
//!
//! Output location, minification, feeds and code highlighting.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml - static export configuration.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"        # Output directory
/// minify = true            # Minify HTML
///
/// [build.rss]
/// enable = true
///
/// [build.highlight]
/// theme = "InspiredGitHub"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Build output directory, relative to the project root.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify HTML and XML output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Remove the output directory before exporting.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// RSS feed generation settings.
    #[serde(default)]
    pub rss: RssConfig,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Code block highlighting.
    #[serde(default)]
    pub highlight: HighlightConfig,
}

/// `[build.rss]` section - RSS feed generation configuration.
///
/// Needs `[base].url` for absolute item links.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub enable: bool,

    /// Output path for the feed, relative to the output directory.
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,
}

/// `[build.sitemap]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub enable: bool,

    /// Output path for the sitemap, relative to the output directory.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

/// `[build.highlight]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HighlightConfig {
    /// One of the bundled syntect themes, e.g. "base16-ocean.dark", "InspiredGitHub".
    #[serde(default = "defaults::build::highlight::theme")]
    #[educe(Default = defaults::build::highlight::theme())]
    pub theme: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert!(!config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("feed.xml"));
        assert!(!config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
        assert_eq!(config.build.highlight.theme, "base16-ocean.dark");
    }

    #[test]
    fn test_rss_and_sitemap_config() {
        let config = r#"
            [build.rss]
            enable = true
            path = "custom-feed.xml"

            [build.sitemap]
            enable = true
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("custom-feed.xml"));
        assert!(config.build.sitemap.enable);
    }

    #[test]
    fn test_highlight_theme() {
        let config = r#"
            [build.highlight]
            theme = "InspiredGitHub"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.build.highlight.theme, "InspiredGitHub");
    }

    #[test]
    fn test_build_custom_paths() {
        let config = r#"
            [build]
            output = "dist"
            minify = false
            clean = true
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert!(config.build.clean);
    }

    #[test]
    fn test_unknown_field_rejection() {
        for config in [
            "[build]\ncontent = \"content\"",
            "[build.rss]\nformat = \"atom\"",
            "[build.sitemap]\npriority = 1",
            "[build.highlight]\nlanguage = \"rust\"",
        ] {
            let result: Result<SiteConfig, _> = toml::from_str(config);
            assert!(result.is_err(), "{config} should be rejected");
        }
    }
}
