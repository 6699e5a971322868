//! RSS 2.0 feed of published posts.

use crate::{
    config::SiteConfig,
    content::{BlogPost, ContentStore},
    log,
    query::list_posts,
    utils::{
        date::rfc2822,
        minify::{MinifyType, minify},
    },
};
use anyhow::{Context, Result, anyhow};
use rss::{CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::fs;

// ============================================================================
// Public API
// ============================================================================

/// Write the feed if enabled in config.
pub fn build_rss(store: &ContentStore, config: &SiteConfig) -> Result<()> {
    if config.build.rss.enable {
        let xml = rss_xml(store, config)?;
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);
        let path = config.rss_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &*xml)
            .with_context(|| format!("Failed to write rss feed to {}", path.display()))?;

        log!("rss"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    }
    Ok(())
}

/// Validated feed XML, newest post first.
pub fn rss_xml(store: &ContentStore, config: &SiteConfig) -> Result<String> {
    let channel = feed_channel(store, config);
    channel
        .validate()
        .map_err(|e| anyhow!("rss validation failed: {e}"))?;
    Ok(channel.to_string())
}

// ============================================================================
// Channel
// ============================================================================

fn feed_channel(store: &ContentStore, config: &SiteConfig) -> Channel {
    let root = config.base.url_root();
    let items: Vec<_> = list_posts(store, false)
        .into_iter()
        .map(|post| post_to_item(post, root))
        .collect();

    let copyright = Some(config.base.copyright.clone()).filter(|c| !c.is_empty());

    ChannelBuilder::default()
        .title(&config.base.title)
        .link(format!("{root}/"))
        .description(&config.base.description)
        .language(config.base.language.clone())
        .copyright(copyright)
        .generator("folio".to_string())
        .items(items)
        .build()
}

fn post_to_item(post: &BlogPost, root: &str) -> rss::Item {
    let link = format!("{root}{}", post.url_path());
    let categories = post
        .tags
        .iter()
        .map(|tag| CategoryBuilder::default().name(tag.as_str()).build())
        .collect::<Vec<_>>();

    ItemBuilder::default()
        .title(post.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(post.summary.clone())
        .pub_date(post.published().map(rfc2822))
        .categories(categories)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::{post, store};

    fn make_config(url: &str) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.url = Some(url.to_string());
        config
    }

    #[test]
    fn test_feed_channel_builtin() {
        let store = ContentStore::builtin().unwrap();
        let channel = feed_channel(&store, &make_config("https://ada.dev/"));

        assert_eq!(channel.link(), "https://ada.dev/");
        assert_eq!(channel.items().len(), 6);

        let first = &channel.items()[0];
        assert_eq!(
            first.link(),
            Some("https://ada.dev/blog/building-scalable-react-architecture")
        );
        assert_eq!(first.pub_date(), Some("Wed, 15 Jan 2025 00:00:00 +0000"));
        assert_eq!(first.categories().len(), 4);
        assert_eq!(first.categories()[0].name(), "React");
    }

    #[test]
    fn test_feed_skips_drafts() {
        let mut draft = post("draft-post", "2025-06-01", &[]);
        draft.draft = true;
        let store = store(vec![post("live", "2025-01-01", &["Rust"]), draft], vec![]);
        let channel = feed_channel(&store, &make_config("https://ada.dev"));

        assert_eq!(channel.items().len(), 1);
        assert_eq!(channel.items()[0].title(), Some("Title of live"));
        assert_eq!(channel.items()[0].description(), Some("Summary of live"));
    }

    #[test]
    fn test_copyright_only_when_set() {
        let store = store(vec![], vec![]);
        let mut config = make_config("https://ada.dev");
        assert_eq!(feed_channel(&store, &config).copyright(), None);

        config.base.copyright = "2025 Ada".into();
        assert_eq!(feed_channel(&store, &config).copyright(), Some("2025 Ada"));
    }

    #[test]
    fn test_rss_xml_validates() {
        let store = ContentStore::builtin().unwrap();
        let xml = rss_xml(&store, &make_config("https://ada.dev")).unwrap();

        assert!(xml.contains("<rss"));
        assert!(xml.contains("https://ada.dev/blog/testing-strategies-frontend</guid>"));
    }

    #[test]
    fn test_build_rss_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = make_config("https://ada.dev");
        config.build.output = dir.path().to_path_buf();
        config.build.rss.enable = true;

        build_rss(&ContentStore::builtin().unwrap(), &config).unwrap();
        let written = fs::read_to_string(dir.path().join("feed.xml")).unwrap();
        assert!(written.contains("Building Scalable React Architecture"));
    }

    #[test]
    fn test_build_rss_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = make_config("https://ada.dev");
        config.build.output = dir.path().to_path_buf();

        build_rss(&ContentStore::builtin().unwrap(), &config).unwrap();
        assert!(!dir.path().join("feed.xml").exists());
    }
}
