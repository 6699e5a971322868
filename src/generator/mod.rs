//! Site-wide artifacts derived from the content store.
//!
//! [`site_pages`] is the single list of exported URLs: the static export
//! renders it, the sitemap lists it.

pub mod rss;
pub mod sitemap;

use crate::{
    content::{ContentStore, Tagged},
    markdown::heading_id,
    query::{list_all_tags, list_posts},
};
use chrono::NaiveDate;

/// One exported URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePage {
    /// Root-relative path, e.g. `/blog/tag/react/`
    pub path: String,
    /// Newest content date shown on the page, if it shows dated content
    pub lastmod: Option<NaiveDate>,
}

impl SitePage {
    fn new(path: impl Into<String>, lastmod: Option<NaiveDate>) -> Self {
        Self {
            path: path.into(),
            lastmod,
        }
    }
}

/// Every GET-able page in its default state, plus one page per tag.
///
/// Drafts have no page.
pub fn site_pages(store: &ContentStore) -> Vec<SitePage> {
    let posts = list_posts(store, false);
    let newest = posts.first().and_then(|p| p.published());

    let mut pages = vec![
        SitePage::new("/", newest),
        SitePage::new("/about", None),
        SitePage::new("/experience", None),
        SitePage::new("/projects", None),
    ];

    for tag in list_all_tags(store.projects()) {
        pages.push(SitePage::new(format!("/projects/tag/{}/", heading_id(&tag)), None));
    }

    pages.push(SitePage::new("/blog", newest));
    for tag in list_all_tags(posts.iter().copied()) {
        let lastmod = posts
            .iter()
            .find(|p| p.has_tag(&tag))
            .and_then(|p| p.published());
        pages.push(SitePage::new(format!("/blog/tag/{}/", heading_id(&tag)), lastmod));
    }
    for post in &posts {
        pages.push(SitePage::new(post.url_path(), post.published()));
    }

    pages.push(SitePage::new("/contact", None));
    pages
}
