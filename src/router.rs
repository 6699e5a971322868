//! Request path and query string to [`Route`].

use crate::{
    content::{ContentStore, Tagged},
    markdown::heading_id,
    query::list_all_tags,
    state::{BlogFilter, ProjectFilter},
};
use std::borrow::Cow;

/// Top-level navigation sections, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Blog,
        Self::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Experience => "/experience",
            Self::Projects => "/projects",
            Self::Blog => "/blog",
            Self::Contact => "/contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Experience,
    Projects(ProjectFilter),
    Blog(BlogFilter),
    /// Post page; the slug may not exist
    Post(String),
    Contact,
    NotFound,
}

impl Route {
    /// Resolve a request. `path` is still percent-encoded, `query` excludes the `?`.
    ///
    /// Tag segments (`/blog/tag/<id>/`) are matched against the store's tags
    /// through [`heading_id`]; an unknown segment is [`Route::NotFound`].
    pub fn resolve(store: &ContentStore, path: &str, query: &str) -> Route {
        let path = decode_component(path, false);
        let params = parse_query(query);
        let param = |key| first_param(&params, key);

        let segments: Vec<&str> = path
            .split('/')
            .filter(|s| !s.is_empty() && *s != "index.html")
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["experience"] => Route::Experience,
            ["contact"] => Route::Contact,
            ["projects"] => Route::Projects(ProjectFilter {
                tag: param("tag").map(|t| canonical_tag(store.projects(), t)),
            }),
            ["projects", "tag", segment] => match tag_for_segment(store.projects(), segment) {
                Some(tag) => Route::Projects(ProjectFilter { tag: Some(tag) }),
                None => Route::NotFound,
            },
            ["blog"] => {
                let mut filter = BlogFilter::default();
                filter.set_search(param("q").unwrap_or_default());
                if let Some(tag) = param("tag") {
                    filter.toggle_tag(&canonical_tag(store.posts(), tag));
                }
                Route::Blog(filter)
            }
            ["blog", "tag", segment] => match tag_for_segment(store.posts(), segment) {
                Some(tag) => Route::Blog(BlogFilter {
                    search: param("q").unwrap_or_default().to_owned(),
                    tag: Some(tag),
                }),
                None => Route::NotFound,
            },
            ["blog", slug] => Route::Post((*slug).to_owned()),
            _ => Route::NotFound,
        }
    }
}

/// First non-blank value for `key`, trimmed.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}

/// The store's spelling of `tag` when one matches case-insensitively.
fn canonical_tag<'a, T: Tagged + 'a>(items: impl IntoIterator<Item = &'a T>, tag: &str) -> String {
    let wanted = tag.to_lowercase();
    list_all_tags(items)
        .into_iter()
        .find(|t| t.to_lowercase() == wanted)
        .unwrap_or_else(|| tag.to_owned())
}

fn tag_for_segment<'a, T: Tagged + 'a>(items: impl IntoIterator<Item = &'a T>, segment: &str) -> Option<String> {
    list_all_tags(items).into_iter().find(|t| heading_id(t) == segment)
}

// ============================================================================
// URL encoding
// ============================================================================

/// Split a request URL into path and query string.
pub fn split_url(url: &str) -> (&str, &str) {
    let url = url.split('#').next().unwrap_or(url);
    url.split_once('?').unwrap_or((url, ""))
}

/// Decode `application/x-www-form-urlencoded` pairs, as used by query strings
/// and form bodies. Later duplicates are kept; lookups take the first.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key, true), decode_component(value, true))
        })
        .collect()
}

/// Encode pairs as `?k=v&...`, or an empty string when there are none.
pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

/// Percent-decode, replacing invalid UTF-8. Form encoding also maps `+` to space.
fn decode_component(raw: &str, form: bool) -> String {
    let raw: Cow<str> = if form && raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}
