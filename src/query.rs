//! Read-only queries over the content store.
//!
//! Every function here is pure: the same store and arguments always give the
//! same result, in the same order.

use crate::content::{BlogPost, ContentStore, Project, Tagged};
use std::collections::BTreeSet;

/// Reading speed used for the "N min read" estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Default number of related posts shown under a post.
pub const RELATED_LIMIT: usize = 3;

/// Posts sorted by date, newest first.
///
/// The sort is stable, so posts sharing a date keep their declaration order.
/// Drafts are skipped unless `include_drafts` is set.
pub fn list_posts(store: &ContentStore, include_drafts: bool) -> Vec<&BlogPost> {
    let mut posts: Vec<_> = store
        .posts()
        .iter()
        .filter(|post| include_drafts || !post.draft)
        .collect();
    posts.sort_by(|a, b| b.published().cmp(&a.published()));
    posts
}

/// The first `n` posts of the default listing.
pub fn latest_posts(store: &ContentStore, n: usize) -> Vec<&BlogPost> {
    let mut posts = list_posts(store, false);
    posts.truncate(n);
    posts
}

/// Exact, case-sensitive slug lookup. `None` means "not found".
pub fn get_post_by_slug<'a>(store: &'a ContentStore, slug: &str) -> Option<&'a BlogPost> {
    store.posts().iter().find(|post| post.slug == slug)
}

/// Distinct tags across `items`, case-sensitive, in ascending order.
pub fn list_all_tags<'a, T>(items: impl IntoIterator<Item = &'a T>) -> Vec<String>
where
    T: Tagged + 'a,
{
    items
        .into_iter()
        .flat_map(|item| item.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Posts sharing at least one tag with `tags`, best matches first.
///
/// Drafts and the post named by `current_slug` are never returned. Ties in the
/// shared-tag count keep the default newest-first order.
pub fn get_related_posts<'a>(
    store: &'a ContentStore,
    current_slug: &str,
    tags: &[String],
    limit: usize,
) -> Vec<&'a BlogPost> {
    let shared = |post: &BlogPost| post.tags.iter().filter(|t| tags.contains(t)).count();

    let mut related: Vec<_> = list_posts(store, false)
        .into_iter()
        .filter(|post| post.slug != current_slug)
        .map(|post| (shared(post), post))
        .filter(|(count, _)| *count > 0)
        .collect();
    related.sort_by(|(a, _), (b, _)| b.cmp(a));

    related.into_iter().take(limit).map(|(_, post)| post).collect()
}

/// Estimated minutes to read `content`, never less than one.
pub fn calculate_reading_time(content: &str) -> usize {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Projects carrying `tag` (case-insensitive), or every project when `tag` is `None`.
pub fn filter_projects_by_tag<'a>(store: &'a ContentStore, tag: Option<&str>) -> Vec<&'a Project> {
    store
        .projects()
        .iter()
        .filter(|project| tag.is_none_or(|tag| project.has_tag(tag)))
        .collect()
}

/// Featured projects in declaration order.
pub fn get_featured_projects(store: &ContentStore) -> Vec<&Project> {
    store.projects().iter().filter(|p| p.featured).collect()
}

/// Filter posts by a free-text query and an optional tag.
///
/// The query is trimmed and matched case-insensitively as a substring of the
/// title or summary; an empty query matches everything. Both conditions must hold.
pub fn filter_posts_by_search_and_tag<'a>(
    posts: impl IntoIterator<Item = &'a BlogPost>,
    query: &str,
    tag: Option<&str>,
) -> Vec<&'a BlogPost> {
    let needle = normalize_query(query);
    posts
        .into_iter()
        .filter(|post| matches_text(&needle, [&post.title, &post.summary]))
        .filter(|post| tag.is_none_or(|tag| post.has_tag(tag)))
        .collect()
}

/// [`filter_posts_by_search_and_tag`] over the default listing.
pub fn search_posts<'a>(store: &'a ContentStore, query: &str, tag: Option<&str>) -> Vec<&'a BlogPost> {
    filter_posts_by_search_and_tag(list_posts(store, false), query, tag)
}

/// Same matching rules as posts, over project title and description.
pub fn filter_projects_by_search_and_tag<'a>(
    projects: impl IntoIterator<Item = &'a Project>,
    query: &str,
    tag: Option<&str>,
) -> Vec<&'a Project> {
    let needle = normalize_query(query);
    projects
        .into_iter()
        .filter(|project| matches_text(&needle, [&project.title, &project.description]))
        .filter(|project| tag.is_none_or(|tag| project.has_tag(tag)))
        .collect()
}

/// Neighbours of `slug` in the default listing: `(older, newer)`.
///
/// Both are `None` when the post is unknown or a draft.
pub fn adjacent_posts<'a>(
    store: &'a ContentStore,
    slug: &str,
) -> (Option<&'a BlogPost>, Option<&'a BlogPost>) {
    let posts = list_posts(store, false);
    let Some(index) = posts.iter().position(|p| p.slug == slug) else {
        return (None, None);
    };

    let older = posts.get(index + 1).copied();
    let newer = index.checked_sub(1).and_then(|i| posts.get(i).copied());
    (older, newer)
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn matches_text<const N: usize>(needle: &str, fields: [&String; N]) -> bool {
    needle.is_empty() || fields.iter().any(|field| field.to_lowercase().contains(needle))
}
