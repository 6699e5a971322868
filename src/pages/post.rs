//! Single post: header, rendered body, table of contents, neighbours and
//! related posts.

use super::{
    Page, Site,
    components::{DateStyle, post_meta, tag_badges},
    layout::document,
};
use crate::{
    content::BlogPost,
    markdown::{TocEntry, render_markdown},
    query::{RELATED_LIMIT, adjacent_posts, get_post_by_slug, get_related_posts},
    router::Section,
    state::BlogFilter,
};
use maud::{Markup, PreEscaped, html};

pub fn render(site: &Site, slug: &str) -> Page {
    match get_post_by_slug(site.store, slug) {
        Some(post) => Page::ok(found(site, post)),
        None => Page::not_found(missing(site)),
    }
}

fn found(site: &Site, post: &BlogPost) -> Markup {
    let rendered = render_markdown(&post.content, &site.highlighter);
    let (older, newer) = adjacent_posts(site.store, &post.slug);
    let related = get_related_posts(site.store, &post.slug, &post.tags, RELATED_LIMIT);

    let content = html! {
        article.container.post {
            nav.breadcrumb aria-label="Breadcrumb" {
                a href="/" { "Home" }
                span.sep { "/" }
                a href="/blog" { "Blog" }
                span.sep { "/" }
                span.current { (post.title) }
            }

            header.post-header {
                h1 { (post.title) }
                p.lead { (post.summary) }
                (post_meta(post, DateStyle::Long, "min read"))
                div.badges {
                    @for tag in &post.tags {
                        a.badge href=(BlogFilter::default().toggled(tag).href()) { (tag) }
                    }
                }
            }

            div.post-layout {
                div.prose.post-body { (PreEscaped(rendered.html)) }
                @if !rendered.toc.is_empty() {
                    (toc(&rendered.toc))
                }
            }

            nav.post-nav aria-label="More posts" {
                @if let Some(prev) = older {
                    a.post-nav-link.prev href=(prev.url_path()) {
                        span.muted { "Previous" }
                        span.post-nav-title { (prev.title) }
                    }
                } @else {
                    span.post-nav-spacer {}
                }
                @if let Some(next) = newer {
                    a.post-nav-link.next href=(next.url_path()) {
                        span.muted { "Next" }
                        span.post-nav-title { (next.title) }
                    }
                }
            }

            @if !related.is_empty() {
                section.related {
                    h3 { "Related Posts" }
                    div.grid {
                        @for other in &related {
                            a.card.related-card href=(other.url_path()) {
                                h4 { (other.title) }
                                (tag_badges(&other.tags[..other.tags.len().min(2)], 2))
                            }
                        }
                    }
                }
            }

            a.back-link href="/blog" { "Back to Blog" }
        }
    };

    document(site, Some(post.title.as_str()), Some(Section::Blog), content)
}

fn toc(entries: &[TocEntry]) -> Markup {
    html! {
        aside.toc {
            h4.eyebrow { "On this page" }
            nav {
                @for entry in entries {
                    a.toc-level-3[entry.level == 3] href=(format!("#{}", entry.id)) { (entry.text) }
                }
            }
        }
    }
}

fn missing(site: &Site) -> Markup {
    let content = html! {
        div.container.centered {
            h1 { "Post not found" }
            a.button href="/blog" { "Back to Blog" }
        }
    };
    document(site, Some("Post not found"), Some(Section::Blog), content)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{get, html};
    use crate::{content::ContentStore, markdown::extract_toc};

    #[test]
    fn test_post_header() {
        let page = html("/blog/performance-optimization-react-query");
        assert!(page.contains("<h1>Performance Optimization with React Query: Beyond the Basics</h1>"));
        assert!(page.contains("January 10, 2025"));
        assert!(page.contains("min read"));
        assert!(page.contains(r#"<a class="badge" href="/blog/tag/react-query/">React Query</a>"#));
        assert!(page.contains("Back to Blog"));
    }

    #[test]
    fn test_toc_links_resolve() {
        let store = ContentStore::builtin().unwrap();
        for post in store.posts() {
            let page = html(&post.url_path());
            for entry in extract_toc(&post.content) {
                assert!(page.contains(&format!(r##"href="#{}""##, entry.id)), "{}", entry.id);
                assert!(page.contains(&format!(r#"id="{}""#, entry.id)), "{}", entry.id);
            }
        }
    }

    #[test]
    fn test_toc_indents_level_three() {
        let page = html("/blog/nextjs-performance-deep-dive");
        assert!(page.contains("On this page"));
        assert!(page.contains(r#"class="toc-level-3""#));
    }

    #[test]
    fn test_neighbours() {
        // newest post: only an older neighbour
        let newest = html("/blog/building-scalable-react-architecture");
        assert!(newest.contains("Previous"));
        assert!(!newest.contains(r#"class="post-nav-link next""#));

        // oldest post: only a newer neighbour
        let oldest = html("/blog/testing-strategies-frontend");
        assert!(!oldest.contains(r#"class="post-nav-link prev""#));
        assert!(oldest.contains(r#"class="post-nav-link next" href="/blog/nextjs-performance-deep-dive""#));
    }

    #[test]
    fn test_related_posts() {
        let page = html("/blog/accessible-components-react");
        assert!(page.contains("Related Posts"));
        assert!(page.contains(r#"class="card related-card" href="/blog/building-scalable-react-architecture""#));
        assert!(!page.contains(r#"class="card related-card" href="/blog/accessible-components-react""#));
    }

    #[test]
    fn test_missing_post() {
        let page = get("/blog/no-such-post");
        assert_eq!(page.status, 404);
        let html = page.into_string();
        assert!(html.contains("<h1>Post not found</h1>"));
        assert!(html.contains(r#"<a class="button" href="/blog">Back to Blog</a>"#));
    }
}
