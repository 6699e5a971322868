//! Blog index: featured post, search, tag filter and the post grid.

use super::{
    Site,
    components::{DateStyle, FilterLink, filter_bar, page_header, post_card, post_meta, tag_badges},
    layout::document,
};
use crate::{
    content::BlogPost,
    query::{list_all_tags, list_posts},
    router::Section,
    state::BlogFilter,
};
use maud::{Markup, html};

pub fn render(site: &Site, filter: &BlogFilter) -> Markup {
    let posts = list_posts(site.store, false);
    let visible = filter.apply(site.store);

    // The newest post is promoted only on the unfiltered index.
    let featured = (!filter.is_active()).then(|| posts.first().copied()).flatten();
    let grid: Vec<_> = visible
        .iter()
        .filter(|post| featured.is_none_or(|f| f.slug != post.slug))
        .collect();

    let all = FilterLink {
        label: "All".into(),
        href: filter.without_tag().href(),
        active: filter.tag.is_none(),
    };
    let tags = list_all_tags(posts.iter().copied()).into_iter().map(|tag| FilterLink {
        href: filter.toggled(&tag).href(),
        active: filter.tag.as_deref() == Some(tag.as_str()),
        label: tag,
    });

    let title = match &filter.tag {
        Some(tag) => format!("Posts tagged {tag}"),
        None => "Blog".to_owned(),
    };

    let content = html! {
        div.container {
            (page_header(
                "Blog",
                "Thoughts on frontend development, architecture, performance optimization, \
                 and building great user experiences.",
            ))

            @if let Some(post) = featured {
                (featured_card(post))
            }

            form.search method="get" action="/blog" role="search" {
                input type="search" name="q" placeholder="Search posts..."
                    value=(filter.search) aria-label="Search posts";
                @if let Some(tag) = &filter.tag {
                    input type="hidden" name="tag" value=(tag);
                }
                button.button type="submit" { "Search" }
            }
            (filter_bar(std::iter::once(all).chain(tags)))

            @if visible.is_empty() {
                p.empty { "No posts found matching your search." }
            } @else {
                div.grid {
                    @for post in grid {
                        (post_card(post, DateStyle::Long, "min", 2))
                    }
                }
            }
        }
    };

    document(site, Some(title.as_str()), Some(Section::Blog), content)
}

fn featured_card(post: &BlogPost) -> Markup {
    html! {
        article.card.featured-post {
            a.card-link href=(post.url_path()) {
                span.badge.badge-accent { "Featured" }
                h2 { (post.title) }
                p.lead { (post.summary) }
                (post_meta(post, DateStyle::Long, "min read"))
                (tag_badges(&post.tags, 3))
            }
        }
    }
}
