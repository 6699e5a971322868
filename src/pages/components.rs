//! Small pieces shared across views.

use crate::{
    content::BlogPost,
    query::calculate_reading_time,
    utils::date::{long_date, short_date},
};
use maud::{Markup, html};

/// How a card prints its date.
#[derive(Debug, Clone, Copy)]
pub enum DateStyle {
    /// "Jan 15, 2025"
    Short,
    /// "January 15, 2025"
    Long,
}

/// Up to `limit` tag badges, then a "+N" badge for the rest.
pub fn tag_badges(tags: &[String], limit: usize) -> Markup {
    let hidden = tags.len().saturating_sub(limit);
    html! {
        div.badges {
            @for tag in tags.iter().take(limit) {
                span.badge { (tag) }
            }
            @if hidden > 0 {
                span.badge.badge-outline { "+" (hidden) }
            }
        }
    }
}

/// Date and reading-time line.
pub fn post_meta(post: &BlogPost, style: DateStyle, minutes_suffix: &str) -> Markup {
    let date = post.published().map(|date| match style {
        DateStyle::Short => short_date(date),
        DateStyle::Long => long_date(date),
    });
    html! {
        div.post-meta {
            @if let Some(date) = date {
                time datetime=(post.date) { (date) }
            }
            span.reading-time {
                (calculate_reading_time(&post.content)) " " (minutes_suffix)
            }
        }
    }
}

/// Linked post card used by the blog grid and the home page.
pub fn post_card(post: &BlogPost, style: DateStyle, minutes_suffix: &str, tag_limit: usize) -> Markup {
    html! {
        article.card.post-card {
            a.card-link href=(post.url_path()) {
                (post_meta(post, style, minutes_suffix))
                h3.card-title { (post.title) }
                p.muted { (post.summary) }
                (tag_badges(&post.tags, tag_limit))
            }
        }
    }
}

/// One entry of a tag filter bar.
pub struct FilterLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

pub fn filter_bar(links: impl IntoIterator<Item = FilterLink>) -> Markup {
    html! {
        nav.filter-bar aria-label="Filter by tag" {
            @for link in links {
                a.filter.active[link.active] href=(link.href)
                    aria-pressed=(if link.active { "true" } else { "false" }) {
                    (link.label)
                }
            }
        }
    }
}

/// Page heading with its lead paragraph.
pub fn page_header(title: &str, lead: &str) -> Markup {
    html! {
        header.page-header {
            h1 { (title) }
            p.lead { (lead) }
        }
    }
}
