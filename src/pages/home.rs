//! Landing page: hero, highlighted skills, featured projects, latest posts.

use super::{
    Site,
    components::{DateStyle, post_card, tag_badges},
    layout::document,
};
use crate::{
    query::{get_featured_projects, latest_posts},
    router::Section,
};
use maud::{Markup, html};

const LATEST_POSTS: usize = 3;

pub fn render(site: &Site) -> Markup {
    let profile = site.store.profile();
    let featured = get_featured_projects(site.store);
    let latest = latest_posts(site.store, LATEST_POSTS);

    let content = html! {
        section.hero {
            div.container {
                @if profile.available {
                    div.pill { span.pulse {} "Available for new opportunities" }
                }
                h1 { "Hi, I'm " span.gradient-text { (profile.name) } }
                h2.headline { (profile.headline) }
                p.lead { (profile.intro) }
                div.actions {
                    a.button href="/projects" { "View Projects" }
                    a.button.button-outline href="/blog" { "Read Blog" }
                    a.button.button-ghost href="/contact" { "Get in Touch" }
                }
            }
        }

        section.skills-strip {
            div.container {
                h3.eyebrow { "Technologies I work with" }
                div.skill-list {
                    @for skill in site.store.highlighted_skills() {
                        span.skill { (skill) }
                    }
                }
            }
        }

        @if !featured.is_empty() {
            section.section.section-muted {
                div.container {
                    div.section-head {
                        div {
                            h2 { "Featured Projects" }
                            p.muted { "Some of the impactful projects I've worked on" }
                        }
                        a.button-ghost href="/projects" { "View All" }
                    }
                    div.grid {
                        @for project in &featured {
                            article.card.project-card {
                                div.card-head {
                                    h3.card-title { (project.title) }
                                    @if let Some(demo) = &project.demo_url {
                                        a href=(demo) target="_blank" rel="noopener noreferrer"
                                            aria-label="View demo" { "Demo" }
                                    }
                                }
                                p.muted { (project.description) }
                                (tag_badges(&project.tags, 3))
                            }
                        }
                    }
                }
            }
        }

        section.section {
            div.container {
                div.section-head {
                    div {
                        h2 { "Latest Posts" }
                        p.muted { "Thoughts on frontend development and engineering" }
                    }
                    a.button-ghost href="/blog" { "View All" }
                }
                div.grid {
                    @for post in &latest {
                        (post_card(post, DateStyle::Short, "min read", 2))
                    }
                }
            }
        }
    };

    document(site, None, Some(Section::Home), content)
}
