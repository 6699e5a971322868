//! Work-experience timeline.

use super::{
    Site,
    components::{page_header, tag_badges},
    layout::document,
};
use crate::router::Section;
use maud::{Markup, html};

pub fn render(site: &Site) -> Markup {
    let content = html! {
        div.container.narrow {
            (page_header(
                "Experience",
                "4+ years of building impactful web applications across e-commerce, \
                 fintech, and retail industries.",
            ))

            ol.timeline {
                @for entry in site.store.experience() {
                    li.timeline-entry id=(entry.id) {
                        article.card {
                            header.entry-head {
                                div {
                                    h2 { (entry.role) }
                                    h3.accent { (entry.company) }
                                }
                                div.entry-meta {
                                    span { (entry.period) }
                                    span { (entry.location) }
                                }
                                p.muted { (entry.description) }
                            }
                            div.entry-body {
                                h4.eyebrow { "Key Achievements" }
                                ul.achievements {
                                    @for achievement in &entry.achievements {
                                        li { (achievement) }
                                    }
                                }
                                (tag_badges(&entry.technologies, entry.technologies.len()))
                            }
                        }
                    }
                }
            }
        }
    };

    document(site, Some("Experience"), Some(Section::Experience), content)
}
