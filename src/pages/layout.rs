//! Document shell shared by every view: head, header navigation and footer.

use super::{STYLESHEET_PATH, Site};
use crate::{router::Section, utils::date::current_year};
use maud::{DOCTYPE, Markup, html};

/// Wrap `content` in the full document.
///
/// `title` is prefixed to the site title; `active` marks the current section
/// in the header.
pub fn document(site: &Site, title: Option<&str>, active: Option<Section>, content: Markup) -> Markup {
    let base = &site.config.base;
    let full_title = match title {
        Some(title) => format!("{title} | {}", base.title),
        None => base.title.clone(),
    };

    html! {
        (DOCTYPE)
        html lang=(base.language) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (full_title) }
                meta name="description" content=(base.description);
                meta name="author" content=(base.author);
                link rel="stylesheet" href=(STYLESHEET_PATH);
                @if site.config.build.rss.enable {
                    link rel="alternate" type="application/rss+xml" title=(base.title)
                        href=(format!("/{}", site.config.build.rss.path.display()));
                }
            }
            body {
                (header(site, active))
                main.site-main { (content) }
                (footer(site))
            }
        }
    }
}

fn header(site: &Site, active: Option<Section>) -> Markup {
    let name = &site.store.profile().name;
    let (first, rest) = name.split_once(' ').unwrap_or((name, ""));

    html! {
        header.site-header {
            div.container.header-inner {
                a.brand href="/" {
                    span.brand-first { (first) }
                    @if !rest.is_empty() {
                        " "
                        span.brand-rest { (rest) }
                    }
                }
                nav.site-nav aria-label="Main" {
                    @for section in Section::ALL {
                        @let current = active == Some(section);
                        a.nav-link.active[current] href=(section.path())
                            aria-current=[current.then_some("page")] {
                            (section.label())
                        }
                    }
                }
            }
        }
    }
}

fn footer(site: &Site) -> Markup {
    let profile = site.store.profile();
    let quick_links = [Section::About, Section::Projects, Section::Blog, Section::Contact];

    html! {
        footer.site-footer {
            div.container {
                div.footer-grid {
                    div.footer-brand {
                        a.brand href="/" { (profile.name) }
                        p.muted { (profile.headline) ". " (profile.about_lead) }
                    }
                    div {
                        h4.footer-heading { "Quick Links" }
                        nav.footer-links {
                            @for section in quick_links {
                                a href=(section.path()) { (section.label()) }
                            }
                        }
                    }
                    div {
                        h4.footer-heading { "Connect" }
                        div.social-links {
                            @for social in &profile.socials {
                                a.social-link href=(social.url) target="_blank"
                                    rel="noopener noreferrer" aria-label=(social.label) {
                                    (social.label)
                                }
                            }
                            a.social-link href=(format!("mailto:{}", profile.email)) aria-label="Email" {
                                "Email"
                            }
                        }
                    }
                }
                p.copyright {
                    "© " (current_year()) " " (profile.name) "."
                }
            }
        }
    }
}
