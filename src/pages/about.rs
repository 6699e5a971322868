use super::{Site, components::page_header, layout::document};
use crate::router::Section;
use maud::{Markup, html};

pub fn render(site: &Site) -> Markup {
    let profile = site.store.profile();
    let facts = [
        ("Location", profile.location.clone()),
        ("Email", profile.email.clone()),
        ("Phone", profile.phone.clone()),
        ("Languages", profile.languages.join(", ")),
    ];

    let content = html! {
        div.container.narrow {
            (page_header("About Me", &profile.about_lead))

            section.prose {
                @for paragraph in &profile.bio {
                    p { (paragraph) }
                }
            }

            section.section-block {
                h2 { "Contact Information" }
                div.fact-grid {
                    @for (label, value) in &facts {
                        div.fact {
                            p.fact-label { (label) }
                            p.fact-value { (value) }
                        }
                    }
                }
            }

            section.section-block {
                h2 { "Skills & Technologies" }
                @for category in site.store.skills() {
                    div.card.skill-category {
                        h3.eyebrow { (category.name) }
                        div.skill-list {
                            @for skill in &category.skills {
                                span.skill { (skill) }
                            }
                        }
                    }
                }
            }
        }
    };

    document(site, Some("About"), Some(Section::About), content)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::html;

    #[test]
    fn test_about_sections() {
        let page = html("/about");
        assert!(page.contains("<h1>About Me</h1>"));
        assert!(page.contains("Contact Information"));
        assert!(page.contains("Skills &amp; Technologies"));
        assert!(page.contains(r#"<p class="fact-value">English, French, Arabic</p>"#));
        assert!(page.contains(r#"<p class="fact-value">Casablanca, Morocco</p>"#));
    }

    #[test]
    fn test_every_skill_category() {
        let page = html("/about");
        assert_eq!(page.matches(r#"class="card skill-category""#).count(), 7);
        assert!(page.contains("Styling &amp; UI"));
    }
}
