//! Contact page. The form posts back to `/contact`; nothing leaves the server.

use super::{Site, layout::document};
use crate::{
    router::Section,
    state::{ContactError, ContactFields, ContactForm, ContactState},
};
use maud::{Markup, html};

pub fn render(site: &Site, form: &ContactForm, error: Option<&ContactError>) -> Markup {
    let profile = site.store.profile();

    let content = html! {
        div.container.narrow {
            header.page-header.centered {
                h1 { "Get in Touch" }
                p.lead {
                    "Have a project in mind or want to discuss opportunities? \
                     I'd love to hear from you."
                }
            }

            @if form.state() == ContactState::Submitted {
                div.toast role="status" {
                    strong { "Message sent!" }
                    p { "Thank you for reaching out. I'll get back to you soon." }
                }
            }

            div.contact-layout {
                div.contact-info {
                    h2 { "Contact Information" }
                    p.muted { "Feel free to reach out through any of these channels." }
                    div.fact-list {
                        a.fact href=(format!("mailto:{}", profile.email)) {
                            p.fact-label { "Email" }
                            p.fact-value { (profile.email) }
                        }
                        a.fact href=(profile.phone_href()) {
                            p.fact-label { "Phone" }
                            p.fact-value { (profile.phone) }
                        }
                        div.fact {
                            p.fact-label { "Location" }
                            p.fact-value { (profile.location) }
                        }
                    }
                    h3.eyebrow { "Connect on Social" }
                    div.social-links {
                        @for social in &profile.socials {
                            a.social-link href=(social.url) target="_blank"
                                rel="noopener noreferrer" aria-label=(social.label) {
                                (social.label)
                            }
                        }
                    }
                }

                @if form.state() == ContactState::Submitted {
                    (submitted())
                } @else {
                    (message_form(form.fields(), form.state(), error))
                }
            }
        }
    };

    document(site, Some("Contact"), Some(Section::Contact), content)
}

fn submitted() -> Markup {
    html! {
        div.card.submitted {
            h3 { "Message Sent!" }
            p.muted { "Thank you for reaching out. I'll get back to you as soon as possible." }
            a.button.button-outline href="/contact" { "Send Another Message" }
        }
    }
}

fn message_form(fields: &ContactFields, state: ContactState, error: Option<&ContactError>) -> Markup {
    let sending = state == ContactState::Submitting;

    html! {
        form.card.contact-form method="post" action="/contact" {
            h2 { "Send a Message" }
            @if let Some(error) = error {
                p.form-error role="alert" { (error.to_string()) }
            }
            div.field-row {
                (field("name", "Name", "text", "Your name", &fields.name))
                (field("email", "Email", "email", "your@email.com", &fields.email))
            }
            (field("subject", "Subject", "text", "What's this about?", &fields.subject))
            div.field {
                label for="message" { "Message" }
                textarea id="message" name="message" rows="5" required
                    placeholder="Tell me about your project or opportunity..." {
                    (fields.message)
                }
            }
            button.button type="submit" disabled[sending] {
                @if sending { "Sending..." } @else { "Send Message" }
            }
        }
    }
}

fn field(name: &str, label: &str, kind: &str, placeholder: &str, value: &str) -> Markup {
    html! {
        div.field {
            label for=(name) { (label) }
            input id=(name) name=(name) type=(kind) required placeholder=(placeholder) value=(value);
        }
    }
}
