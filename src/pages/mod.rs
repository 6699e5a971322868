//! HTML views, one per route, rendered with maud.
//!
//! Views only read: they take the store and config by reference and return
//! markup. Status codes travel with the markup so the server and the static
//! export agree on what is a 404.

mod about;
mod blog;
mod components;
mod contact;
mod experience;
mod home;
mod layout;
mod not_found;
mod post;
mod projects;

use crate::{
    config::{ConfigError, SiteConfig},
    content::ContentStore,
    markdown::Highlighter,
    router::Route,
    state::{ContactError, ContactForm},
};
use maud::Markup;

/// Stylesheet served at [`STYLESHEET_PATH`].
pub const STYLESHEET: &str = include_str!("../embed/site.css");
pub const STYLESHEET_PATH: &str = "/assets/site.css";

/// Everything a view needs.
pub struct Site<'a> {
    pub store: &'a ContentStore,
    pub config: &'a SiteConfig,
    pub highlighter: Highlighter,
}

/// A rendered view and its HTTP status.
#[derive(Debug)]
pub struct Page {
    pub status: u16,
    pub markup: Markup,
}

impl Page {
    fn ok(markup: Markup) -> Self {
        Self { status: 200, markup }
    }

    fn not_found(markup: Markup) -> Self {
        Self { status: 404, markup }
    }

    pub fn into_string(self) -> String {
        self.markup.into_string()
    }
}

impl<'a> Site<'a> {
    pub fn new(store: &'a ContentStore, config: &'a SiteConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            store,
            config,
            highlighter: config.highlighter()?,
        })
    }

    /// Render `route` in the state its URL carries.
    pub fn render(&self, route: &Route) -> Page {
        match route {
            Route::Home => Page::ok(home::render(self)),
            Route::About => Page::ok(about::render(self)),
            Route::Experience => Page::ok(experience::render(self)),
            Route::Projects(filter) => Page::ok(projects::render(self, filter)),
            Route::Blog(filter) => Page::ok(blog::render(self, filter)),
            Route::Post(slug) => post::render(self, slug),
            Route::Contact => self.render_contact(&ContactForm::default(), None),
            Route::NotFound => self.not_found(),
        }
    }

    /// Contact page for a form in any state, with an optional submission error.
    pub fn render_contact(&self, form: &ContactForm, error: Option<&ContactError>) -> Page {
        Page::ok(contact::render(self, form, error))
    }

    pub fn not_found(&self) -> Page {
        Page::not_found(not_found::render(self))
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;

    #[test]
    fn test_statuses() {
        assert_eq!(get("/").status, 200);
        assert_eq!(get("/blog/building-scalable-react-architecture").status, 200);
        assert_eq!(get("/blog/missing").status, 404);
        assert_eq!(get("/nowhere").status, 404);
        assert_eq!(get("/projects/tag/cobol/").status, 404);
    }

    #[test]
    fn test_every_page_is_a_document() {
        for url in ["/", "/about", "/experience", "/projects", "/blog", "/contact", "/x"] {
            let html = html(url);
            assert!(html.starts_with("<!DOCTYPE html>"), "{url}");
            assert!(html.contains(super::STYLESHEET_PATH), "{url}");
        }
    }
}
