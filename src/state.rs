//! Per-page interaction state.
//!
//! Filters live in the URL so every state is linkable; the contact form is a
//! small state machine driven by the server for one request.

use crate::{
    content::{BlogPost, ContentStore, Project},
    markdown::heading_id,
    query,
    router::encode_query,
};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Blog filter
// ============================================================================

/// Search text and selected tag of the blog index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    pub search: String,
    pub tag: Option<String>,
}

impl BlogFilter {
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Select `tag`, or clear it when it is already selected.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.tag.as_deref() == Some(tag) {
            self.tag = None;
        } else {
            self.tag = Some(tag.to_owned());
        }
    }

    pub fn clear_tag(&mut self) {
        self.tag = None;
    }

    /// Copy of this filter with `tag` toggled, for building links.
    pub fn toggled(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.toggle_tag(tag);
        next
    }

    /// Copy of this filter with the tag cleared.
    pub fn without_tag(&self) -> Self {
        let mut next = self.clone();
        next.clear_tag();
        next
    }

    /// Whether any narrowing applies. Whitespace-only search does not count.
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.tag.is_some()
    }

    /// Visible posts in listing order.
    pub fn apply<'a>(&self, store: &'a ContentStore) -> Vec<&'a BlogPost> {
        query::search_posts(store, &self.search, self.tag.as_deref())
    }

    /// Link reproducing this filter.
    ///
    /// Tag-only filters use the exported `/blog/tag/<id>/` pages; anything with
    /// search text needs the query string.
    pub fn href(&self) -> String {
        let search = self.search.trim();
        match (search.is_empty(), &self.tag) {
            (true, None) => "/blog".to_owned(),
            (true, Some(tag)) => format!("/blog/tag/{}/", heading_id(tag)),
            (false, tag) => {
                let mut pairs = vec![("q", search)];
                if let Some(tag) = tag {
                    pairs.push(("tag", tag.as_str()));
                }
                format!("/blog{}", encode_query(&pairs))
            }
        }
    }
}

// ============================================================================
// Project filter
// ============================================================================

/// Single-select tag filter of the projects gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub tag: Option<String>,
}

impl ProjectFilter {
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.tag.as_deref() == Some(tag) {
            self.tag = None;
        } else {
            self.tag = Some(tag.to_owned());
        }
    }

    pub fn toggled(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.toggle_tag(tag);
        next
    }

    pub fn apply<'a>(&self, store: &'a ContentStore) -> Vec<&'a Project> {
        query::filter_projects_by_tag(store, self.tag.as_deref())
    }

    pub fn href(&self) -> String {
        match &self.tag {
            None => "/projects".to_owned(),
            Some(tag) => format!("/projects/tag/{}/", heading_id(tag)),
        }
    }
}

// ============================================================================
// Contact form
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactState {
    Idle,
    Submitting,
    Submitted,
}

impl fmt::Display for ContactState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
        })
    }
}

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// Build from decoded form pairs. Unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut fields = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut fields.name,
                "email" => &mut fields.email,
                "subject" => &mut fields.subject,
                "message" => &mut fields.message,
                _ => continue,
            };
            *slot = value.clone();
        }
        fields
    }

    /// First required field left blank, in form order.
    pub fn missing(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("cannot {action} while the form is {state}")]
    InvalidTransition {
        action: &'static str,
        state: ContactState,
    },
}

/// Simulated contact submission: `Idle -> Submitting -> Submitted`.
///
/// Nothing is sent anywhere; the caller waits between `submit` and `complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    state: ContactState,
    fields: ContactFields,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            state: ContactState::Idle,
            fields: ContactFields::default(),
        }
    }
}

impl ContactForm {
    pub fn state(&self) -> ContactState {
        self.state
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Accept the fields and start submitting. Only presence is checked.
    pub fn submit(&mut self, fields: ContactFields) -> Result<(), ContactError> {
        if self.state != ContactState::Idle {
            return Err(ContactError::InvalidTransition {
                action: "submit",
                state: self.state,
            });
        }
        if let Some(name) = fields.missing() {
            self.fields = fields;
            return Err(ContactError::MissingField(name));
        }
        self.fields = fields;
        self.state = ContactState::Submitting;
        Ok(())
    }

    /// Finish a pending submission.
    pub fn complete(&mut self) -> Result<(), ContactError> {
        if self.state != ContactState::Submitting {
            return Err(ContactError::InvalidTransition {
                action: "complete",
                state: self.state,
            });
        }
        self.state = ContactState::Submitted;
        Ok(())
    }

    /// Back to an empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> ContentStore {
        ContentStore::builtin().unwrap()
    }

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Let's talk".into(),
        }
    }

    #[test]
    fn test_blog_filter_toggle_tag() {
        let mut filter = BlogFilter::default();
        filter.toggle_tag("React");
        assert_eq!(filter.tag.as_deref(), Some("React"));
        filter.toggle_tag("Testing");
        assert_eq!(filter.tag.as_deref(), Some("Testing"));
        filter.toggle_tag("Testing");
        assert_eq!(filter.tag, None);
    }

    #[test]
    fn test_blog_filter_is_active() {
        let mut filter = BlogFilter::default();
        assert!(!filter.is_active());
        filter.set_search("   ");
        assert!(!filter.is_active());
        filter.set_search("react");
        assert!(filter.is_active());
        filter.set_search("");
        filter.toggle_tag("React");
        assert!(filter.is_active());
        filter.clear_tag();
        assert!(!filter.is_active());
    }

    #[test]
    fn test_blog_filter_apply() {
        let store = builtin();
        let filter = BlogFilter {
            search: "react query".into(),
            tag: None,
        };
        assert_eq!(filter.apply(&store).len(), 1);
        assert_eq!(BlogFilter::default().apply(&store).len(), 6);
    }

    #[test]
    fn test_blog_filter_href() {
        assert_eq!(BlogFilter::default().href(), "/blog");

        let tagged = BlogFilter::default().toggled("React Query");
        assert_eq!(tagged.href(), "/blog/tag/react-query/");

        let searched = BlogFilter {
            search: " react query ".into(),
            tag: Some("Performance".into()),
        };
        assert_eq!(searched.href(), "/blog?q=react%20query&tag=Performance");
        assert_eq!(searched.without_tag().href(), "/blog?q=react%20query");
    }

    #[test]
    fn test_project_filter() {
        let store = builtin();
        let mut filter = ProjectFilter::default();
        assert_eq!(filter.apply(&store).len(), 6);
        assert_eq!(filter.href(), "/projects");

        filter.toggle_tag("FinTech");
        assert_eq!(filter.apply(&store).len(), 2);
        assert_eq!(filter.href(), "/projects/tag/fintech/");

        assert_eq!(filter.toggled("FinTech").tag, None);
        assert_eq!(filter.toggled("AI/ML").href(), "/projects/tag/ai-ml/");
    }

    #[test]
    fn test_contact_happy_path() {
        let mut form = ContactForm::default();
        assert_eq!(form.state(), ContactState::Idle);
        form.submit(filled()).unwrap();
        assert_eq!(form.state(), ContactState::Submitting);
        form.complete().unwrap();
        assert_eq!(form.state(), ContactState::Submitted);
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_contact_missing_field_stays_idle() {
        let mut form = ContactForm::default();
        let fields = ContactFields {
            subject: "  ".into(),
            ..filled()
        };
        assert_eq!(form.submit(fields), Err(ContactError::MissingField("subject")));
        assert_eq!(form.state(), ContactState::Idle);
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn test_contact_invalid_transitions() {
        let mut form = ContactForm::default();
        assert!(matches!(
            form.complete(),
            Err(ContactError::InvalidTransition { action: "complete", .. })
        ));

        form.submit(filled()).unwrap();
        assert!(form.submit(filled()).is_err());
        form.complete().unwrap();
        let err = form.submit(filled()).unwrap_err();
        assert_eq!(err.to_string(), "cannot submit while the form is submitted");
    }

    #[test]
    fn test_contact_fields_from_pairs() {
        let pairs = vec![
            ("name".to_string(), "Ada".to_string()),
            ("message".to_string(), "Hi".to_string()),
            ("extra".to_string(), "ignored".to_string()),
        ];
        let fields = ContactFields::from_pairs(&pairs);
        assert_eq!(fields.name, "Ada");
        assert_eq!(fields.message, "Hi");
        assert_eq!(fields.missing(), Some("email"));
    }
}
