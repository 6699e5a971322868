//! Compiled-in site content.
//!
//! The store is built once at startup, validated, and then only read.
//! Consumers receive it by reference so tests can inject fixture data.

mod data;
mod types;

pub use types::{
    BlogPost, DATE_FORMAT, ExperienceEntry, Profile, Project, SkillCategory, SocialLink, Tagged,
};

use crate::{markdown::heading_id, query::list_all_tags};
use chrono::NaiveDate;
use regex::Regex;
use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};
use thiserror::Error;

/// Data-integrity errors found while constructing the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("post `{slug}` has an invalid date `{date}` (expected YYYY-MM-DD)")]
    InvalidDate { slug: String, date: String },

    #[error("post slug `{0}` is not URL-safe")]
    InvalidSlug(String),

    #[error("duplicate post slug `{0}`")]
    DuplicateSlug(String),

    #[error("duplicate project id `{0}`")]
    DuplicateProject(String),

    #[error("duplicate experience id `{0}`")]
    DuplicateExperience(String),

    #[error("tags `{first}` and `{second}` share the URL segment `{segment}`")]
    TagCollision {
        first: String,
        second: String,
        segment: String,
    },
}

/// Raw collections, before validation.
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub posts: Vec<BlogPost>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillCategory>,
    /// Short list shown on the home page
    pub highlighted_skills: Vec<String>,
    pub profile: Profile,
}

/// Validated, read-only content.
#[derive(Debug, Clone)]
pub struct ContentStore {
    content: Content,
}

impl ContentStore {
    /// Validate `content` and wrap it.
    pub fn new(mut content: Content) -> Result<Self, ContentError> {
        validate_posts(&mut content.posts)?;
        check_unique(content.projects.iter().map(|p| p.id.as_str()))
            .map_err(ContentError::DuplicateProject)?;
        check_unique(content.experience.iter().map(|e| e.id.as_str()))
            .map_err(ContentError::DuplicateExperience)?;
        check_tag_segments(&content.posts)?;
        check_tag_segments(&content.projects)?;
        Ok(Self { content })
    }

    /// The content shipped with the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::new(Content {
            posts: data::posts(),
            projects: data::projects(),
            experience: data::experience(),
            skills: data::skill_categories(),
            highlighted_skills: data::highlighted_skills(),
            profile: data::profile(),
        })
    }

    /// All posts in declaration order, drafts included.
    pub fn posts(&self) -> &[BlogPost] {
        &self.content.posts
    }

    /// All projects in declaration order.
    pub fn projects(&self) -> &[Project] {
        &self.content.projects
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.content.experience
    }

    pub fn skills(&self) -> &[SkillCategory] {
        &self.content.skills
    }

    pub fn highlighted_skills(&self) -> &[String] {
        &self.content.highlighted_skills
    }

    pub fn profile(&self) -> &Profile {
        &self.content.profile
    }
}

/// Check slugs and parse every post date once.
fn validate_posts(posts: &mut [BlogPost]) -> Result<(), ContentError> {
    static RE_SLUG: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

    for post in posts.iter_mut() {
        if !RE_SLUG.is_match(&post.slug) {
            return Err(ContentError::InvalidSlug(post.slug.clone()));
        }
        match NaiveDate::parse_from_str(&post.date, DATE_FORMAT) {
            Ok(date) => post.published = Some(date),
            Err(_) => {
                return Err(ContentError::InvalidDate {
                    slug: post.slug.clone(),
                    date: post.date.clone(),
                });
            }
        }
    }

    check_unique(posts.iter().map(|p| p.slug.as_str())).map_err(ContentError::DuplicateSlug)
}

/// Tag pages live at `/<section>/tag/<segment>/`, so no two tags may share a segment.
fn check_tag_segments<'a, T: Tagged + 'a>(
    items: impl IntoIterator<Item = &'a T>,
) -> Result<(), ContentError> {
    let mut seen: HashMap<String, String> = HashMap::new();
    for tag in list_all_tags(items) {
        let segment = heading_id(&tag);
        if let Some(first) = seen.get(&segment) {
            return Err(ContentError::TagCollision {
                first: first.clone(),
                second: tag,
                segment,
            });
        }
        seen.insert(segment, tag);
    }
    Ok(())
}

/// Return the first key seen twice.
fn check_unique<'a>(keys: impl Iterator<Item = &'a str>) -> Result<(), String> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(key.to_owned());
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_builtin_store_is_valid() {
        let store = ContentStore::builtin().unwrap();
        assert_eq!(store.posts().len(), 6);
        assert_eq!(store.projects().len(), 6);
        assert_eq!(store.experience().len(), 4);
        assert_eq!(store.skills().len(), 7);
        assert!(!store.profile().name.is_empty());
    }

    #[test]
    fn test_builtin_dates_parse() {
        let store = ContentStore::builtin().unwrap();
        assert!(store.posts().iter().all(|p| p.published().is_some()));
    }

    #[test]
    fn test_rejects_invalid_date() {
        let result = ContentStore::new(Content {
            posts: vec![post("a", "2025-02-30", &[])],
            ..Content::default()
        });
        assert_eq!(
            result.unwrap_err(),
            ContentError::InvalidDate {
                slug: "a".into(),
                date: "2025-02-30".into()
            }
        );
    }

    #[test]
    fn test_rejects_non_iso_date() {
        let result = ContentStore::new(Content {
            posts: vec![post("a", "January 5, 2025", &[])],
            ..Content::default()
        });
        assert!(matches!(result, Err(ContentError::InvalidDate { .. })));
    }

    #[test]
    fn test_rejects_duplicate_slug() {
        let result = ContentStore::new(Content {
            posts: vec![post("same", "2025-01-01", &[]), post("same", "2025-01-02", &[])],
            ..Content::default()
        });
        assert_eq!(result.unwrap_err(), ContentError::DuplicateSlug("same".into()));
    }

    #[test]
    fn test_rejects_unsafe_slug() {
        for slug in ["Has Caps", "trailing-", "-leading", "under_score", ""] {
            let result = ContentStore::new(Content {
                posts: vec![post(slug, "2025-01-01", &[])],
                ..Content::default()
            });
            assert!(
                matches!(result, Err(ContentError::InvalidSlug(_))),
                "slug {slug:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_date_parsed_at_construction() {
        let mut raw = post("a", "2025-03-09", &[]);
        raw.published = None;

        let store = ContentStore::new(Content {
            posts: vec![raw],
            ..Content::default()
        })
        .unwrap();
        assert_eq!(store.posts()[0].published(), NaiveDate::from_ymd_opt(2025, 3, 9));
    }

    #[test]
    fn test_rejects_colliding_post_tags() {
        let result = ContentStore::new(Content {
            posts: vec![post("a", "2025-01-01", &["C#"]), post("b", "2025-01-02", &["C++"])],
            ..Content::default()
        });
        assert_eq!(
            result.unwrap_err(),
            ContentError::TagCollision {
                first: "C#".into(),
                second: "C++".into(),
                segment: "c-".into(),
            }
        );
    }

    #[test]
    fn test_rejects_case_variant_project_tags() {
        let result = ContentStore::new(Content {
            projects: vec![project("p", &["React"], false), project("q", &["react"], false)],
            ..Content::default()
        });
        assert!(matches!(
            result,
            Err(ContentError::TagCollision { ref segment, .. }) if segment == "react"
        ));
    }

    #[test]
    fn test_same_tag_in_both_sections_is_allowed() {
        let result = ContentStore::new(Content {
            posts: vec![post("a", "2025-01-01", &["React"])],
            projects: vec![project("p", &["React"], false)],
            ..Content::default()
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_builtin_tag_segments_resolve_to_their_tag() {
        use crate::{router::Route, state::BlogFilter};

        let store = ContentStore::builtin().unwrap();
        for tag in list_all_tags(store.posts()) {
            let path = format!("/blog/tag/{}/", heading_id(&tag));
            let expected = Route::Blog(BlogFilter {
                search: String::new(),
                tag: Some(tag.clone()),
            });
            assert_eq!(Route::resolve(&store, &path, ""), expected, "tag {tag:?}");
        }
    }

    #[test]
    fn test_rejects_duplicate_project() {
        let result = ContentStore::new(Content {
            projects: vec![project("p", &[], false), project("p", &[], true)],
            ..Content::default()
        });
        assert_eq!(result.unwrap_err(), ContentError::DuplicateProject("p".into()));
    }

    #[test]
    fn test_phone_href_strips_spaces() {
        let profile = Profile {
            phone: "+212 708 215 342".into(),
            ..Profile::default()
        };
        assert_eq!(profile.phone_href(), "tel:+212708215342");
    }

    #[test]
    fn test_has_tag_is_case_insensitive() {
        let p = project("p", &["TypeScript", "AI/ML"], false);
        assert!(p.has_tag("typescript"));
        assert!(p.has_tag("ai/ml"));
        assert!(!p.has_tag("Type"));
    }

    #[test]
    fn test_error_display() {
        let err = ContentError::DuplicateSlug("x".into());
        assert!(err.to_string().contains("duplicate post slug"));
    }
}
