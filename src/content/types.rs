//! Record types held by the content store.
//!
//! Every record is a plain value: no references between collections.
//! Relations such as "related posts" are computed by matching tag strings.

use chrono::NaiveDate;
use serde::Serialize;

/// Date format used by post dates, e.g. "2025-01-15".
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A project shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Unique identifier, e.g. "pim-platform"
    pub id: String,
    pub title: String,
    /// One or two sentence card description
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Promoted on the home page
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
}

/// A blog post with its markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    /// Unique URL-safe identifier
    pub slug: String,
    pub title: String,
    /// Publication date as authored, `YYYY-MM-DD`
    pub date: String,
    pub summary: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Excluded from default listings
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,
    #[serde(skip)]
    pub content: String,
    /// `date` parsed by [`super::ContentStore::new`]
    #[serde(skip)]
    pub(super) published: Option<NaiveDate>,
}

impl BlogPost {
    /// Parsed publication date.
    ///
    /// Always `Some` for posts that went through [`super::ContentStore::new`].
    pub fn published(&self) -> Option<NaiveDate> {
        self.published
    }

    /// URL path of the post page.
    pub fn url_path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// One entry of the work-experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub role: String,
    pub location: String,
    /// Free-text range, e.g. "Jan 2024 - Jun 2025"
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// A link to an external profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Display label, also used as `aria-label`
    pub label: String,
    pub url: String,
}

/// Facts about the site owner shown across pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    /// Job title under the name
    pub headline: String,
    /// Hero paragraph on the home page
    pub intro: String,
    /// Lead sentence on the about page
    pub about_lead: String,
    pub bio: Vec<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub languages: Vec<String>,
    pub socials: Vec<SocialLink>,
    /// Shows the "available for new opportunities" badge
    pub available: bool,
}

impl Profile {
    /// Phone number with spaces removed, suitable for a `tel:` link.
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }
}

/// Anything carrying a tag list, so tag helpers work on posts and projects alike.
pub trait Tagged {
    fn tags(&self) -> &[String];

    /// Case-insensitive exact tag match.
    fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags().iter().any(|t| t.to_lowercase() == wanted)
    }
}

impl Tagged for BlogPost {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Tagged for Project {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Tagged for ExperienceEntry {
    fn tags(&self) -> &[String] {
        &self.technologies
    }
}
