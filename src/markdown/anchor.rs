//! Heading anchors shared by the table of contents and the rendered body.

use regex::Regex;
use serde::Serialize;
use std::{collections::HashSet, sync::LazyLock};

/// One entry of the "On this page" navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading level, 2 or 3
    pub level: u8,
    /// Heading text with inline markup removed
    pub text: String,
    /// Anchor id, identical to the rendered heading's `id`
    pub id: String,
}

/// Derive an anchor id from heading text.
///
/// The text is lower-cased and every run of characters outside `[a-z0-9]`
/// becomes a single `-`. Leading and trailing dashes are kept.
///
/// # Examples
///
/// | Heading | Id |
/// |---------|----|
/// | `API & Performance Tips` | `api-performance-tips` |
/// | `Static Site Generation (SSG)` | `static-site-generation-ssg-` |
pub fn heading_id(text: &str) -> String {
    static RE_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

    RE_GAP.replace_all(&text.to_lowercase(), "-").into_owned()
}

/// Per-document id allocator.
///
/// The first heading deriving a given id keeps it; later ones get `-1`, `-2`, ...
#[derive(Debug, Default)]
pub struct AnchorIds {
    used: HashSet<String>,
}

impl AnchorIds {
    pub fn allocate(&mut self, text: &str) -> String {
        let base = heading_id(text);
        let mut id = base.clone();
        let mut n = 0;
        while self.used.contains(&id) {
            n += 1;
            id = format!("{base}-{n}");
        }
        self.used.insert(id.clone());
        id
    }
}
