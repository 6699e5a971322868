//! Code block highlighting backed by syntect's bundled syntaxes and themes.

use std::sync::LazyLock;
use syntect::{
    highlighting::{Theme, ThemeSet},
    html::highlighted_html_for_string,
    parsing::{SyntaxReference, SyntaxSet},
};
use thiserror::Error;

/// Theme used when the config does not name one.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Fence languages without a bundled syntax, mapped to the closest one.
const ALIASES: &[(&str, &str)] = &[
    ("ts", "js"),
    ("typescript", "js"),
    ("tsx", "js"),
    ("jsx", "js"),
    ("shell", "sh"),
    ("zsh", "sh"),
    ("console", "sh"),
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown highlight theme `{0}`, available: {1}")]
pub struct UnknownTheme(pub String, pub String);

#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    theme: &'static Theme,
}

impl Highlighter {
    pub fn new(theme: &str) -> Result<Self, UnknownTheme> {
        let themes: &'static ThemeSet = &THEMES;
        match themes.themes.get(theme) {
            Some(theme) => Ok(Self { theme }),
            None => Err(UnknownTheme(theme.to_owned(), available_themes().join(", "))),
        }
    }

    /// Highlight `code` as `lang`, or `None` when no syntax matches.
    ///
    /// The result is a complete `<pre>` element with inline styles.
    pub fn highlight(&self, code: &str, lang: &str) -> Option<String> {
        let syntax = find_syntax(lang)?;
        highlighted_html_for_string(code, &SYNTAXES, syntax, self.theme).ok()
    }
}

/// Names of the bundled themes, sorted.
pub fn available_themes() -> Vec<&'static str> {
    let themes: &'static ThemeSet = &THEMES;
    themes.themes.keys().map(String::as_str).collect()
}

fn find_syntax(lang: &str) -> Option<&'static SyntaxReference> {
    let token = ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(lang))
        .map_or(lang, |(_, target)| *target);

    let syntaxes: &'static SyntaxSet = &SYNTAXES;
    syntaxes.find_syntax_by_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_exists() {
        assert!(Highlighter::new(DEFAULT_THEME).is_ok());
        assert!(available_themes().contains(&DEFAULT_THEME));
    }

    #[test]
    fn test_unknown_theme() {
        let err = Highlighter::new("no-such-theme").unwrap_err();
        assert_eq!(err.0, "no-such-theme");
        assert!(err.to_string().contains("base16-ocean.dark"));
    }

    #[test]
    fn test_aliases_resolve() {
        for lang in ["ts", "TypeScript", "tsx", "jsx", "js", "rust", "sh", "shell"] {
            assert!(find_syntax(lang).is_some(), "{lang} should resolve");
        }
    }

    #[test]
    fn test_unknown_language() {
        assert!(find_syntax("klingon").is_none());
        let highlighter = Highlighter::new(DEFAULT_THEME).unwrap();
        assert!(highlighter.highlight("x", "klingon").is_none());
    }

    #[test]
    fn test_highlight_escapes_markup() {
        let highlighter = Highlighter::new(DEFAULT_THEME).unwrap();
        let html = highlighter.highlight("const a = <div>x</div>;\n", "tsx").unwrap();
        assert!(html.starts_with("<pre"));
        assert!(html.contains("&lt;"));
        assert!(!html.contains("<div>"));
    }
}
