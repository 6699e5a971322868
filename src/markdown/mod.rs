//! Markdown to HTML for post bodies.
//!
//! Rendering and the table-of-contents scan share one event pipeline, so a
//! TOC anchor always names an `id` present in the body.

mod anchor;
mod highlight;

pub use anchor::{AnchorIds, TocEntry, heading_id};
pub use highlight::{DEFAULT_THEME, Highlighter, UnknownTheme, available_themes};

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

/// Output of [`render_markdown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMarkdown {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

/// Render `markdown` to HTML and collect its level-2/3 headings.
pub fn render_markdown(markdown: &str, highlighter: &Highlighter) -> RenderedMarkdown {
    let mut events = parse(markdown);
    let toc = anchor_headings(&mut events);
    let events = highlight_code_blocks(events, highlighter);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    RenderedMarkdown { html: out, toc }
}

/// Level-2/3 headings of `markdown` in document order.
///
/// Headings inside fenced code are not headings.
pub fn extract_toc(markdown: &str) -> Vec<TocEntry> {
    anchor_headings(&mut parse(markdown))
}

// ============================================================================
// Event pipeline
// ============================================================================

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Parse into events, turning raw HTML into text so it is escaped on output.
fn parse(markdown: &str) -> Vec<Event<'_>> {
    Parser::new_ext(markdown, options())
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        })
        .collect()
}

fn toc_level(level: HeadingLevel) -> Option<u8> {
    match level {
        HeadingLevel::H2 => Some(2),
        HeadingLevel::H3 => Some(3),
        _ => None,
    }
}

/// Assign ids to level-2/3 headings in place and return them as TOC entries.
fn anchor_headings(events: &mut [Event<'_>]) -> Vec<TocEntry> {
    let mut ids = AnchorIds::default();
    let mut toc = Vec::new();
    let mut i = 0;

    while i < events.len() {
        let level = match &events[i] {
            Event::Start(Tag::Heading { level, .. }) => toc_level(*level),
            _ => None,
        };
        let Some(level) = level else {
            i += 1;
            continue;
        };

        let end = events[i..]
            .iter()
            .position(|e| matches!(e, Event::End(TagEnd::Heading(_))))
            .map_or(events.len(), |offset| i + offset);
        let text = heading_text(&events[i + 1..end]);
        let id = ids.allocate(&text);

        if let Event::Start(Tag::Heading { id: slot, .. }) = &mut events[i] {
            *slot = Some(id.clone().into());
        }
        toc.push(TocEntry { level, text, id });
        i = end + 1;
    }
    toc
}

fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(s) | Event::Code(s) => text.push_str(s),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_owned()
}

/// Replace each code block with a single pre-rendered HTML event.
fn highlight_code_blocks<'a>(events: Vec<Event<'a>>, highlighter: &Highlighter) -> Vec<Event<'a>> {
    let mut out = Vec::with_capacity(events.len());
    let mut block: Option<(Option<String>, String)> = None;

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => fence_language(&info),
                    CodeBlockKind::Indented => None,
                };
                block = Some((lang, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, code)) = block.take() {
                    let html = code_block_html(&code, lang.as_deref(), highlighter);
                    out.push(Event::Html(html.into()));
                }
            }
            Event::Text(text) if block.is_some() => {
                if let Some((_, code)) = block.as_mut() {
                    code.push_str(&text);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// First word of a fence info string: "rust,ignore" and "ts title" give the language only.
fn fence_language(info: &str) -> Option<String> {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .filter(|lang| !lang.is_empty())
        .map(str::to_owned)
}

fn code_block_html(code: &str, lang: Option<&str>, highlighter: &Highlighter) -> String {
    lang.and_then(|lang| highlighter.highlight(code, lang))
        .unwrap_or_else(|| format!("<pre><code>{}</code></pre>\n", escape_html(code)))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
