//! `posts`, `projects`, `tags`, `toc` and `post` commands: query results
//! printed as plain text or JSON.

use crate::{
    cli::{Commands, TagSource},
    content::{BlogPost, ContentStore, Project},
    markdown::{TocEntry, extract_toc},
    query::{
        RELATED_LIMIT, adjacent_posts, calculate_reading_time, filter_posts_by_search_and_tag,
        filter_projects_by_search_and_tag, get_featured_projects, get_post_by_slug,
        get_related_posts, list_all_tags, list_posts,
    },
};
use anyhow::{Result, anyhow, bail};
use serde::Serialize;
use std::fmt::Write;

/// Post listing row.
#[derive(Debug, Serialize)]
struct PostRow<'a> {
    #[serde(flatten)]
    post: &'a BlogPost,
    reading_time: usize,
}

/// Everything the post page shows around the body.
#[derive(Debug, Serialize)]
struct PostReport<'a> {
    #[serde(flatten)]
    post: &'a BlogPost,
    reading_time: usize,
    previous: Option<&'a str>,
    next: Option<&'a str>,
    related: Vec<&'a str>,
    toc: Vec<TocEntry>,
}

/// Run an inspection command and return what it prints.
pub fn run(store: &ContentStore, command: &Commands) -> Result<String> {
    match command {
        Commands::Posts { search, tag, drafts, json } => {
            let posts = filter_posts_by_search_and_tag(list_posts(store, *drafts), search, tag.as_deref());
            let rows: Vec<_> = posts.into_iter().map(post_row).collect();
            if *json { to_json(&rows) } else { Ok(posts_text(&rows)) }
        }
        Commands::Projects { search, tag, featured, json } => {
            let base = if *featured {
                get_featured_projects(store)
            } else {
                store.projects().iter().collect()
            };
            let projects = filter_projects_by_search_and_tag(base, search, tag.as_deref());
            if *json { to_json(&projects) } else { Ok(projects_text(&projects)) }
        }
        Commands::Tags { source, json } => {
            let tags = match source {
                TagSource::Posts => list_all_tags(list_posts(store, false)),
                TagSource::Projects => list_all_tags(store.projects()),
            };
            if *json { to_json(&tags) } else { Ok(lines(tags.iter())) }
        }
        Commands::Toc { slug, json } => {
            let toc = extract_toc(&find_post(store, slug)?.content);
            if *json { to_json(&toc) } else { Ok(toc_text(&toc)) }
        }
        Commands::Post { slug, json } => {
            let report = post_report(store, find_post(store, slug)?);
            if *json { to_json(&report) } else { Ok(report_text(&report)) }
        }
        Commands::Build { .. } | Commands::Serve { .. } => bail!("not an inspection command"),
    }
}

fn find_post<'a>(store: &'a ContentStore, slug: &str) -> Result<&'a BlogPost> {
    get_post_by_slug(store, slug).ok_or_else(|| anyhow!("no post with slug `{slug}`"))
}

fn post_row(post: &BlogPost) -> PostRow<'_> {
    PostRow {
        post,
        reading_time: calculate_reading_time(&post.content),
    }
}

fn post_report<'a>(store: &'a ContentStore, post: &'a BlogPost) -> PostReport<'a> {
    let (older, newer) = adjacent_posts(store, &post.slug);
    PostReport {
        post,
        reading_time: calculate_reading_time(&post.content),
        previous: older.map(|p| p.slug.as_str()),
        next: newer.map(|p| p.slug.as_str()),
        related: get_related_posts(store, &post.slug, &post.tags, RELATED_LIMIT)
            .into_iter()
            .map(|p| p.slug.as_str())
            .collect(),
        toc: extract_toc(&post.content),
    }
}

// ============================================================================
// Text output
// ============================================================================

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

fn lines<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items.fold(String::new(), |mut out, item| {
        out.push_str(item);
        out.push('\n');
        out
    })
}

fn posts_text(rows: &[PostRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let draft = if row.post.draft { " (draft)" } else { "" };
        writeln!(
            out,
            "{}  {:>2} min  {}{}\n            {}  [{}]",
            row.post.date,
            row.reading_time,
            row.post.title,
            draft,
            row.post.slug,
            row.post.tags.join(", ")
        )
        .ok();
    }
    out
}

fn projects_text(projects: &[&Project]) -> String {
    let mut out = String::new();
    for project in projects {
        let star = if project.featured { "*" } else { " " };
        writeln!(out, "{star} {}  {}  [{}]", project.id, project.title, project.tags.join(", ")).ok();
    }
    out
}

fn toc_text(toc: &[TocEntry]) -> String {
    let mut out = String::new();
    for entry in toc {
        let indent = if entry.level == 3 { "  " } else { "" };
        writeln!(out, "{indent}{}  #{}", entry.text, entry.id).ok();
    }
    out
}

fn report_text(report: &PostReport) -> String {
    let post = report.post;
    let mut out = String::new();
    writeln!(out, "{}", post.title).ok();
    writeln!(out, "{}  {} min read  [{}]", post.date, report.reading_time, post.tags.join(", ")).ok();
    writeln!(out, "{}", post.summary).ok();
    writeln!(out, "previous: {}", report.previous.unwrap_or("-")).ok();
    writeln!(out, "next:     {}", report.next.unwrap_or("-")).ok();
    if !report.related.is_empty() {
        writeln!(out, "related:  {}", report.related.join(", ")).ok();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = crate::cli::Cli::try_parse_from(std::iter::once("folio").chain(args.iter().copied())).unwrap();
        run(&ContentStore::builtin().unwrap(), &cli.command)
    }

    #[test]
    fn test_posts_text() {
        let out = run_args(&["posts", "--search", "react query"]).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("2025-01-10"));
        assert!(out.contains("performance-optimization-react-query"));
    }

    #[test]
    fn test_posts_json() {
        let out = run_args(&["posts", "--tag", "performance", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["slug"], "performance-optimization-react-query");
        assert!(rows[0]["reading_time"].as_u64().unwrap() >= 1);
        assert!(rows[0].get("content").is_none());
    }

    #[test]
    fn test_projects_featured() {
        let out = run_args(&["projects", "--featured"]).unwrap();
        let ids: Vec<_> = out.lines().map(|l| l.split_whitespace().nth(1).unwrap()).collect();
        assert_eq!(ids, ["pim-platform", "loan-simulator", "ai-document-processor"]);
    }

    #[test]
    fn test_projects_tag_case_insensitive() {
        let out = run_args(&["projects", "--tag", "fintech"]).unwrap();
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_tags() {
        let out = run_args(&["tags", "projects"]).unwrap();
        assert!(out.lines().any(|l| l == "AI/ML"));
        let sorted = {
            let mut lines: Vec<_> = out.lines().collect();
            lines.sort();
            lines
        };
        assert_eq!(out.lines().collect::<Vec<_>>(), sorted);
    }

    #[test]
    fn test_toc_json_ids() {
        let out = run_args(&["toc", "nextjs-performance-deep-dive", "--json"]).unwrap();
        let entries: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(entries.as_array().unwrap().iter().any(|e| e["level"] == 3));
    }

    #[test]
    fn test_post_report() {
        let out = run_args(&["post", "accessible-components-react"]).unwrap();
        assert!(out.contains("previous: nextjs-performance-deep-dive"));
        assert!(out.contains("next:     typescript-patterns-frontend-engineers"));
        assert!(out.contains("related:  building-scalable-react-architecture"));
    }

    #[test]
    fn test_unknown_slug() {
        let err = run_args(&["toc", "nope"]).unwrap_err();
        assert!(err.to_string().contains("no post with slug `nope`"));
    }
}
