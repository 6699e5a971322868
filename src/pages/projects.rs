//! Projects gallery with a single-select tag filter.

use super::{
    Site,
    components::{FilterLink, filter_bar, page_header, tag_badges},
    layout::document,
};
use crate::{content::Project, query::list_all_tags, router::Section, state::ProjectFilter};
use maud::{Markup, html};

pub fn render(site: &Site, filter: &ProjectFilter) -> Markup {
    let projects = filter.apply(site.store);

    let all = FilterLink {
        label: "All".into(),
        href: ProjectFilter::default().href(),
        active: filter.tag.is_none(),
    };
    let tags = list_all_tags(site.store.projects()).into_iter().map(|tag| FilterLink {
        href: filter.toggled(&tag).href(),
        active: filter.tag.as_deref() == Some(tag.as_str()),
        label: tag,
    });

    let title = match &filter.tag {
        Some(tag) => format!("Projects tagged {tag}"),
        None => "Projects".to_owned(),
    };

    let content = html! {
        div.container {
            (page_header(
                "Projects",
                "A collection of impactful projects I've worked on, from enterprise platforms \
                 to innovative fintech solutions.",
            ))
            (filter_bar(std::iter::once(all).chain(tags)))

            @if projects.is_empty() {
                p.empty { "No projects found with the selected filter." }
            } @else {
                div.grid {
                    @for project in &projects {
                        (project_card(project))
                    }
                }
            }
        }
    };

    document(site, Some(title.as_str()), Some(Section::Projects), content)
}

fn project_card(project: &Project) -> Markup {
    html! {
        article.card.project-card id=(project.id) {
            @if project.featured {
                span.badge.badge-accent { "Featured" }
            }
            h3.card-title { (project.title) }
            p.muted { (project.description) }
            @if let Some(long) = &project.long_description {
                p.long-description { (long) }
            }
            (tag_badges(&project.tags, project.tags.len()))
            @if project.demo_url.is_some() || project.github_url.is_some() {
                div.card-links {
                    @if let Some(demo) = &project.demo_url {
                        a href=(demo) target="_blank" rel="noopener noreferrer" { "Demo" }
                    }
                    @if let Some(github) = &project.github_url {
                        a href=(github) target="_blank" rel="noopener noreferrer" { "Code" }
                    }
                }
            }
        }
    }
}
