//! Rendering of project records into cards.
//!
//! Pure: content in, nodes out. Writing the result into a page is
//! the site builder's business. The class names and the grid id are
//! a published contract, the test suites assert against them.

use anyhow::Result;
use ohtml::{att, Html, Node, TryCollectBody};

use crate::content::ProjectRecord;

/// Id of the container the cards are placed into.
pub const GRID_ID: &str = "projects-grid";

/// One node per record, in input order; for an empty model, a single
/// empty-state placeholder instead.
pub fn project_cards(html: &Html, projects: &[ProjectRecord]) -> Result<Vec<Node>> {
    if projects.is_empty() {
        return Ok(vec![html.p(
            [att("class", "empty-state")],
            [html.staticstr("No projects yet \u{2014} check back soon!")],
        )?]);
    }
    projects
        .iter()
        .map(|record| project_card(html, record))
        .try_collect_body()
}

pub fn project_card(html: &Html, record: &ProjectRecord) -> Result<Node> {
    html.article(
        [att("class", "project-card")],
        [
            html.div(
                [att("class", "project-card-header")],
                [
                    html.span(
                        [att("class", "project-icon"), att("aria-hidden", "true")],
                        [html.str(record.icon)],
                    )?,
                    html.h3([att("class", "project-title")], [html.str(record.title)])?,
                ],
            )?,
            html.p([att("class", "project-desc")], [html.str(record.description)])?,
            tags_div(html, record)?,
            links_div(html, record)?,
        ],
    )
}

/// Omitted entirely when the record has no tags.
fn tags_div(html: &Html, record: &ProjectRecord) -> Result<Node> {
    if record.tags.is_empty() {
        return Ok(html.empty_node());
    }
    html.div(
        [att("class", "project-tags")],
        record
            .tags
            .iter()
            .map(|tag| html.span([att("class", "tag")], [html.str(tag)]))
            .try_collect_body()?,
    )
}

/// Omitted entirely when the record has neither link.
fn links_div(html: &Html, record: &ProjectRecord) -> Result<Node> {
    let mut links = Vec::new();
    for (label, target) in [
        ("GitHub \u{2192}", record.source_link),
        ("Live Demo \u{2192}", record.demo_link),
    ] {
        if let Some(target) = target {
            links.push(html.a(
                [
                    att("href", target),
                    att("class", "project-link"),
                    att("target", "_blank"),
                    // The new context must not get a handle back
                    // onto this page.
                    att("rel", "noopener noreferrer"),
                ],
                [html.staticstr(label)],
            )?);
        }
    }
    if links.is_empty() {
        Ok(html.empty_node())
    } else {
        html.div([att("class", "project-links")], links)
    }
}
