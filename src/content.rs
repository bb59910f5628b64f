//! The content model: the ordered list of project records the home
//! page is rendered from.
//!
//! Authored by hand, immutable at run time. Add new projects to
//! [`PROJECTS`]; `generate --check` verifies the invariants below
//! before anything is written.

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Non-empty display text.
    pub title: &'static str,
    /// Short decorative glyph shown next to the title.
    pub icon: &'static str,
    pub description: &'static str,
    /// Display order is kept; duplicates are allowed.
    pub tags: &'static [&'static str],
    /// Link to the source repository; https only.
    pub source_link: Option<&'static str>,
    /// Live demo: an https URL, or the path of a page published
    /// alongside this site.
    pub demo_link: Option<&'static str>,
}

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Personal Profile Site",
        icon: "\u{1F310}",
        description: "This website, a personal profile and project showcase \
                      statically generated from a content model in Rust.",
        tags: &["Rust", "HTML", "CSS"],
        source_link: Some("https://github.com/dcbgi/Site"),
        demo_link: None,
    },
    ProjectRecord {
        title: "3D Robot Arm",
        icon: "\u{1F9BE}",
        description: "Interactive 3D robotic arm with flexion, twisting and \
                      grabbing, ported from C++/OpenGL to the web.",
        tags: &["C++", "OpenGL", "Three.js", "JavaScript"],
        source_link: Some("https://github.com/dcbgi/arm"),
        demo_link: Some("arm.html"),
    },
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("record {title:?}: field {field:?} is empty")]
    EmptyField {
        title: &'static str,
        field: &'static str,
    },
    #[error("record {title:?}: tag at position {index} is empty")]
    EmptyTag {
        title: &'static str,
        index: usize,
    },
    #[error("record {title:?}: {field} {url:?} does not parse: {reason}")]
    MalformedUrl {
        title: &'static str,
        field: &'static str,
        url: &'static str,
        reason: String,
    },
    #[error("record {title:?}: {field} {url:?} must use the https scheme")]
    InsecureUrl {
        title: &'static str,
        field: &'static str,
        url: &'static str,
    },
}

/// What a demo link points at.
pub enum DemoTarget {
    /// Externally hosted, absolute URL.
    Url(Url),
    /// Page published alongside this site; participates in the
    /// deployment cross-check.
    LocalPage(&'static str),
}

pub fn demo_target(link: &'static str) -> Result<DemoTarget, url::ParseError> {
    match Url::parse(link) {
        Ok(url) => Ok(DemoTarget::Url(url)),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(DemoTarget::LocalPage(link)),
        Err(e) => Err(e),
    }
}

fn check_https(
    title: &'static str,
    field: &'static str,
    link: &'static str,
) -> Result<(), ContentError> {
    let url = Url::parse(link).map_err(|e| ContentError::MalformedUrl {
        title,
        field,
        url: link,
        reason: e.to_string(),
    })?;
    if url.scheme() != "https" {
        return Err(ContentError::InsecureUrl { title, field, url: link });
    }
    Ok(())
}

pub fn check_record(record: &ProjectRecord) -> Result<(), ContentError> {
    let title = record.title;
    for (field, value) in [
        ("title", record.title),
        ("icon", record.icon),
        ("description", record.description),
    ] {
        if value.trim().is_empty() {
            return Err(ContentError::EmptyField { title, field });
        }
    }
    for (index, tag) in record.tags.iter().enumerate() {
        if tag.trim().is_empty() {
            return Err(ContentError::EmptyTag { title, index });
        }
    }
    if let Some(link) = record.source_link {
        check_https(title, "source link", link)?;
    }
    if let Some(link) = record.demo_link {
        match demo_target(link) {
            Ok(DemoTarget::Url(_)) => check_https(title, "demo link", link)?,
            Ok(DemoTarget::LocalPage(page)) => {
                if page.trim().is_empty() {
                    return Err(ContentError::EmptyField { title, field: "demo link" });
                }
            }
            Err(e) => {
                return Err(ContentError::MalformedUrl {
                    title,
                    field: "demo link",
                    url: link,
                    reason: e.to_string(),
                })
            }
        }
    }
    Ok(())
}

pub fn check_projects(projects: &[ProjectRecord]) -> Result<(), ContentError> {
    for record in projects {
        check_record(record)?;
    }
    Ok(())
}

/// Demo targets that are pages of this site rather than external
/// URLs; each of these must be covered by the deployment manifest.
pub fn local_demo_pages(
    projects: &[ProjectRecord],
) -> impl Iterator<Item = &'static str> + '_ {
    projects
        .iter()
        .filter_map(|record| record.demo_link)
        .filter(|link| matches!(demo_target(link), Ok(DemoTarget::LocalPage(_))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProjectRecord {
        ProjectRecord {
            title: "Thing",
            icon: "\u{2699}",
            description: "Does things.",
            tags: &["Rust"],
            source_link: Some("https://example.com/thing"),
            demo_link: Some("thing.html"),
        }
    }

    #[test]
    fn t_live_content_is_valid() {
        assert!(!PROJECTS.is_empty());
        check_projects(PROJECTS).unwrap();
    }

    #[test]
    fn t_empty_fields() {
        assert_eq!(
            check_record(&ProjectRecord { title: "  ", ..record() }),
            Err(ContentError::EmptyField { title: "  ", field: "title" })
        );
        assert_eq!(
            check_record(&ProjectRecord { icon: "", ..record() }),
            Err(ContentError::EmptyField { title: "Thing", field: "icon" })
        );
        assert_eq!(
            check_record(&ProjectRecord { description: "\t\n", ..record() }),
            Err(ContentError::EmptyField { title: "Thing", field: "description" })
        );
        assert_eq!(
            check_record(&ProjectRecord { tags: &["ok", " "], ..record() }),
            Err(ContentError::EmptyTag { title: "Thing", index: 1 })
        );
    }

    #[test]
    fn t_optional_fields_may_be_missing() {
        check_record(&ProjectRecord {
            tags: &[],
            source_link: None,
            demo_link: None,
            ..record()
        })
        .unwrap();
    }

    #[test]
    fn t_links_must_be_https() {
        assert_eq!(
            check_record(&ProjectRecord {
                source_link: Some("http://example.com/thing"),
                ..record()
            }),
            Err(ContentError::InsecureUrl {
                title: "Thing",
                field: "source link",
                url: "http://example.com/thing",
            })
        );
        assert_eq!(
            check_record(&ProjectRecord {
                demo_link: Some("ftp://example.com/demo"),
                ..record()
            }),
            Err(ContentError::InsecureUrl {
                title: "Thing",
                field: "demo link",
                url: "ftp://example.com/demo",
            })
        );
        // Relative demo paths are fine without a scheme.
        check_record(&ProjectRecord { demo_link: Some("demo.html"), ..record() }).unwrap();
    }

    #[test]
    fn t_demo_target() {
        assert!(matches!(demo_target("arm.html"), Ok(DemoTarget::LocalPage("arm.html"))));
        match demo_target("https://example.com/x") {
            Ok(DemoTarget::Url(url)) => assert_eq!(url.scheme(), "https"),
            _ => panic!("expected absolute URL"),
        }
    }

    #[test]
    fn t_local_demo_pages() {
        let pages: Vec<_> = local_demo_pages(PROJECTS).collect();
        assert_eq!(pages, vec!["arm.html"]);
    }
}
