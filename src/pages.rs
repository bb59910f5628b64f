//! The pages making up the website, and the one layout they share.

use anyhow::Result;
use lazy_static::lazy_static;
use ohtml::{att, Html, Node};

use crate::{
    arm,
    content::PROJECTS,
    nav::{Nav, NavEntry},
    page_context::PageContext,
    projects::{project_cards, GRID_ID},
    website_layout::WebsiteLayout,
};

pub const SITE_NAME: &str = "dcbgi";

static NAV: Nav = Nav(&[
    NavEntry { name: "Home", path: "index.html" },
    NavEntry { name: "3D Robot Arm", path: "arm.html" },
]);

lazy_static! {
    static ref LAYOUT: WebsiteLayout = WebsiteLayout {
        site_name: SITE_NAME,
        copyright_owner: SITE_NAME,
        copyright_from: 2024,
        nav: &NAV,
        header_contents: Box::new(|html| Ok(html.staticstr(SITE_NAME))),
    };
}

pub struct Page {
    /// Output path relative to the site root.
    pub path: &'static str,
    pub head_title: Option<&'static str>,
    main: fn(&Html, &PageContext) -> Result<Vec<Node>>,
    body_scripts: fn(&Html) -> Result<Vec<Node>>,
}

impl Page {
    pub fn render(&self, html: &Html, ctx: &PageContext) -> Result<Node> {
        LAYOUT.page(
            html,
            ctx,
            self.head_title,
            (self.main)(html, ctx)?,
            (self.body_scripts)(html)?,
        )
    }
}

pub const PAGES: &[Page] = &[
    Page {
        path: "index.html",
        head_title: None,
        main: index_main,
        body_scripts: no_scripts,
    },
    Page {
        path: "arm.html",
        head_title: Some("3D Robot Arm"),
        main: arm::arm_main,
        body_scripts: arm_scripts,
    },
];

fn no_scripts(_html: &Html) -> Result<Vec<Node>> {
    Ok(Vec::new())
}

fn arm_scripts(html: &Html) -> Result<Vec<Node>> {
    Ok(vec![arm::bootstrap_script(html)?])
}

fn index_main(html: &Html, _ctx: &PageContext) -> Result<Vec<Node>> {
    Ok(vec![
        html.section(
            [att("class", "intro")],
            [
                html.h1([], [html.staticstr("Hi, I'm dcbgi.")])?,
                html.p(
                    [],
                    [html.staticstr(
                        "I build things for the terminal, the web and the GPU. \
                         Here is a selection.",
                    )],
                )?,
            ],
        )?,
        html.section(
            [att("id", "projects")],
            [
                html.h2([], [html.staticstr("Projects")])?,
                html.div(
                    [att("id", GRID_ID), att("class", "projects-grid")],
                    project_cards(html, PROJECTS)?,
                )?,
            ],
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;

    fn render(path: &str) -> String {
        let html = Html::new();
        let page = PAGES.iter().find(|p| p.path == path).unwrap();
        let ctx = PageContext::new(page.path, SystemTime::UNIX_EPOCH);
        page.render(&html, &ctx)
            .unwrap()
            .to_html_document_string()
            .unwrap()
    }

    #[test]
    fn t_page_table() {
        let paths: Vec<_> = PAGES.iter().map(|p| p.path).collect();
        assert_eq!(paths, vec!["index.html", "arm.html"]);
    }

    #[test]
    fn t_index_page() {
        let s = render("index.html");
        // One card per live record, in order. Search below the grid
        // container only; the nav above also names the arm page.
        let grid = &s[s.find("id=\"projects-grid\"").unwrap()..];
        assert_eq!(
            grid.matches("<article class=\"project-card\">").count(),
            PROJECTS.len()
        );
        let mut last = 0;
        for record in PROJECTS {
            let found = grid.find(record.title).unwrap();
            assert!(found >= last);
            last = found;
        }
        // The home entry is current, so unlinked; the arm page is
        // linked.
        assert!(s.contains("<li>Home</li>"));
        assert!(s.contains("<a href=\"arm.html\">3D Robot Arm</a>"));
    }

    #[test]
    fn t_arm_page() {
        let s = render("arm.html");
        assert!(s.contains("<title>3D Robot Arm | dcbgi</title>"));
        assert!(s.contains("controls-panel"));
        assert!(s.contains("<a class=\"nav-logo\" href=\"index.html\">"));
    }
}
