use anyhow::Result;
use chrono::Utc;
use ohtml::{att, Html, Node};

use crate::{
    nav::{Nav, ToHtml},
    page_context::PageContext,
    time_util::LocalYear,
};

pub struct WebsiteLayout {
    pub site_name: &'static str,
    pub copyright_owner: &'static str,
    /// First year of publication; the copyright line spans from here
    /// to the build year.
    pub copyright_from: i32,
    pub nav: &'static Nav<'static>,
    /// Contents of the `nav-logo` home anchor in the header.
    pub header_contents: Box<dyn Fn(&Html) -> Result<Node> + Send + Sync>,
}

impl WebsiteLayout {
    /// The full page document. `head_title`, when given and distinct
    /// from the site name, is shown as "title | site name".
    pub fn page(
        &self,
        html: &Html,
        ctx: &PageContext,
        head_title: Option<&str>,
        main: Vec<Node>,
        body_scripts: Vec<Node>,
    ) -> Result<Node> {
        let title = match head_title {
            Some(t) if t != self.site_name => format!("{t} | {}", self.site_name),
            _ => self.site_name.to_string(),
        };
        let mut body = vec![
            html.header(
                [att("class", "site-header")],
                [
                    // Home link on every page, the current one
                    // included.
                    html.a(
                        [att("class", "nav-logo"), att("href", "index.html")],
                        [(self.header_contents)(html)?],
                    )?,
                    self.nav.to_html(html, ctx)?,
                ],
            )?,
            html.main([], main)?,
            self.footer(html, ctx)?,
        ];
        body.extend(body_scripts);
        html.html(
            [att("lang", "en")],
            [
                html.head(
                    [],
                    [
                        html.meta([att("charset", "utf-8")], [])?,
                        html.meta(
                            [
                                att("name", "viewport"),
                                att("content", "width=device-width, initial-scale=1"),
                            ],
                            [],
                        )?,
                        html.title([], [html.string(title)])?,
                        html.link(
                            [att("rel", "stylesheet"), att("href", "static/main.css")],
                            [],
                        )?,
                    ],
                )?,
                html.body([], body)?,
            ],
        )
    }

    fn footer(&self, html: &Html, ctx: &PageContext) -> Result<Node> {
        let year = ctx.now().local_year(Utc);
        let mut line = vec![html.staticstr("\u{00A9} ")];
        line.extend(copyright_years(html, self.copyright_from, year)?);
        line.push(html.string(format!(" {}", self.copyright_owner)));
        html.footer(
            [att("class", "site-footer")],
            [html.p([att("class", "copyright")], line)?],
        )
    }
}

/// "2024\u{2013}<span id="year">2026</span>", collapsed to the bare
/// span when the years are equal. The `year` id is part of the
/// markup contract.
fn copyright_years(html: &Html, from: i32, to: i32) -> Result<Vec<Node>> {
    Ok(vec![
        if from == to {
            html.empty_node()
        } else {
            html.string(format!("{from}\u{2013}"))
        },
        html.span([att("id", "year")], [html.text(to)])?,
    ])
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use ohtml::Print;

    use super::*;

    static EMPTY_NAV: Nav = Nav(&[]);

    fn layout() -> WebsiteLayout {
        WebsiteLayout {
            site_name: "Example",
            copyright_owner: "Example Owner",
            copyright_from: 2020,
            nav: &EMPTY_NAV,
            header_contents: Box::new(|html| Ok(html.staticstr("Example"))),
        }
    }

    // 2026-07-01T00:00:00Z
    fn now() -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(1782864000)
    }

    fn page(head_title: Option<&str>) -> String {
        let html = Html::new();
        let ctx = PageContext::new("index.html", now());
        layout()
            .page(&html, &ctx, head_title, vec![], vec![])
            .unwrap()
            .to_html_document_string()
            .unwrap()
    }

    #[test]
    fn t_nav_logo_is_home_anchor() {
        let s = page(None);
        assert!(s.contains("<a class=\"nav-logo\" href=\"index.html\">Example</a>"));
    }

    #[test]
    fn t_footer_year() {
        let s = page(None);
        assert!(s.contains("<span id=\"year\">2026</span>"));
        assert!(s.contains("2020\u{2013}"));
        assert!(s.contains("Example Owner"));
    }

    #[test]
    fn t_title_composition() {
        assert!(page(None).contains("<title>Example</title>"));
        assert!(page(Some("Sub Page")).contains("<title>Sub Page | Example</title>"));
        // Not "Example | Example":
        assert!(page(Some("Example")).contains("<title>Example</title>"));
    }

    #[test]
    fn t_document_shape() {
        let s = page(None);
        assert!(s.contains("<!DOCTYPE html>"));
        assert!(s.contains("<html lang=\"en\">"));
        assert!(s.contains("<meta charset=\"utf-8\">"));
        assert!(s.contains("href=\"static/main.css\""));
    }

    #[test]
    fn t_copyright_years_collapse() -> Result<()> {
        let html = Html::new();
        let nodes = copyright_years(&html, 2026, 2026)?;
        assert_eq!(nodes.to_html_fragment_string()?, "<span id=\"year\">2026</span>");
        Ok(())
    }
}
