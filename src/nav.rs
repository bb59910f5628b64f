use anyhow::Result;
use ohtml::{att, Html, Node, TryCollectBody};

use crate::page_context::PageContext;

pub trait ToHtml {
    fn to_html(&self, html: &Html, ctx: &PageContext) -> Result<Node>;
}

pub struct NavEntry {
    pub name: &'static str,
    /// Site-relative output path of the page this entry points at.
    pub path: &'static str,
}

impl ToHtml for NavEntry {
    fn to_html(&self, html: &Html, ctx: &PageContext) -> Result<Node> {
        let name = html.staticstr(self.name);
        html.li(
            [],
            [if ctx.path() == self.path {
                // The current page is shown, not linked.
                name
            } else {
                html.a([att("href", self.path)], [name])?
            }],
        )
    }
}

pub struct Nav<'t>(pub &'t [NavEntry]);

impl<'t> ToHtml for Nav<'t> {
    fn to_html(&self, html: &Html, ctx: &PageContext) -> Result<Node> {
        html.ul(
            [att("class", "nav")],
            self.0
                .iter()
                .map(|naventry| naventry.to_html(html, ctx))
                .try_collect_body()?,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use ohtml::Print;

    use super::*;

    const NAV: Nav = Nav(&[
        NavEntry { name: "Home", path: "index.html" },
        NavEntry { name: "Demos", path: "demos.html" },
    ]);

    #[test]
    fn t_current_entry_is_unlinked() -> Result<()> {
        let html = Html::new();
        let ctx = PageContext::new("index.html", SystemTime::UNIX_EPOCH);
        let s = NAV.to_html(&html, &ctx)?.to_html_fragment_string()?;
        assert_eq!(
            s,
            "<ul class=\"nav\"><li>Home</li>\
             <li><a href=\"demos.html\">Demos</a></li></ul>"
        );
        Ok(())
    }
}
