//! Building the site: the only part that touches the filesystem
//! during generation.

use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};
use ohtml::Html;

use crate::{
    content::{check_projects, PROJECTS},
    easy_fs::{copy_file, easy_filepaths_in_dir, write_file, FileKind},
    page_context::PageContext,
    pages::PAGES,
    warn,
};

/// Render every page and copy the static assets into `outdir`. `now`
/// is sampled once by the caller so all pages agree on the build
/// time.
pub fn build_site(outdir: &Path, datadir: &Path, now: SystemTime) -> Result<()> {
    check_projects(PROJECTS).context("content model failed validation")?;
    let html = Html::new();
    for page in PAGES {
        let ctx = PageContext::new(page.path, now);
        let doc = page
            .render(&html, &ctx)
            .with_context(|| format!("rendering page {:?}", page.path))?;
        let mut out = Vec::new();
        doc.print_html_document(&mut out)?;
        write_file(&outdir.join(page.path), &out)?;
    }
    copy_static_assets(outdir, datadir)
}

fn copy_static_assets(outdir: &Path, datadir: &Path) -> Result<()> {
    let staticdir = datadir.join("static");
    if !staticdir.is_dir() {
        warn!("no static asset directory at {:?}, site will lack styles",
              staticdir.to_string_lossy());
        return Ok(());
    }
    for entry in easy_filepaths_in_dir(staticdir.as_path())? {
        let (path, kind) = entry?;
        match kind {
            FileKind::File => {
                let name = path.file_name().expect("listing yields named entries");
                copy_file(&path, &outdir.join("static").join(name))?;
            }
            FileKind::Dir => {
                warn!("skipping nested asset directory {:?}", path.to_string_lossy());
            }
            FileKind::Other => {
                warn!("skipping special file {:?}", path.to_string_lossy());
            }
        }
    }
    Ok(())
}
