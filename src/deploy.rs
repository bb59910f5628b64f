//! Deployment manifest and the publish cross-check.
//!
//! Publishing is an explicit file list, not "whatever the output
//! directory holds"; the cross-check keeps that list honest against
//! the content model.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use crate::content::{local_demo_pages, ProjectRecord};
use crate::easy_fs::copy_file;

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct DeployManifest {
    #[serde(rename = "copy")]
    pub copies: Vec<CopyEntry>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct CopyEntry {
    /// Path relative to the build output directory.
    pub src: String,
    /// Target path relative to the deploy directory; defaults to
    /// `src`.
    pub dest: Option<String>,
}

impl DeployManifest {
    pub fn load(path: &Path) -> Result<DeployManifest> {
        let text = fs::read_to_string(path).with_context(
            || anyhow!("reading deploy manifest {:?}", path.to_string_lossy()))?;
        let manifest: DeployManifest = toml::from_str(&text).with_context(
            || anyhow!("parsing deploy manifest {:?}", path.to_string_lossy()))?;
        if manifest.copies.is_empty() {
            bail!("deploy manifest {:?} has no copy entries", path.to_string_lossy());
        }
        Ok(manifest)
    }

    pub fn covers(&self, page: &str) -> bool {
        self.copies.iter().any(|entry| entry.src == page)
    }

    /// Every project demo that is a page of this site must be
    /// published, or the rendered link would dangle.
    pub fn check_covers_local_demos(&self, projects: &[ProjectRecord]) -> Result<()> {
        let missing: Vec<&str> = local_demo_pages(projects)
            .filter(|page| !self.covers(page))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            bail!("deploy manifest lacks copy entries for local demo page(s): {}",
                  missing.join(", "))
        }
    }

    pub fn execute(&self, outdir: &Path, deploydir: &Path) -> Result<()> {
        for entry in &self.copies {
            let dest = entry.dest.as_deref().unwrap_or(&entry.src);
            copy_file(&outdir.join(&entry.src), &deploydir.join(dest))?;
        }
        Ok(())
    }
}
