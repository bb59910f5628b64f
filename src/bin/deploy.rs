use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::{anyhow, Result};
use clap::Parser;

use portfolio::content::PROJECTS;
use portfolio::deploy::DeployManifest;
use portfolio::scripting::xrun;
use portfolio::site::build_site;
use portfolio::util::getenv;

#[derive(Parser, Debug)]
#[clap(about = "Build, verify and publish the website")]
struct Opts {
    #[clap(long, default_value = "site")]
    outdir: PathBuf,
    #[clap(long, default_value = "data")]
    datadir: PathBuf,
    /// Directory the manifest's copy entries are applied to
    /// (fallback: DEPLOYDIR env var).
    #[clap(long)]
    deploydir: Option<PathBuf>,
    #[clap(long, default_value = "deploy.toml")]
    manifest: PathBuf,
    /// Skip running the test suite before publishing.
    #[clap(long)]
    skip_tests: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let deploydir: PathBuf = match opts.deploydir {
        Some(dir) => dir,
        None => getenv("DEPLOYDIR")?
            .ok_or_else(|| anyhow!("no --deploydir given and DEPLOYDIR env var is not set"))?
            .into(),
    };

    if !opts.skip_tests {
        xrun("cargo", &["test", "--quiet"])?;
    }

    let manifest = DeployManifest::load(&opts.manifest)?;
    manifest.check_covers_local_demos(PROJECTS)?;

    build_site(&opts.outdir, &opts.datadir, SystemTime::now())?;
    manifest.execute(&opts.outdir, &deploydir)?;
    println!("published {} file(s) to {:?}", manifest.copies.len(), deploydir);
    Ok(())
}
