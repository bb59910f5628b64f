use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::Result;
use clap::Parser;

use portfolio::content::{check_projects, PROJECTS};
use portfolio::deploy::DeployManifest;
use portfolio::site::build_site;
use portfolio::util::getenv_or;

#[derive(Parser, Debug)]
#[clap(about = "Generate the static website")]
struct Opts {
    /// Output directory for the generated site (fallback: OUTDIR env
    /// var, then "site").
    #[clap(long)]
    outdir: Option<PathBuf>,
    /// Directory holding the authored static assets (fallback:
    /// DATADIR env var, then "data").
    #[clap(long)]
    datadir: Option<PathBuf>,
    /// Deployment manifest checked by --check.
    #[clap(long, default_value = "deploy.toml")]
    manifest: PathBuf,
    /// Validate the content model and the deployment manifest
    /// without writing any files.
    #[clap(long)]
    check: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    if opts.check {
        check_projects(PROJECTS)?;
        DeployManifest::load(&opts.manifest)?.check_covers_local_demos(PROJECTS)?;
        println!("content model and deploy manifest are consistent");
        return Ok(());
    }

    let outdir: PathBuf = match opts.outdir {
        Some(dir) => dir,
        None => getenv_or("OUTDIR", Some("site"))?.into(),
    };
    let datadir: PathBuf = match opts.datadir {
        Some(dir) => dir,
        None => getenv_or("DATADIR", Some("data"))?.into(),
    };

    build_site(&outdir, &datadir, SystemTime::now())?;
    println!("site written to {:?}", outdir);
    Ok(())
}
