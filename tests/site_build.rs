use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::Result;
use portfolio::content::PROJECTS;
use portfolio::site::build_site;

fn datadir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn builds_complete_site() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let outdir = dir.path().join("site");
    build_site(&outdir, &datadir(), SystemTime::now())?;

    let index = fs::read_to_string(outdir.join("index.html"))?;
    assert!(index.starts_with("\u{FEFF}<!DOCTYPE html>"));
    assert!(index.contains("id=\"projects-grid\""));
    assert_eq!(
        index.matches("<article class=\"project-card\">").count(),
        PROJECTS.len()
    );
    for record in PROJECTS {
        assert!(index.contains(record.title));
        assert!(index.contains(record.icon));
    }

    let arm = fs::read_to_string(outdir.join("arm.html"))?;
    assert!(arm.contains("class=\"controls-panel\""));

    assert!(outdir.join("static/main.css").is_file());
    assert!(outdir.join("static/arm.js").is_file());
    Ok(())
}

#[test]
fn missing_static_dir_is_not_fatal() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let outdir = dir.path().join("site");
    // No data directory at all; pages must still be written.
    build_site(&outdir, &dir.path().join("nodata"), SystemTime::now())?;
    assert!(outdir.join("index.html").is_file());
    assert!(outdir.join("arm.html").is_file());
    assert!(!outdir.join("static").exists());
    Ok(())
}

#[test]
fn build_is_deterministic_for_a_fixed_clock() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let now = SystemTime::now();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    build_site(&a, &datadir(), now)?;
    build_site(&b, &datadir(), now)?;
    assert_eq!(
        fs::read(a.join("index.html"))?,
        fs::read(b.join("index.html"))?
    );
    assert_eq!(fs::read(a.join("arm.html"))?, fs::read(b.join("arm.html"))?);
    Ok(())
}
