use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Dir,
    File,
    Other,
}

pub fn easy_filenames_in_dir<P>(
    path: P,
) -> Result<impl Iterator<Item = Result<(OsString, FileKind)>>>
where
    PathBuf: From<P>,
{
    let pathbuf: PathBuf = path.into();
    Ok(fs::read_dir(&pathbuf)
        .with_context(|| anyhow!("can't open directory for reading: {:?}",
                                 pathbuf.to_string_lossy()))?
        .map(move |entry_result| -> Result<(OsString, FileKind)> {
            let entry = entry_result.with_context(
                || anyhow!("reading directory: {:?}", pathbuf.to_string_lossy()))?;
            let ft = entry.file_type().with_context(
                || anyhow!("getting file type in: {:?}", pathbuf.to_string_lossy()))?;
            let kind = if ft.is_dir() {
                FileKind::Dir
            } else if ft.is_file() {
                FileKind::File
            } else {
                FileKind::Other
            };
            Ok((entry.file_name(), kind))
        }))
}

pub fn easy_filepaths_in_dir<P>(
    path: P,
) -> Result<impl Iterator<Item = Result<(PathBuf, FileKind)>>>
where
    PathBuf: From<P>,
    P: Clone,
{
    let pathbuf: PathBuf = path.clone().into();
    Ok(easy_filenames_in_dir(path)?.map(move |v| -> Result<(PathBuf, FileKind)> {
        let (item, kind) = v?;
        let mut filepath = pathbuf.clone();
        filepath.push(item);
        Ok((filepath, kind))
    }))
}

/// Write `contents`, creating missing parent directories first.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(
            || anyhow!("creating directory {:?}", parent.to_string_lossy()))?;
    }
    fs::write(path, contents).with_context(
        || anyhow!("writing file {:?}", path.to_string_lossy()))
}

/// Copy `src` to `dest`, creating missing parent directories of
/// `dest` first.
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).with_context(
            || anyhow!("creating directory {:?}", parent.to_string_lossy()))?;
    }
    fs::copy(src, dest)
        .map(|_| ())
        .with_context(|| anyhow!("copying {:?} to {:?}",
                                 src.to_string_lossy(), dest.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_write_and_copy() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("a/b/file.txt");
        write_file(&src, b"hello")?;
        assert_eq!(fs::read(&src)?, b"hello");

        let dest = dir.path().join("c/file.txt");
        copy_file(&src, &dest)?;
        assert_eq!(fs::read(&dest)?, b"hello");

        let listed: Vec<_> = easy_filepaths_in_dir(dir.path())?
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|(_, kind)| *kind == FileKind::Dir));
        Ok(())
    }

    #[test]
    fn t_missing_dir() {
        assert!(easy_filepaths_in_dir("/no/such/directory/anywhere").is_err());
    }
}
