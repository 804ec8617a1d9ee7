// src/file.rs

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::csv::write_row;
use crate::error::SnapshotError;

pub fn ensure_directory(dir: &Path) -> Result<(), SnapshotError> {
    if dir.exists() && !dir.is_dir() {
        return Err(SnapshotError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Write headers + rows into a temp file next to `dest`. Nothing is visible
/// under `dest` until the returned handle is published with [`publish`].
pub fn stage_table<S: AsRef<str>>(
    dest: &Path,
    headers: &[&str],
    rows: impl IntoIterator<Item = Vec<S>>,
    sep: char,
) -> Result<NamedTempFile, SnapshotError> {
    let dir = dest.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file());
        write_row(&mut out, headers, sep)?;
        for row in rows {
            write_row(&mut out, &row, sep)?;
        }
        out.flush()?;
    }
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

/// Move a staged file into place; refuses to replace an existing file.
pub fn publish(tmp: NamedTempFile, dest: &Path) -> Result<PathBuf, SnapshotError> {
    match tmp.persist_noclobber(dest) {
        Ok(_) => Ok(dest.to_path_buf()),
        Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(SnapshotError::Exists(dest.to_path_buf()))
        }
        Err(e) => Err(SnapshotError::Io(e.error)),
    }
}

/// Publish staged files in order. If one fails, the ones already published
/// by this call are removed again before the error is returned.
pub fn publish_all(staged: Vec<(NamedTempFile, &Path)>) -> Result<(), SnapshotError> {
    let mut done: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for (tmp, dest) in staged {
        match publish(tmp, dest) {
            Ok(p) => done.push(p),
            Err(e) => {
                for p in &done {
                    if let Err(rm) = fs::remove_file(p) {
                        logw!("Store: could not roll back {}: {}", p.display(), rm);
                    }
                }
                return Err(e);
            }
        }
    }
    Ok(())
}

/// File name of `p` as UTF-8, if it has one.
pub fn file_name_str(p: &Path) -> Option<&str> {
    p.file_name().and_then(|s| s.to_str())
}
