//! Template directory helpers.
//!
//! Template entries are resolved with `metadata()`, so a symlink to a file is
//! read like a regular file, and a symlink to a directory counts as a
//! nested directory.

use std::path::{Path, PathBuf};

use crate::errors::{CgError, Result};

/// Returns `true` if the path is, or links to, a directory.
#[must_use]
pub(crate) fn is_dir(path: &Path) -> bool {
    path.metadata().map(|m| m.is_dir()).unwrap_or(false)
}

/// List the direct entries of a template directory, sorted by file name.
///
/// Returns `TemplateRead` if the directory cannot be listed and
/// `NestedTemplate` for the first entry that is itself a directory.
pub(crate) fn list_template_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source: std::io::Error| CgError::TemplateRead {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if is_dir(&path) {
            return Err(CgError::NestedTemplate { path });
        }
        files.push(path);
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
