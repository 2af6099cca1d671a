//! Filesystem utilities.

use std::io::Write;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::util::errors::{Error, Result};

/// Find files under `base/root` whose file name matches `pattern`.
///
/// Returned paths are relative to `base` (so they start with `root`) and come
/// out in a stable order: entries are visited sorted by file name. A missing
/// `root` yields no files.
pub fn find_files(base: &Path, root: &Path, pattern: &Pattern) -> Result<Vec<PathBuf>> {
    let dir = base.join(root);
    if !dir.exists() {
        tracing::debug!("{} does not exist, nothing to scan", dir.display());
        return Ok(Vec::new());
    }

    let mut results = Vec::new();
    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry.map_err(|source| Error::Discovery {
            path: dir.clone(),
            source,
        })?;

        // Symlinked files count; symlinked directories are not descended
        if !entry.path().is_file() {
            continue;
        }

        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| pattern.matches(name));
        if matches {
            let relative = entry.path().strip_prefix(base).unwrap_or(entry.path());
            results.push(relative.to_path_buf());
        }
    }

    Ok(results)
}

/// Write `contents` to `path` without ever leaving a partial file behind.
///
/// The data goes to a temporary file next to `path` which is then renamed
/// over it.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        Error::io(
            format!("failed to create temporary file in {}", dir.display()),
            e,
        )
    })?;
    tmp.write_all(contents.as_bytes())
        .and_then(|_| tmp.flush())
        .map_err(|e| Error::io(format!("failed to write {}", tmp.path().display()), e))?;
    tmp.persist(path)
        .map_err(|e| Error::io(format!("failed to write file: {}", path.display()), e.error))?;

    Ok(())
}
