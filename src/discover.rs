use crate::foundation::error::{BytereelError, BytereelResult};
use std::path::PathBuf;

/// Expand a glob `pattern` into the regular files it matches.
///
/// Directories are skipped. With `sort` the result is in lexicographic path order; without it the
/// order is whatever the filesystem walk produced. Unreadable directory entries are logged and
/// skipped.
pub fn discover_files(pattern: &str, sort: bool) -> BytereelResult<Vec<PathBuf>> {
    if pattern.trim().is_empty() {
        return Err(BytereelError::pattern("file pattern must not be empty"));
    }
    let entries = glob::glob(pattern)
        .map_err(|e| BytereelError::pattern(format!("invalid pattern '{pattern}': {e}")))?;

    let mut out = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => out.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!(path = %e.path().display(), "skipping unreadable entry: {e}"),
        }
    }
    if sort {
        out.sort();
    }
    tracing::debug!(pattern, matches = out.len(), "discovered files");
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/unit/discover/discover.rs"]
mod tests;
