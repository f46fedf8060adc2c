use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension used when the output base has none.
pub const DEFAULT_EXTENSION: &str = "mp4";

/// Output path of segment `number` (1-based) for the output base `base`.
///
/// `out/video.mp4` with segment 2 becomes `out/video_part2.mp4`. Only the final extension is
/// replaced, so `a.tar.mp4` becomes `a.tar_part1.mp4`.
pub fn segment_path(base: &Path, number: u32) -> PathBuf {
    let stem = base.file_stem().map(OsString::from).unwrap_or_default();
    let ext = base
        .extension()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DEFAULT_EXTENSION));

    let mut name = stem;
    name.push(format!("_part{number}."));
    name.push(ext);
    base.with_file_name(name)
}

#[cfg(test)]
#[path = "../tests/unit/naming/naming.rs"]
mod tests;
