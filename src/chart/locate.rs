/// Chart root discovery: map arbitrary file paths to the chart they belong to.
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// File marking the root directory of a Helm chart.
pub const CHART_FILE: &str = "Chart.yaml";

/// Return the nearest directory at or above `path` that contains [`CHART_FILE`].
///
/// A directory path is searched from itself, any other path from its parent.
/// The walk stops once a directory is its own parent: the filesystem root
/// for absolute paths, `.` for relative ones.
#[must_use]
pub fn locate(path: &Path) -> Option<PathBuf> {
    let mut dir = if path.is_dir() {
        path.to_path_buf()
    } else {
        parent_dir(path).to_path_buf()
    };

    loop {
        if dir.join(CHART_FILE).is_file() {
            return Some(dir);
        }
        let parent = parent_dir(&dir);
        if parent == dir {
            return None;
        }
        dir = parent.to_path_buf();
    }
}

/// Return the distinct chart directories the given paths belong to.
///
/// Paths outside any chart are skipped with a warning.
#[must_use]
pub fn locate_all<P: AsRef<Path>>(paths: &[P]) -> BTreeSet<PathBuf> {
    paths
        .iter()
        .filter_map(|p| {
            let path = p.as_ref();
            let found = locate(path);
            if found.is_none() {
                log::warn!("{} does not belong to any Helm chart", path.display());
            }
            found
        })
        .collect()
}

/// Parent of `path`, with the empty parent of a bare relative name read as `.`.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None if path.as_os_str().is_empty() => Path::new("."),
        None => path,
    }
}
