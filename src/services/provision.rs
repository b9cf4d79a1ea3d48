//! Directory provisioning for the project layout.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Create every target directory (and missing parents) that does not yet
/// exist; existing directories are left untouched.
///
/// Returns the subset of input paths that did not exist prior to the call,
/// in input order, so the caller can report what was newly created.
pub fn ensure_dirs(dirs: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let created: Vec<PathBuf> = dirs.iter().filter(|d| !d.exists()).cloned().collect();
    for dir in dirs {
        fs::create_dir_all(dir)?;
    }
    Ok(created)
}

/// Render directory names for the console run report
pub fn dir_names(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|d| {
            d.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(", ")
}
