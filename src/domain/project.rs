//! Project layout entity describing the provisioned directory tree.

use crate::config::ProjectConfig;
use std::path::PathBuf;

/// The fixed, ordered set of project directories rooted at a base directory.
///
/// Constructed once from configuration at startup and threaded through
/// calls rather than referenced as ambient globals.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Project root path
    pub root_path: PathBuf,
    /// CSV artifacts land here
    pub data_directory: PathBuf,
    /// Human-authored reports
    pub reports_directory: PathBuf,
    /// Plots and figures
    pub images_directory: PathBuf,
    /// JSON artifacts land here
    pub outputs_directory: PathBuf,
    /// Retired artifacts
    pub archive_directory: PathBuf,
    /// README path for auto-notes maintenance
    pub readme_path: PathBuf,
}

impl ProjectLayout {
    /// Create a new ProjectLayout from a root path and configuration
    pub fn new(root_path: PathBuf, config: &ProjectConfig) -> Self {
        let layout = &config.layout;
        Self {
            data_directory: root_path.join(&layout.data_directory),
            reports_directory: root_path.join(&layout.reports_directory),
            images_directory: root_path.join(&layout.images_directory),
            outputs_directory: root_path.join(&layout.outputs_directory),
            archive_directory: root_path.join(&layout.archive_directory),
            readme_path: root_path.join(&config.readme.filename),
            root_path,
        }
    }

    /// All provisioned directories, in fixed order
    pub fn directories(&self) -> Vec<PathBuf> {
        vec![
            self.data_directory.clone(),
            self.reports_directory.clone(),
            self.images_directory.clone(),
            self.outputs_directory.clone(),
            self.archive_directory.clone(),
        ]
    }

    /// Name of the project root directory, used as the default README title
    pub fn root_name(&self) -> String {
        self.root_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("project")
            .to_string()
    }

    /// Render a path relative to the project root where possible
    pub fn display_relative(&self, path: &std::path::Path) -> String {
        path.strip_prefix(&self.root_path)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
