//! Pipeline orchestrator for scaffold-report.
//!
//! Runs the linear pipeline: provision directories → write CSV →
//! generate random sample → summarize → write JSON → update README.

use crate::config::ProjectConfig;
use crate::domain::{safe_divide, NumericSummary, ProjectLayout, Sign};
use crate::error::Result;
use crate::services::tagline::TaglineProvider;
use crate::services::{artifact, provision, readme, sampling, tagline};
use std::path::PathBuf;

/// Outcome of a single pipeline run
#[derive(Debug)]
pub struct RunReport {
    /// Directories that did not exist before this run, in layout order
    pub created_directories: Vec<PathBuf>,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    pub summary: NumericSummary,
}

/// Application entry point wiring configuration, layout, and services
pub struct App {
    layout: ProjectLayout,
    config: ProjectConfig,
    tagline_provider: Option<Box<dyn TaglineProvider>>,
}

impl App {
    /// Create a new App rooted at the given project directory
    pub fn new(project_root: PathBuf, config: ProjectConfig) -> Self {
        let layout = ProjectLayout::new(project_root, &config);
        Self {
            layout,
            config,
            tagline_provider: None,
        }
    }

    /// Configure a tagline collaborator; without one the fixed fallback is used
    pub fn with_tagline(mut self, provider: Box<dyn TaglineProvider>) -> Self {
        self.tagline_provider = Some(provider);
        self
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Execute the pipeline once, printing the console run report
    pub fn run(&self) -> Result<RunReport> {
        println!("{}", tagline::resolve(self.tagline_provider.as_deref()));
        println!("Hello from scaffold-report!");

        // 1) Ensure folders exist
        let directories = self.layout.directories();
        let created = provision::ensure_dirs(&directories)?;
        if created.is_empty() {
            println!("All expected folders already exist.");
        } else {
            println!("Created: {}", provision::dir_names(&created));
        }

        // 2) Timestamped CSV into data/
        let csv_path = artifact::build_path(&self.layout.data_directory, "numbers", "csv");
        artifact::write_sample_csv(&csv_path, self.config.sample.csv_rows)?;
        println!("Wrote CSV -> {}", self.layout.display_relative(&csv_path));

        // 3) Random sample, summary, and JSON into outputs/
        let sample = &self.config.sample;
        let nums = sampling::generate_random_numbers(sample.sample_size, sample.low, sample.high);
        let summary = NumericSummary::from_samples(&nums);
        let json_path =
            artifact::build_path(&self.layout.outputs_directory, "numbers_summary", "json");
        artifact::write_json(&summary, &json_path)?;
        println!("Wrote JSON -> {}", self.layout.display_relative(&json_path));

        println!("safe_divide(10, 0) -> {:?}", safe_divide(10.0, 0.0));
        println!("categorize(7) -> {}", Sign::of(7));

        // 4) Record the run in the README auto-notes block
        let readme_service =
            readme::ReadmeService::new(self.layout.readme_path.clone(), self.layout.root_name());
        readme_service.note(
            "Automation Functions Implemented",
            &[
                "ensure_dirs - create project folders if missing".to_string(),
                "timestamp/build_path - timestamped artifact paths".to_string(),
                "write_sample_csv - tiny CSV artifact".to_string(),
                "generate_random_numbers - uniform draws".to_string(),
                "NumericSummary - descriptive statistics".to_string(),
                "write_json - pretty, diffable JSON artifact".to_string(),
                "safe_divide - division-by-zero sentinel".to_string(),
                "Sign::of - negative/zero/positive labels".to_string(),
            ],
        )?;

        Ok(RunReport {
            created_directories: created,
            csv_path,
            json_path,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::readme::{END_MARKER, START_MARKER};
    use std::fs;
    use tempfile::TempDir;

    fn app_in(temp: &TempDir) -> App {
        App::new(temp.path().to_path_buf(), ProjectConfig::default())
    }

    #[test]
    fn test_run_provisions_and_writes_artifacts() {
        let temp = TempDir::new().unwrap();
        let report = app_in(&temp).run().unwrap();

        assert_eq!(report.created_directories.len(), 5);
        for name in ["data", "reports", "images", "outputs", "archive"] {
            assert!(temp.path().join(name).is_dir());
        }

        assert!(report.csv_path.starts_with(temp.path().join("data")));
        assert!(report.csv_path.exists());
        assert!(report.json_path.starts_with(temp.path().join("outputs")));
        assert!(report.json_path.exists());

        assert_eq!(report.summary.count, 50);

        let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert!(readme.contains(START_MARKER));
        assert!(readme.contains(END_MARKER));
    }

    #[test]
    fn test_second_run_creates_nothing_new() {
        let temp = TempDir::new().unwrap();
        let app = app_in(&temp);

        app.run().unwrap();
        let report = app.run().unwrap();
        assert!(report.created_directories.is_empty());

        // README still holds exactly one block
        let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert_eq!(readme.matches(START_MARKER).count(), 1);
    }

    #[test]
    fn test_custom_tagline_provider() {
        use crate::services::tagline::StaticTagline;

        let temp = TempDir::new().unwrap();
        let app = app_in(&temp)
            .with_tagline(Box::new(StaticTagline("course project".to_string())));
        // Provider wiring only; console output is informational
        app.run().unwrap();
    }
}
