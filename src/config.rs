//! Configuration management for scaffold-report.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest CSV row count whose cube still fits in i64
pub const MAX_CSV_ROWS: u32 = 2_097_151;

/// Largest sample-bound magnitude whose square still fits in i64
pub const MAX_SAMPLE_MAGNITUDE: u64 = 3_037_000_499;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub sample: SampleConfig,
    #[serde(default)]
    pub readme: ReadmeConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            sample: SampleConfig::default(),
            readme: ReadmeConfig::default(),
        }
    }
}

impl ProjectConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&PathBuf>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.scaffold-report.toml in project root)
        if let Some(root) = project_root {
            let project_config = root.join(".scaffold-report.toml");
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/scaffold-report/config.toml)
        if let Some(config_dir) =
            directories::ProjectDirs::from("com", "scaffold-report", "scaffold-report")
        {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (SCAFFOLD_REPORT_*)
        builder = builder.add_source(
            Environment::with_prefix("SCAFFOLD_REPORT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with default settings only
    pub fn load_defaults() -> Self {
        Self::default()
    }

    /// Reject configurations the pipeline cannot execute safely.
    ///
    /// The sample range must be non-empty, and the numeric fields must
    /// stay within the bounds where squares and cubes fit in i64.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sample = &self.sample;

        if sample.low > sample.high {
            return Err(ConfigError::Invalid(format!(
                "sample range is empty: low {} > high {}",
                sample.low, sample.high
            )));
        }
        if sample.csv_rows > MAX_CSV_ROWS {
            return Err(ConfigError::Invalid(format!(
                "csv_rows {} exceeds the maximum of {}",
                sample.csv_rows, MAX_CSV_ROWS
            )));
        }
        if sample.low.unsigned_abs() > MAX_SAMPLE_MAGNITUDE
            || sample.high.unsigned_abs() > MAX_SAMPLE_MAGNITUDE
        {
            return Err(ConfigError::Invalid(format!(
                "sample bounds [{}, {}] exceed the maximum magnitude of {}",
                sample.low, sample.high, MAX_SAMPLE_MAGNITUDE
            )));
        }

        Ok(())
    }
}

/// Project layout configuration: names of the provisioned sub-directories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_data_directory")]
    pub data_directory: String,
    #[serde(default = "default_reports_directory")]
    pub reports_directory: String,
    #[serde(default = "default_images_directory")]
    pub images_directory: String,
    #[serde(default = "default_outputs_directory")]
    pub outputs_directory: String,
    #[serde(default = "default_archive_directory")]
    pub archive_directory: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            reports_directory: default_reports_directory(),
            images_directory: default_images_directory(),
            outputs_directory: default_outputs_directory(),
            archive_directory: default_archive_directory(),
        }
    }
}

fn default_data_directory() -> String {
    "data".to_string()
}

fn default_reports_directory() -> String {
    "reports".to_string()
}

fn default_images_directory() -> String {
    "images".to_string()
}

fn default_outputs_directory() -> String {
    "outputs".to_string()
}

fn default_archive_directory() -> String {
    "archive".to_string()
}

/// Sampling and artifact-size configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Number of data rows in the sample CSV (coerced to at least 1,
    /// capped at [`MAX_CSV_ROWS`] so row cubes fit in i64)
    #[serde(default = "default_csv_rows")]
    pub csv_rows: u32,
    /// Number of random draws for the numeric summary
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Inclusive lower bound of the random range; magnitude capped at
    /// [`MAX_SAMPLE_MAGNITUDE`] so squares fit in i64
    #[serde(default = "default_sample_low")]
    pub low: i64,
    /// Inclusive upper bound of the random range, not below `low`
    #[serde(default = "default_sample_high")]
    pub high: i64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            csv_rows: default_csv_rows(),
            sample_size: default_sample_size(),
            low: default_sample_low(),
            high: default_sample_high(),
        }
    }
}

fn default_csv_rows() -> u32 {
    12
}

fn default_sample_size() -> usize {
    50
}

fn default_sample_low() -> i64 {
    1
}

fn default_sample_high() -> i64 {
    100
}

/// README maintenance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeConfig {
    /// README filename, relative to the project root
    #[serde(default = "default_readme_filename")]
    pub filename: String,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            filename: default_readme_filename(),
        }
    }
}

fn default_readme_filename() -> String {
    "README.md".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.layout.data_directory, "data");
        assert_eq!(config.layout.archive_directory, "archive");
        assert_eq!(config.sample.csv_rows, 12);
        assert_eq!(config.sample.sample_size, 50);
        assert_eq!(config.sample.low, 1);
        assert_eq!(config.sample.high, 100);
        assert_eq!(config.readme.filename, "README.md");
    }

    #[test]
    fn test_default_config_validates() {
        assert!(ProjectConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut config = ProjectConfig::default();
        config.sample.low = 100;
        config.sample.high = 1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_csv_rows() {
        let mut config = ProjectConfig::default();
        config.sample.csv_rows = MAX_CSV_ROWS + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.sample.csv_rows = MAX_CSV_ROWS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_sample_bounds() {
        let mut config = ProjectConfig::default();
        config.sample.low = i64::MIN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ProjectConfig::default();
        config.sample.high = MAX_SAMPLE_MAGNITUDE as i64 + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ProjectConfig::default();
        config.sample.low = -(MAX_SAMPLE_MAGNITUDE as i64);
        config.sample.high = MAX_SAMPLE_MAGNITUDE as i64;
        assert!(config.validate().is_ok());
    }
}
