//! Unified error types for the scaffold-report application.

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("README error: {0}")]
    Readme(#[from] ReadmeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Artifact generation errors (path builder, CSV/JSON writers)
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// README auto-notes maintenance errors
#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for artifact operations
pub type ArtifactResult<T> = std::result::Result<T, ArtifactError>;

/// Result type alias for README operations
pub type ReadmeResult<T> = std::result::Result<T, ReadmeError>;
