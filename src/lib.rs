//! scaffold-report: project scaffolding and report generator
//!
//! This crate provisions a fixed project directory layout, writes
//! timestamped CSV and JSON artifacts, and maintains an auto-generated
//! notes block inside the project README.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use app::{App, RunReport};
pub use config::ProjectConfig;
pub use error::{AppError, Result};
