//! Service layer for scaffold-report.
//!
//! Services handle the side-effecting operations:
//! - provision: idempotent directory creation
//! - artifact: timestamped paths, CSV and JSON writers
//! - sampling: uniform random integer draws
//! - readme: auto-notes block maintenance
//! - tagline: optional collaborator with fallback

pub mod artifact;
pub mod provision;
pub mod readme;
pub mod sampling;
pub mod tagline;
