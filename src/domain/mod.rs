//! Domain entities for scaffold-report.
//!
//! This module contains the core business entities:
//! - ProjectLayout: the provisioned directory tree
//! - NumericSummary: descriptive statistics over a sample
//! - Sign: three-way integer classification

mod project;
mod summary;

pub use project::ProjectLayout;
pub use summary::{safe_divide, NumericSummary, Sign};
