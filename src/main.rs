//! scaffold-report: project scaffolding and report generator
//!
//! Provisions the project directory layout, writes timestamped CSV/JSON
//! artifacts, and keeps the README auto-notes block up to date.

use anyhow::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scaffold_report::{App, ProjectConfig};

/// Initialize logging with RUST_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    // Project root: first CLI argument, else the current directory
    let project_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    tracing::info!("Starting scaffold-report in {:?}", project_root);

    let config = ProjectConfig::load(Some(&project_root))?;
    let app = App::new(project_root, config);
    app.run()?;

    Ok(())
}
