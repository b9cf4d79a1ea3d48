//! Timestamped artifact generation: path building, CSV and JSON writers.

use crate::error::ArtifactResult;
use chrono::Local;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-safe timestamp format: no colons or spaces
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Current local time as a filesystem-safe string, second precision.
///
/// Two artifacts built for the same directory/stem within the same second
/// collide; accepted limitation, not a uniqueness guarantee.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Build a timestamped artifact path like `data/numbers_2025-09-06_22-27-42.csv`.
///
/// The extension is normalized to carry exactly one leading dot.
pub fn build_path(directory: &Path, stem: &str, ext: &str) -> PathBuf {
    let ext = ext.trim_start_matches('.');
    directory.join(format!("{}_{}.{}", stem, timestamp(), ext))
}

/// Write a small CSV of `n,square,cube` rows for n in 1..=rows.
///
/// The row count is coerced to at least 1. Lines are joined with a single
/// newline and no trailing newline is written.
pub fn write_sample_csv(path: &Path, rows: u32) -> ArtifactResult<PathBuf> {
    let rows = rows.max(1) as i64;

    let mut lines = vec!["n,square,cube".to_string()];
    for n in 1..=rows {
        lines.push(format!("{},{},{}", n, n * n, n * n * n));
    }
    fs::write(path, lines.join("\n"))?;
    tracing::debug!("wrote CSV artifact: {:?} ({} rows)", path, rows);
    Ok(path.to_path_buf())
}

/// Serialize a record to pretty JSON with lexicographically sorted keys.
///
/// Sorted keys are a design contract, not an incidental detail: equal
/// inputs must produce byte-identical files so runs diff cleanly. Routing
/// through `serde_json::Value` sorts object keys, since serde_json's map
/// is BTree-backed by default.
pub fn write_json<T: Serialize>(record: &T, path: &Path) -> ArtifactResult<PathBuf> {
    let value = serde_json::to_value(record)?;
    let rendered = serde_json::to_string_pretty(&value)?;
    fs::write(path, rendered)?;
    tracing::debug!("wrote JSON artifact: {:?}", path);
    Ok(path.to_path_buf())
}
