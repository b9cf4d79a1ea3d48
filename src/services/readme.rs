//! README auto-notes maintenance.
//!
//! Keeps a single machine-maintained block inside the README, bounded by
//! literal marker comments. Updates replace the first marker-delimited
//! span in place; documents without markers get the block appended.

use crate::error::ReadmeResult;
use regex::Regex;
use std::fs;
use std::path::PathBuf;

/// Start marker, on its own line
pub const START_MARKER: &str = "<!-- AUTO_NOTES_START -->";
/// End marker, on its own line
pub const END_MARKER: &str = "<!-- AUTO_NOTES_END -->";

/// Service maintaining the auto-notes block of one README document
pub struct ReadmeService {
    readme_path: PathBuf,
    /// Title for the default document created when the README is missing
    default_title: String,
}

impl ReadmeService {
    /// Create a new ReadmeService
    pub fn new(readme_path: PathBuf, default_title: impl Into<String>) -> Self {
        Self {
            readme_path,
            default_title: default_title.into(),
        }
    }

    /// Replace or append the auto-notes block with a fresh rendering.
    ///
    /// If the document contains a start marker followed by an end marker,
    /// the first such span (markers inclusive, non-greedy) is replaced and
    /// its prior content discarded. Otherwise the rendered block is
    /// appended to the document, which is initialized to a minimal default
    /// when the README does not exist yet.
    pub fn note(&self, section_title: &str, lines: &[String]) -> ReadmeResult<()> {
        let text = if self.readme_path.exists() {
            fs::read_to_string(&self.readme_path)?
        } else {
            format!("# {}\n\n", self.default_title)
        };

        let block = render_block(section_title, lines);

        // Markers must appear in order for in-place replacement
        let span = Regex::new(&format!(
            "{}[\\s\\S]*?{}",
            regex::escape(START_MARKER),
            regex::escape(END_MARKER)
        ))
        .expect("marker pattern is valid");

        // NoExpand keeps note text literal; `$` must not act as a
        // capture-group reference in the replacement
        let new_text = if span.is_match(&text) {
            span.replace(&text, regex::NoExpand(block.as_str()))
                .into_owned()
        } else {
            format!("{}\n{}\n", text, block)
        };

        fs::write(&self.readme_path, new_text)?;
        tracing::debug!("updated auto-notes block in {:?}", self.readme_path);
        Ok(())
    }
}

/// Render the marker-wrapped notes block
fn render_block(section_title: &str, lines: &[String]) -> String {
    let mut parts = vec![String::new(), format!("## {}", section_title), String::new()];
    parts.extend(lines.iter().map(|ln| format!("- {}", ln)));
    parts.push(String::new());
    parts.push(String::new());

    format!("{}\n{}{}", START_MARKER, parts.join("\n"), END_MARKER)
}
