//! The exported document: generated Markdown plus the filename it is saved under.

use crate::markdown;
use crate::model::SpecInput;

pub const DEFAULT_FILE_STEM: &str = "agent-spec";
pub const EXTENSION: &str = "md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub markdown: String,
}

impl Artifact {
    pub fn from_input(input: &SpecInput) -> Self {
        Self {
            filename: suggested_filename(markdown::title(input)),
            markdown: markdown::render(input),
        }
    }
}

/// Derives a file name from a spec name.
///
/// `"Support Triage Agent Spec"` becomes `support-triage-agent-spec.md`.
pub fn suggested_filename(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            stem.push(c);
        } else if !stem.ends_with('-') {
            stem.push('-');
        }
    }

    let stem = stem.trim_matches('-');
    let stem = if stem.is_empty() { DEFAULT_FILE_STEM } else { stem };
    format!("{}.{}", stem, EXTENSION)
}
