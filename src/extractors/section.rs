// src/extractors/section.rs

// --- Imports ---
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// --- Regex Patterns (Lazy Static) ---
// Any markdown heading: one or more '#' followed by a whitespace character.
static ANY_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#+\s").expect("Failed to compile ANY_HEADING_RE")
});

/// Returns true if the line opens a heading of any level.
pub fn is_heading_line(line: &str) -> bool {
    ANY_HEADING_RE.is_match(line)
}

// --- Data Structures ---

/// The heading a section is looked up by: its markdown depth and literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingSpec {
    level: u8,
    name: String,
}

impl HeadingSpec {
    /// Rejects level 0 and blank names, so a degenerate marker never reaches the scanner.
    pub fn new(level: u8, name: impl Into<String>) -> Result<Self, ExtractError> {
        let name = name.into();
        if level < 1 {
            return Err(ExtractError::InvalidLevel(level));
        }
        if name.trim().is_empty() {
            return Err(ExtractError::EmptyHeadingName);
        }
        Ok(Self { level, name })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The heading line as written in markdown, e.g. `## Notes`.
    pub fn marker(&self) -> String {
        format!("{} {}", "#".repeat(usize::from(self.level)), self.name)
    }
}

/// How a line is compared against the heading marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HeadingMatch {
    /// The line is the marker, optionally followed by trailing whitespace.
    #[default]
    Exact,
    /// The line starts with the marker. `# Notes` also matches `# Notes archive`.
    Prefix,
}

impl HeadingMatch {
    pub fn matches(self, line: &str, marker: &str) -> bool {
        match self {
            HeadingMatch::Exact => line
                .strip_prefix(marker)
                .is_some_and(|rest| rest.chars().all(char::is_whitespace)),
            HeadingMatch::Prefix => line.starts_with(marker),
        }
    }
}

/// Outcome of one extraction call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionResult {
    pub found: bool,
    pub body: String,
}

// --- Main Extractor Structure ---
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionExtractor {
    match_mode: HeadingMatch,
}

impl SectionExtractor {
    pub fn new(match_mode: HeadingMatch) -> Self {
        Self { match_mode }
    }

    /// Extracts the body of the first section headed by `spec`.
    ///
    /// Lines are split on `\n` only. The body runs until the next heading of any
    /// level or the end of the document, each line trimmed, joined with `\n`.
    /// Neither the heading line nor the terminating heading is included.
    pub fn extract(&self, document: &str, spec: &HeadingSpec) -> SectionResult {
        let marker = spec.marker();
        let mut in_section = false;
        let mut lines: Vec<&str> = Vec::new();

        for line in document.split('\n') {
            if !in_section {
                if self.match_mode.matches(line, &marker) {
                    tracing::trace!("Matched heading line: '{}'", line);
                    in_section = true;
                }
                continue;
            }

            if is_heading_line(line) {
                tracing::trace!("Section terminated by heading: '{}'", line);
                break;
            }

            lines.push(line.trim());
        }

        let body = lines.join("\n");
        tracing::debug!(
            "Extraction for '{}': found={}, {} lines, {} bytes",
            marker,
            in_section,
            lines.len(),
            body.len()
        );

        SectionResult { found: in_section, body }
    }
}
