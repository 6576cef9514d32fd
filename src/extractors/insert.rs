// src/extractors/insert.rs
use super::section::{HeadingMatch, HeadingSpec};

/// Inserts `text` as a new line directly below the first line matching `spec`.
/// The new line takes the heading line's `\r` ending, so CRLF documents stay uniform.
/// Returns `None` when the heading is absent, leaving the caller's document untouched.
pub fn insert_after_heading(
    document: &str,
    spec: &HeadingSpec,
    match_mode: HeadingMatch,
    text: &str,
) -> Option<String> {
    let marker = spec.marker();
    let lines: Vec<&str> = document.split('\n').collect();
    let index = lines.iter().position(|line| match_mode.matches(line, &marker))?;

    let inserted = if lines[index].ends_with('\r') {
        format!("{}\r", text)
    } else {
        text.to_string()
    };

    let mut updated: Vec<&str> = Vec::with_capacity(lines.len() + 1);
    updated.extend_from_slice(&lines[..=index]);
    updated.push(&inserted);
    updated.extend_from_slice(&lines[index + 1..]);
    Some(updated.join("\n"))
}
