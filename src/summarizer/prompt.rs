// src/summarizer/prompt.rs
use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{3,}").expect("Failed to compile BLANK_RUN_RE")
});

/// The message sent to the model: instruction followed by the section text.
pub fn build_prompt(prompt: &str, text: &str) -> String {
    format!("{}{}", prompt, text)
}

/// Prompt as shown to the user, with runs of blank lines in the text collapsed.
pub fn preview_prompt(prompt: &str, text: &str) -> String {
    format!("{}{}", prompt, BLANK_RUN_RE.replace_all(text, "\n\n"))
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
