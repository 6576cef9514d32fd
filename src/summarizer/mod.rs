// src/summarizer/mod.rs
pub mod client;
pub mod models;
pub mod prompt;

use crate::utils::error::SummarizeError;

pub use client::OpenAiClient;

/// Turns section text into a short summary. The core treats this as opaque text-in/text-out.
#[allow(async_fn_in_trait)]
pub trait Summarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}
