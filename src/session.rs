// src/session.rs
//! One run of the tool: a validated settings snapshot plus the operations built on it.

use crate::config::Settings;
use crate::extractors::{insert_after_heading, HeadingSpec, SectionExtractor, SectionResult, StatusReport};
use crate::summarizer::prompt::{preview, preview_prompt};
use crate::summarizer::Summarizer;
use crate::utils::AppError;

const LOG_PREVIEW_CHARS: usize = 100;

pub struct Session {
    settings: Settings,
    extractor: SectionExtractor,
    heading: HeadingSpec,
    summary: HeadingSpec,
}

impl Session {
    /// Validates `settings` and freezes them for the lifetime of the session.
    pub fn init(settings: Settings) -> Result<Self, AppError> {
        settings.validate()?;
        let heading = settings.heading_spec()?;
        let summary = settings.summary_spec()?;
        let extractor = SectionExtractor::new(settings.heading_match);

        tracing::debug!(
            "Session started: section '{}', summary '{}', {:?} matching",
            heading.marker(),
            summary.marker(),
            settings.heading_match
        );

        Ok(Self { settings, extractor, heading, summary })
    }

    pub fn shutdown(self) {
        tracing::debug!("Session for '{}' shut down", self.heading.marker());
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn heading(&self) -> &HeadingSpec {
        &self.heading
    }

    pub fn extract(&self, document: &str) -> SectionResult {
        self.extractor.extract(document, &self.heading)
    }

    /// Status line for the current document; `None` means there is no document to inspect.
    pub fn status(&self, document: Option<&str>) -> String {
        match document {
            Some(document) => {
                let result = self.extract(document);
                crate::extractors::status::report(&result, &self.heading)
            }
            None => StatusReport::NoDocument.to_string(),
        }
    }

    pub fn prompt_preview(&self, document: &str) -> String {
        let result = self.extract(document);
        preview_prompt(&self.settings.prompt, &result.body)
    }

    /// Summarizes the configured section and returns the document with the
    /// summary inserted below the summary heading.
    pub async fn summarize_document<S: Summarizer>(
        &self,
        document: &str,
        summarizer: &S,
    ) -> Result<String, AppError> {
        let section = self.extract(document);
        if section.body.is_empty() {
            tracing::warn!("No documentation section found.");
            return Err(AppError::Processing(format!(
                "No content found under heading '{}'",
                self.heading.marker()
            )));
        }

        tracing::info!("Extracted content: {}", preview(&section.body, LOG_PREVIEW_CHARS));

        let summary = summarizer.summarize(&section.body).await?;
        tracing::info!("Received summary ({} bytes)", summary.len());

        insert_after_heading(document, &self.summary, self.settings.heading_match, &summary).ok_or_else(|| {
            AppError::Processing(format!(
                "Summary heading '{}' not found in document",
                self.summary.marker()
            ))
        })
    }
}
