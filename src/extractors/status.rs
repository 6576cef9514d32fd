// src/extractors/status.rs
use std::fmt;

use super::section::{HeadingSpec, SectionResult};

/// Presence of the configured heading, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusReport {
    Found { name: String, level: u8 },
    Missing { name: String, level: u8 },
    NoDocument,
}

impl StatusReport {
    /// A heading only counts as present when its section has content.
    pub fn from_result(result: &SectionResult, spec: &HeadingSpec) -> Self {
        let name = spec.name().to_string();
        let level = spec.level();
        if result.found && !result.body.is_empty() {
            StatusReport::Found { name, level }
        } else {
            StatusReport::Missing { name, level }
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusReport::Found { name, level } => {
                write!(f, "Heading '{}' with Level {} found", name, level)
            }
            StatusReport::Missing { name, level } => {
                write!(f, "Heading '{}' with Level {} missing", name, level)
            }
            StatusReport::NoDocument => f.write_str("No active file"),
        }
    }
}

pub fn report(result: &SectionResult, spec: &HeadingSpec) -> String {
    StatusReport::from_result(result, spec).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::section::SectionExtractor;

    fn spec() -> HeadingSpec {
        HeadingSpec::new(1, "Dokumentation").unwrap()
    }

    #[test]
    fn test_report_found() {
        let result = SectionExtractor::default().extract("# Dokumentation\nbody", &spec());
        assert_eq!(report(&result, &spec()), "Heading 'Dokumentation' with Level 1 found");
    }

    #[test]
    fn test_report_missing_without_any_heading() {
        let result = SectionExtractor::default().extract("just some text\nmore text", &spec());
        assert_eq!(report(&result, &spec()), "Heading 'Dokumentation' with Level 1 missing");
    }

    #[test]
    fn test_empty_section_reports_missing() {
        let result = SectionResult { found: true, body: String::new() };
        let status = StatusReport::from_result(&result, &spec());
        assert!(matches!(status, StatusReport::Missing { level: 1, .. }));
        assert_eq!(status.to_string(), "Heading 'Dokumentation' with Level 1 missing");
    }

    #[test]
    fn test_report_uses_spec_level() {
        let spec = HeadingSpec::new(3, "Log").unwrap();
        let result = SectionResult { found: false, body: String::new() };
        assert_eq!(report(&result, &spec), "Heading 'Log' with Level 3 missing");
    }

    #[test]
    fn test_no_document() {
        assert_eq!(StatusReport::NoDocument.to_string(), "No active file");
    }
}
