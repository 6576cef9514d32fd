// src/extractors/mod.rs
pub mod insert;
pub mod section;
pub mod status;

// Re-export key extraction types for convenience
pub use insert::insert_after_heading;
pub use section::{HeadingMatch, HeadingSpec, SectionExtractor, SectionResult};
pub use status::StatusReport;
