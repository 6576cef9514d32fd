// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Heading level must be at least 1, got {0}")]
    InvalidLevel(u8),

    #[error("Heading name must not be empty")]
    EmptyHeadingName,
}

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("No API key configured (set api_key in the config file or OPENAI_API_KEY)")]
    MissingApiKey,

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("API rejected the credentials (401 Unauthorized)")]
    Unauthorized,

    #[error("API rate limit exceeded (429 Too Many Requests)")]
    RateLimited,

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode),

    #[error("API returned no completion")]
    EmptyResponse,

    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("File already exists: {0}")]
    FileExists(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} must be between 1 and 6, got {value}")]
    LevelOutOfRange { field: &'static str, value: u8 },

    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Summarization failed: {0}")]
    Summarize(#[from] SummarizeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
