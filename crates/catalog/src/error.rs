//! Error types for the catalog crate.
//!
//! Loading is the only place the catalog can fail: a malformed input
//! document, an unknown enum token, or a user record pointing at a video
//! that was never loaded. Once built, lookups return `Option` instead.

use thiserror::Error;

/// Errors that can occur while reading an input document or building a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Input file could not be opened or read
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input document is not valid JSON or does not have the expected shape
    #[error("Malformed input document: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A field carried a token outside its fixed vocabulary
    /// (genre, award, subscription tier, sort direction, year)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A user record references a video that isn't in the catalog
    #[error("Missing reference: {entity} {key}")]
    MissingReference { entity: String, key: String },

    /// Two user records share a username
    #[error("Duplicate {entity}: {key}")]
    DuplicateKey { entity: String, key: String },

    /// A rating targeted a season the video doesn't have
    #[error("{title} has no season {season}")]
    InvalidSeason { title: String, season: u32 },
}

impl CatalogError {
    pub(crate) fn invalid(field: &str, value: impl Into<String>) -> Self {
        CatalogError::InvalidValue {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
