//! Error type definitions.
//!
//! This module defines the error enums used throughout the crate and the
//! counter categories tracked by [`super::ProcessingStats`].

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// A stored record could not be encoded or decoded.
    #[error("Record serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// A hostname that cannot be tokenized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostnameError {
    #[error("domain is empty")]
    Empty,

    #[error("domain must contain at least two labels: {0}")]
    TooFewLabels(String),

    #[error("domain contains an empty label: {0}")]
    EmptyLabel(String),

    #[error("invalid domain: {0}")]
    Invalid(String),
}

/// A human-submitted classification that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("{0} is not a valid country")]
    UnknownCountry(String),

    #[error("invalid category: {0}")]
    UnknownCategory(String),
}

/// A human submission that could not be stored.
#[derive(Error, Debug)]
pub enum InsertError {
    #[error(transparent)]
    Rejected(#[from] SubmissionError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Failure of an external capability (enrichment or language model).
///
/// These never fail a classification; callers log them and carry on with
/// no signal.
#[derive(Error, Debug)]
pub enum CapabilityError {
    #[error("request failed: {0}")]
    Request(#[from] ReqwestError),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),
}

/// External-capability and storage failures counted while serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    EnrichmentAbstractError,
    EnrichmentScrapeError,
    ModelClassifyError,
    ModelGeolocateError,
    StoreError,
}

/// Notable events counted while serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    CacheHit,
    CacheMiss,
    CacheOverride,
    /// Geolocation skipped because the ccTLD already decided it
    StructuralGeolocation,
    /// The model reply contained no known industry
    UnrecognisedCategories,
    /// The model reply contained no known country
    UnrecognisedCountry,
    HumanSubmission,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::EnrichmentAbstractError => "Enrichment abstract lookup error",
            ErrorType::EnrichmentScrapeError => "Enrichment search scrape error",
            ErrorType::ModelClassifyError => "Model classification error",
            ErrorType::ModelGeolocateError => "Model geolocation error",
            ErrorType::StoreError => "Record store error",
        }
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::CacheHit => "Cache hit",
            InfoType::CacheMiss => "Cache miss",
            InfoType::CacheOverride => "Cache override",
            InfoType::StructuralGeolocation => "Geolocated from ccTLD",
            InfoType::UnrecognisedCategories => "No recognised category in model reply",
            InfoType::UnrecognisedCountry => "No recognised country in model reply",
            InfoType::HumanSubmission => "Human submission",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(
            ErrorType::ModelClassifyError.as_str(),
            "Model classification error"
        );
        assert_eq!(ErrorType::StoreError.to_string(), "Record store error");
    }

    #[test]
    fn test_all_types_have_labels() {
        for error in ErrorType::iter() {
            assert!(!error.as_str().is_empty());
        }
        for info in InfoType::iter() {
            assert!(!info.as_str().is_empty());
        }
    }

    #[test]
    fn test_submission_error_messages_name_the_value() {
        let country = SubmissionError::UnknownCountry("Atlantis".into());
        assert_eq!(country.to_string(), "Atlantis is not a valid country");
        let category = SubmissionError::UnknownCategory("Gardening".into());
        assert_eq!(category.to_string(), "invalid category: Gardening");
        assert_ne!(country, SubmissionError::UnknownCategory("Atlantis".into()));
    }

    #[test]
    fn test_hostname_error_messages() {
        assert_eq!(HostnameError::Empty.to_string(), "domain is empty");
        assert!(HostnameError::TooFewLabels("localhost".into())
            .to_string()
            .contains("localhost"));
    }
}
