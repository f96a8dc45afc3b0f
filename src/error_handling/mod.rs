//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for each concern (startup, storage, input, capabilities)
//! - Processing statistics tracking (capability failures, cache events)
//!
//! Capability failures are counted and logged rather than surfaced: a
//! classification request always produces a record.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    CapabilityError, DatabaseError, ErrorType, HostnameError, InfoType, InitializationError,
    InsertError, SubmissionError,
};
