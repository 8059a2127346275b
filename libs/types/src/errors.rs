//! Error types for amount parsing and roster validation
//!
//! The split core coerces malformed input instead of failing, so these types
//! only appear on the strict boundaries: explicit decimal parsing and
//! configuration validation.

use thiserror::Error;

/// Errors that can occur validating a roster or its identifiers
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// ID value is null/zero when non-null required
    #[error("participant id cannot be null/zero")]
    NullId,

    /// Two roster entries share the same identifier
    #[error("duplicate participant id {id}")]
    DuplicateId { id: u64 },
}

/// Errors that can occur parsing a decimal amount from text
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AmountParseError {
    /// Invalid decimal string format
    #[error("invalid decimal string: '{input}' - expected numeric format")]
    InvalidDecimal { input: String },
}
