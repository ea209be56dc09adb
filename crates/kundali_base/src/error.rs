//! Error types for chart calculations.
//!
//! The chart operations themselves are total and never fail; these errors
//! describe *why* a lenient operation fell back to a default, and what went
//! wrong when decoding a provider document.

use thiserror::Error;

/// Why a sign identifier could not be resolved to a rashi.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RashiError {
    /// No identifier was supplied.
    #[error("sign identifier is missing")]
    Missing,
    /// A numeric ordinal outside 1..=12.
    #[error("sign ordinal out of range: {0}")]
    OrdinalOutOfRange(i64),
    /// A string that matches none of the English, Sanskrit or Nepali aliases.
    #[error("unknown sign alias: {0:?}")]
    UnknownAlias(String),
    /// An object without a usable name or id, or a value of another type.
    #[error("unsupported sign identifier shape")]
    Unsupported,
}

/// Errors from decoding a provider chart document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    /// The document is not valid JSON, or not shaped like a chart document.
    #[error("invalid chart input: {0}")]
    Json(#[from] serde_json::Error),
}
