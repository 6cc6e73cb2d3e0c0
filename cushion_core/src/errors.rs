//! # Error Types
//!
//! Structured error types for cushion_core. Every variant carries enough
//! context for a front-end to point the operator at the offending field
//! without parsing message strings.
//!
//! ## Example
//!
//! ```rust
//! use cushion_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_mm: f64) -> CalcResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "length_mm".to_string(),
//!             value: length_mm.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cushion_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No preset with this name in either mold table
    #[error("Preset not found: {name}")]
    PresetNotFound { name: String },

    /// No casting job item with this id
    #[error("Job item not found: {id}")]
    ItemNotFound { id: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a PresetNotFound error
    pub fn preset_not_found(name: impl Into<String>) -> Self {
        CalcError::PresetNotFound { name: name.into() }
    }

    /// Create an ItemNotFound error
    pub fn item_not_found(id: impl ToString) -> Self {
        CalcError::ItemNotFound { id: id.to_string() }
    }

    /// Name of the offending input field, if the error is about one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::PresetNotFound { .. } => "PRESET_NOT_FOUND",
            CalcError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}
