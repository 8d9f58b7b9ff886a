//! Error types for configuration and boundary validation.
//!
//! This module contains the errors raised before any request reaches the
//! network: configuration errors and type validation failures.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. [`TypeValidationError`] is raised when a value that
//! crosses a boundary (caller-supplied arguments or decoded JSON) does not
//! have the expected shape.
//!
//! # Example
//!
//! ```rust
//! use zbozi_api::{PartnerToken, ConfigError};
//!
//! let result = PartnerToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyPartnerToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Partner token cannot be empty.
    #[error("Partner token cannot be empty. Please provide the token assigned by Slevomat.")]
    EmptyPartnerToken,

    /// API secret cannot be empty.
    #[error("API secret cannot be empty. Please provide the secret assigned by Slevomat.")]
    EmptyApiSecret,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide an http(s) URL (e.g., 'https://www.slevomat.cz/zbozi-api/v1').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// Why the HTTP client could not be built.
        reason: String,
    },
}

/// A value failed a shape check at a boundary.
///
/// Raised for caller-supplied arguments the type system cannot rule out
/// (empty identifiers, zero amounts) and for decoded JSON that does not have
/// the expected structure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeValidationError {
    /// A value had the wrong JSON type.
    #[error("{expected} expected, {given} given.")]
    UnexpectedType {
        /// The expected type name.
        expected: &'static str,
        /// The type that was actually found.
        given: &'static str,
    },

    /// A required string was empty.
    #[error("{field} cannot be empty.")]
    Empty {
        /// The name of the empty field.
        field: &'static str,
    },

    /// A quantity was not a positive integer.
    #[error("{field} must be a positive integer, {value} given.")]
    NotPositive {
        /// The name of the field.
        field: &'static str,
        /// The value that was provided.
        value: u32,
    },

    /// An order id cannot be used as a URL path segment.
    #[error("Invalid order id '{order_id}'.")]
    InvalidOrderId {
        /// The rejected order id.
        order_id: String,
    },
}

impl TypeValidationError {
    /// Builds an [`UnexpectedType`](Self::UnexpectedType) error for a decoded JSON value.
    #[must_use]
    pub const fn unexpected_json(expected: &'static str, given: &serde_json::Value) -> Self {
        Self::UnexpectedType {
            expected,
            given: json_type_name(given),
        }
    }
}

/// Returns the JSON type name of a value, as used in validation messages.
#[must_use]
pub const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
