//! Coercion error taxonomy shared by all scalar codecs.
//!
//! Two classes only:
//! - `Type`: the raw input is not an acceptable base representation
//!   (boolean fed to a numeric scalar, non-string to a string scalar).
//! - `Value`: the base representation is fine but the value fails a
//!   semantic constraint (regex mismatch, out-of-range number, naive
//!   datetime, malformed composite string). Overflow conditions fall
//!   in this class too.
//!
//! `parse_literal` never surfaces either class; only the coerce paths do.

use thiserror::Error;

use crate::value::ScalarValue;

/// Result type for scalar coercion
pub type ScalarResult<T> = Result<T, ScalarError>;

/// Errors raised by `coerce_input` / `coerce_output`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalarError {
    /// Unacceptable base representation
    #[error("{0}")]
    Type(String),

    /// Acceptable representation, value outside the allowed domain
    #[error("{0}")]
    Value(String),
}

impl ScalarError {
    /// Non-string value handed to a string-validated scalar.
    pub fn non_string(scalar: &str, value: &ScalarValue) -> Self {
        ScalarError::Type(format!(
            "{} cannot represent a non string value: < {} >",
            scalar, value
        ))
    }

    /// Non-numeric value handed to a numeric scalar (booleans included).
    pub fn not_numeric(scalar: &str, value: &ScalarValue) -> Self {
        ScalarError::Type(format!(
            "{} cannot represent values other than strings and numbers: < {} >",
            scalar, value
        ))
    }

    /// Generic "wrong kind of value" representation error.
    pub fn unrepresentable(scalar: &str, value: &ScalarValue) -> Self {
        ScalarError::Type(format!(
            "{} cannot represent value: < {} >",
            scalar, value
        ))
    }

    /// Semantic constraint failure naming the offending value.
    pub fn invalid(what: &str, value: impl std::fmt::Display) -> Self {
        ScalarError::Value(format!("Value is not a valid {}: < {} >", what, value))
    }

    /// True for the representation-error class.
    pub fn is_type(&self) -> bool {
        matches!(self, ScalarError::Type(_))
    }

    /// True for the domain/range-error class.
    pub fn is_value(&self) -> bool {
        matches!(self, ScalarError::Value(_))
    }
}
