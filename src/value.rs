//! Boundary value representation shared by every scalar codec.
//!
//! `ScalarValue` is the tagged union the host engine hands to
//! `coerce_input`/`coerce_output` and receives back: wire primitives
//! (boolean, int, float, string) plus the parsed domain values a codec
//! may produce or accept pre-parsed (datetimes, addresses, UUIDs, ...).
//!
//! Keeping booleans as their own variant is what lets every numeric
//! scalar reject `true`/`false` outright instead of silently coercing
//! them to 0/1.

use std::fmt;
use std::net::IpAddr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};

/// A loosely-typed value crossing the codec boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Boolean - never acceptable to numeric scalars
    Boolean(bool),
    /// 64-bit signed integer
    Int(i64),
    /// Wide integer, produced by the BigInt scalar
    BigInt(i128),
    /// 64-bit floating point
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Timezone-aware point in time
    DateTime(DateTime<FixedOffset>),
    /// Wall-clock datetime without offset
    NaiveDateTime(NaiveDateTime),
    /// Signed duration
    Duration(TimeDelta),
    /// Parsed absolute URL
    Url(url::Url),
    /// IPv4 or IPv6 address
    Ip(IpAddr),
    /// Parsed UUID
    Uuid(uuid::Uuid),
    /// Arbitrary JSON document
    Json(serde_json::Value),
}

impl ScalarValue {
    /// Returns the representation name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarValue::Boolean(_) => "boolean",
            ScalarValue::Int(_) => "int",
            ScalarValue::BigInt(_) => "bigint",
            ScalarValue::Float(_) => "float",
            ScalarValue::String(_) => "string",
            ScalarValue::DateTime(_) => "datetime",
            ScalarValue::NaiveDateTime(_) => "naive datetime",
            ScalarValue::Duration(_) => "duration",
            ScalarValue::Url(_) => "url",
            ScalarValue::Ip(_) => "ip address",
            ScalarValue::Uuid(_) => "uuid",
            ScalarValue::Json(_) => "json",
        }
    }

    /// True for the wire-level numeric variants (never booleans).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ScalarValue::Int(_) | ScalarValue::BigInt(_) | ScalarValue::Float(_)
        )
    }

    /// Borrows the inner string when this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Boolean(b) => write!(f, "{}", b),
            ScalarValue::Int(i) => write!(f, "{}", i),
            ScalarValue::BigInt(i) => write!(f, "{}", i),
            ScalarValue::Float(v) => write!(f, "{}", v),
            ScalarValue::String(s) => write!(f, "{}", s),
            ScalarValue::DateTime(dt) => write!(f, "{}", dt),
            ScalarValue::NaiveDateTime(dt) => write!(f, "{}", dt),
            ScalarValue::Duration(td) => write!(f, "{}", td),
            ScalarValue::Url(u) => write!(f, "{}", u),
            ScalarValue::Ip(ip) => write!(f, "{}", ip),
            ScalarValue::Uuid(u) => write!(f, "{}", u),
            ScalarValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(ScalarValue::Boolean(true).type_name(), "boolean");
        assert_eq!(ScalarValue::Int(1).type_name(), "int");
        assert_eq!(ScalarValue::Float(1.5).type_name(), "float");
        assert_eq!(ScalarValue::String("x".into()).type_name(), "string");
        assert_eq!(
            ScalarValue::Json(serde_json::json!({})).type_name(),
            "json"
        );
    }

    #[test]
    fn test_boolean_is_not_numeric() {
        assert!(!ScalarValue::Boolean(true).is_numeric());
        assert!(ScalarValue::Int(0).is_numeric());
        assert!(ScalarValue::Float(0.0).is_numeric());
        assert!(ScalarValue::BigInt(0).is_numeric());
    }

    #[test]
    fn test_display_is_plain() {
        assert_eq!(ScalarValue::String("abc".into()).to_string(), "abc");
        assert_eq!(ScalarValue::Int(-3).to_string(), "-3");
        assert_eq!(ScalarValue::Boolean(false).to_string(), "false");
    }
}
