//! Scalar codec set.
//!
//! Every scalar kind implements the same three-operation contract:
//!
//! - `parse_literal`: total extraction from a literal AST node. Only the
//!   tags a kind documents are considered; anything else, and any value
//!   failing validation, yields `None` (the UNDEFINED sentinel). This
//!   path never errors.
//! - `coerce_input`: parse and validate a loosely-typed input value.
//! - `coerce_output`: validate or re-encode a resolver-produced value
//!   into its wire form.
//!
//! Codecs are stateless and never retain references to their inputs.

mod color;
mod currency;
mod errors;
mod json;
mod network;
mod numeric;
mod strings;
mod temporal;
mod uuid;

pub use color::{HexColorCode, Hsl, Hsla, Rgb, Rgba};
pub use currency::UsCurrency;
pub use errors::{ScalarError, ScalarResult};
pub use json::{GeoJson, Json, JsonObject};
pub use network::{Ipv4, Ipv6, Url};
pub use numeric::{
    BigInt, Long, NegativeFloat, NegativeInt, NonNegativeFloat, NonNegativeInt,
    NonPositiveFloat, NonPositiveInt, Port, PositiveFloat, PositiveInt, UnsignedInt,
};
pub use strings::{EmailAddress, Guid, Isbn, Mac, PhoneNumber, PostalCode};
pub use temporal::{DateTime, Duration, NaiveDateTime};
pub use uuid::Uuid;

use crate::literal::Literal;
use crate::value::ScalarValue;

/// The uniform three-operation contract every scalar kind implements.
pub trait ScalarCodec: Send + Sync {
    /// Extracts a value from a literal AST node, or `None` when the
    /// literal tag is unrecognized or the value fails validation.
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue>;

    /// Parses and validates an input argument value.
    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue>;

    /// Validates or re-encodes a resolver-produced value for the wire.
    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue>;
}

/// Extracts the content of a string literal node.
pub(crate) fn string_literal(literal: &Literal) -> Option<&str> {
    match literal {
        Literal::String(s) => Some(s),
        _ => None,
    }
}

/// Converts an int/float/string literal into a boundary value for the
/// numeric coerce path. Int digits that overflow the widest supported
/// integer are unrepresentable and therefore unrecognized.
pub(crate) fn numeric_literal(literal: &Literal) -> Option<ScalarValue> {
    match literal {
        Literal::Int(digits) => digits.trim().parse::<i128>().ok().map(ScalarValue::BigInt),
        Literal::Float(text) => text.trim().parse::<f64>().ok().map(ScalarValue::Float),
        Literal::String(s) => Some(ScalarValue::String(s.clone())),
        _ => None,
    }
}

/// Stages any acceptable numeric input as a wide integer so range
/// checks can cite exact thresholds. Booleans are explicitly not
/// numbers. Floats truncate toward zero; non-finite floats are domain
/// errors.
pub(crate) fn int_from_value(scalar: &str, value: &ScalarValue) -> ScalarResult<i128> {
    match value {
        ScalarValue::Int(i) => Ok(i128::from(*i)),
        ScalarValue::BigInt(i) => Ok(*i),
        ScalarValue::Float(f) => {
            if !f.is_finite() {
                return Err(ScalarError::Value(format!(
                    "{} cannot represent non-finite values: < {} >",
                    scalar, f
                )));
            }
            let truncated = f.trunc();
            // f64 beyond i128 range cannot carry integer precision anyway
            if truncated < i128::MIN as f64 || truncated >= i128::MAX as f64 {
                return Err(ScalarError::Value(format!(
                    "{} cannot represent values of this magnitude: < {} >",
                    scalar, f
                )));
            }
            Ok(truncated as i128)
        }
        ScalarValue::String(s) => s.trim().parse::<i128>().map_err(|_| {
            ScalarError::Value(format!(
                "{} cannot represent a non integer string: < {} >",
                scalar, s
            ))
        }),
        other => Err(ScalarError::not_numeric(scalar, other)),
    }
}

/// Coerces any acceptable numeric input to a float. Booleans are
/// explicitly not numbers.
pub(crate) fn float_from_value(scalar: &str, value: &ScalarValue) -> ScalarResult<f64> {
    match value {
        ScalarValue::Float(f) => Ok(*f),
        ScalarValue::Int(i) => Ok(*i as f64),
        ScalarValue::BigInt(i) => Ok(*i as f64),
        ScalarValue::String(s) => s.trim().parse::<f64>().map_err(|_| {
            ScalarError::Value(format!(
                "{} cannot represent a non numeric string: < {} >",
                scalar, s
            ))
        }),
        other => Err(ScalarError::not_numeric(scalar, other)),
    }
}

/// Defines a stateless codec whose three operations all funnel through
/// one regex check over a string value, passing the string through
/// unchanged. This is the shape shared by every format-validated
/// string scalar.
macro_rules! regex_string_scalar {
    ($(#[$doc:meta])* $name:ident, $scalar:expr, $label:expr, $check:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            fn check(
                &self,
                value: $crate::value::ScalarValue,
            ) -> $crate::scalars::ScalarResult<$crate::value::ScalarValue> {
                let s = match &value {
                    $crate::value::ScalarValue::String(s) => s,
                    other => {
                        return Err($crate::scalars::ScalarError::non_string(
                            $scalar, other,
                        ))
                    }
                };
                let matches: fn(&str) -> bool = $check;
                if !matches(s) {
                    return Err($crate::scalars::ScalarError::invalid($label, s));
                }
                Ok(value)
            }
        }

        impl $crate::scalars::ScalarCodec for $name {
            fn parse_literal(
                &self,
                literal: &$crate::literal::Literal,
            ) -> Option<$crate::value::ScalarValue> {
                let s = $crate::scalars::string_literal(literal)?;
                self.check($crate::value::ScalarValue::String(s.to_string()))
                    .ok()
            }

            fn coerce_input(
                &self,
                value: $crate::value::ScalarValue,
            ) -> $crate::scalars::ScalarResult<$crate::value::ScalarValue> {
                self.check(value)
            }

            fn coerce_output(
                &self,
                value: $crate::value::ScalarValue,
            ) -> $crate::scalars::ScalarResult<$crate::value::ScalarValue> {
                self.check(value)
            }
        }
    };
}

pub(crate) use regex_string_scalar;
