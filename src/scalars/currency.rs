//! USD amount scalar.
//!
//! Inputs are strings in the `$XX.YY` format and coerce to an integer
//! amount of cents; outputs go the other way. The `$` prefix is
//! mandatory, so a bare number is rejected rather than silently losing
//! its leading digit.

use crate::literal::Literal;
use crate::scalars::{string_literal, ScalarCodec, ScalarError, ScalarResult};
use crate::value::ScalarValue;

fn parse_us_currency(text: &str) -> ScalarResult<ScalarValue> {
    let amount = text
        .strip_prefix('$')
        .and_then(|rest| rest.parse::<f64>().ok())
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ScalarError::invalid("US currency amount", &text))?;
    let cents = (amount * 100.0).round();
    if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
        return Err(ScalarError::invalid("US currency amount", &text));
    }
    Ok(ScalarValue::Int(cents as i64))
}

/// Scalar which handles USD amounts (in format $XX.YY)
#[derive(Debug, Clone, Copy, Default)]
pub struct UsCurrency;

impl ScalarCodec for UsCurrency {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        let s = string_literal(literal)?;
        parse_us_currency(s).ok()
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::String(s) => parse_us_currency(&s),
            other => Err(ScalarError::Type(format!(
                "USCurrency cannot represent values other than strings: < {} >",
                other
            ))),
        }
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::Int(cents) => Ok(ScalarValue::String(format!(
                "${:.2}",
                cents as f64 / 100.0
            ))),
            other => Err(ScalarError::unrepresentable("USCurrency", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_to_cents() {
        let ok = |s: &str| UsCurrency.coerce_input(ScalarValue::from(s)).unwrap();
        assert_eq!(ok("$50.00"), ScalarValue::Int(5000));
        assert_eq!(ok("$0.00"), ScalarValue::Int(0));
        assert_eq!(ok("$12.345"), ScalarValue::Int(1235));
        assert_eq!(ok("$3"), ScalarValue::Int(300));
    }

    #[test]
    fn test_input_rejections() {
        let err = |s: &str| UsCurrency.coerce_input(ScalarValue::from(s)).unwrap_err();
        assert!(err("50.00").is_value());
        assert!(err("$").is_value());
        assert!(err("$abc").is_value());
        assert!(err("$inf").is_value());
        assert!(UsCurrency
            .coerce_input(ScalarValue::Int(5000))
            .unwrap_err()
            .is_type());
        assert!(UsCurrency
            .coerce_input(ScalarValue::Boolean(true))
            .unwrap_err()
            .is_type());
    }

    #[test]
    fn test_output() {
        assert_eq!(
            UsCurrency.coerce_output(ScalarValue::Int(5000)).unwrap(),
            ScalarValue::from("$50.00")
        );
        assert_eq!(
            UsCurrency.coerce_output(ScalarValue::Int(0)).unwrap(),
            ScalarValue::from("$0.00")
        );
        assert_eq!(
            UsCurrency.coerce_output(ScalarValue::Int(-199)).unwrap(),
            ScalarValue::from("$-1.99")
        );
        let err = UsCurrency
            .coerce_output(ScalarValue::from("$50.00"))
            .unwrap_err();
        assert!(err.is_type());
        assert!(err.to_string().contains("cannot represent value"));
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            UsCurrency.parse_literal(&Literal::string("$50.00")),
            Some(ScalarValue::Int(5000))
        );
        assert_eq!(UsCurrency.parse_literal(&Literal::string("nok")), None);
        assert_eq!(UsCurrency.parse_literal(&Literal::float("50.0")), None);
    }
}
