//! Strict UUID scalar.
//!
//! Unlike GUID (a loose regex passthrough), this codec goes through the
//! real UUID constructor on input and only ever emits values it parsed,
//! so the output is always the canonical hyphenated form. A plausible
//! looking string handed to `coerce_output` is still a representation
//! error: output accepts parsed UUIDs only.

use crate::literal::Literal;
use crate::scalars::{string_literal, ScalarCodec, ScalarError, ScalarResult};
use crate::value::ScalarValue;

/// Scalar which handles UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct Uuid;

impl ScalarCodec for Uuid {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        let s = string_literal(literal)?;
        self.coerce_input(ScalarValue::from(s)).ok()
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::String(s) => uuid::Uuid::parse_str(&s)
                .map(ScalarValue::Uuid)
                .map_err(|_| ScalarError::invalid("UUID", &s)),
            other => Err(ScalarError::non_string("UUID", &other)),
        }
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::Uuid(u) => Ok(ScalarValue::String(u.hyphenated().to_string())),
            other => Err(ScalarError::Type(format!(
                "Value is not instance of UUID: < {} >",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "e76762e0-fec5-4e8f-9e8f-63b47355b0b2";

    #[test]
    fn test_input_parses_strictly() {
        let parsed = Uuid.coerce_input(ScalarValue::from(CANONICAL)).unwrap();
        assert_eq!(
            parsed,
            ScalarValue::Uuid(uuid::Uuid::parse_str(CANONICAL).unwrap())
        );

        let err = Uuid.coerce_input(ScalarValue::from("not-a-uuid")).unwrap_err();
        assert!(err.is_value());
        assert!(err.to_string().contains("not-a-uuid"));

        assert!(Uuid
            .coerce_input(ScalarValue::Int(7))
            .unwrap_err()
            .is_type());
    }

    #[test]
    fn test_output_requires_parsed_uuid() {
        let parsed = Uuid.coerce_input(ScalarValue::from(CANONICAL)).unwrap();
        assert_eq!(
            Uuid.coerce_output(parsed).unwrap(),
            ScalarValue::from(CANONICAL)
        );

        // a plausible string is still not a UUID instance
        assert!(Uuid
            .coerce_output(ScalarValue::from(CANONICAL))
            .unwrap_err()
            .is_type());
    }

    #[test]
    fn test_output_is_canonical_hyphenated() {
        let compact: String = CANONICAL.chars().filter(|c| *c != '-').collect();
        let parsed = Uuid.coerce_input(ScalarValue::from(compact.as_str())).unwrap();
        assert_eq!(
            Uuid.coerce_output(parsed).unwrap(),
            ScalarValue::from(CANONICAL)
        );
    }

    #[test]
    fn test_literals() {
        assert!(Uuid.parse_literal(&Literal::string(CANONICAL)).is_some());
        assert_eq!(Uuid.parse_literal(&Literal::string("nok")), None);
        assert_eq!(Uuid.parse_literal(&Literal::int("1")), None);
    }
}
