//! Bounded and sign-constrained numeric scalars.
//!
//! All of them accept int, float and string inputs (floats truncate
//! toward zero, strings must parse as the target base) and reject
//! booleans with a representation error on every path. Range checks
//! run on a wide staging integer so errors can cite exact thresholds.

use crate::literal::Literal;
use crate::scalars::{
    float_from_value, int_from_value, numeric_literal, ScalarCodec, ScalarError, ScalarResult,
};
use crate::value::ScalarValue;

const LONG_MAX: i128 = 1 << 63; // exclusive
const LONG_MIN: i128 = -(1 << 63); // inclusive
const UNSIGNED_INT_MAX: i128 = 1 << 32; // exclusive
const PORT_MAX: i128 = 65535; // inclusive
const PORT_MIN: i128 = 0; // exclusive

/// Emits a validated staging integer as a wire int.
fn emit_int(scalar: &str, value: i128) -> ScalarResult<ScalarValue> {
    i64::try_from(value).map(ScalarValue::Int).map_err(|_| {
        ScalarError::Value(format!(
            "{} cannot represent values of this magnitude: < {} >",
            scalar, value
        ))
    })
}

macro_rules! int_scalar {
    ($(#[$doc:meta])* $name:ident, $scalar:expr, $validate:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            fn parse(&self, value: &ScalarValue) -> ScalarResult<ScalarValue> {
                let staged = int_from_value($scalar, value)?;
                let validate: fn(i128) -> ScalarResult<()> = $validate;
                validate(staged)?;
                emit_int($scalar, staged)
            }
        }

        impl ScalarCodec for $name {
            fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
                let staged = numeric_literal(literal)?;
                self.parse(&staged).ok()
            }

            fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
                self.parse(&value)
            }

            fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
                self.parse(&value)
            }
        }
    };
}

macro_rules! float_scalar {
    ($(#[$doc:meta])* $name:ident, $scalar:expr, $validate:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            fn parse(&self, value: &ScalarValue) -> ScalarResult<ScalarValue> {
                let parsed = float_from_value($scalar, value)?;
                let validate: fn(f64) -> ScalarResult<()> = $validate;
                validate(parsed)?;
                Ok(ScalarValue::Float(parsed))
            }
        }

        impl ScalarCodec for $name {
            fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
                let staged = numeric_literal(literal)?;
                self.parse(&staged).ok()
            }

            fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
                self.parse(&value)
            }

            fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
                self.parse(&value)
            }
        }
    };
}

int_scalar!(
    /// Scalar which handles integers between -2^63 (included) and 2^63 (excluded)
    Long,
    "Long",
    |v| {
        if v >= LONG_MAX {
            return Err(ScalarError::Value(format!(
                "Long cannot represent values above or equal to 2^63: < {} >",
                v
            )));
        }
        if v < LONG_MIN {
            return Err(ScalarError::Value(format!(
                "Long cannot represent values below -2^63: < {} >",
                v
            )));
        }
        Ok(())
    }
);

int_scalar!(
    /// Scalar which handles integers between 0 (included) and 2^32 (excluded)
    UnsignedInt,
    "UnsignedInt",
    |v| {
        if v >= UNSIGNED_INT_MAX {
            return Err(ScalarError::Value(format!(
                "UnsignedInt cannot represent values above or equal to 2^32: < {} >",
                v
            )));
        }
        if v < 0 {
            return Err(ScalarError::Value(format!(
                "UnsignedInt cannot represent values below 0: < {} >",
                v
            )));
        }
        Ok(())
    }
);

int_scalar!(
    /// Scalar which handles integers usable as TCP/UDP ports (in range ]0, 65535])
    Port,
    "Port",
    |v| {
        if v > PORT_MAX {
            return Err(ScalarError::Value(format!(
                "Port cannot represent values above 65535: < {} >",
                v
            )));
        }
        if v <= PORT_MIN {
            return Err(ScalarError::Value(format!(
                "Port cannot represent values below or equal to 0: < {} >",
                v
            )));
        }
        Ok(())
    }
);

int_scalar!(
    /// Scalar which handles strictly positive integers
    PositiveInt,
    "PositiveInt",
    |v| {
        if v <= 0 {
            return Err(ScalarError::Value(format!(
                "PositiveInt cannot represent values below or equal to 0: < {} >",
                v
            )));
        }
        Ok(())
    }
);

int_scalar!(
    /// Scalar which handles strictly negative integers
    NegativeInt,
    "NegativeInt",
    |v| {
        if v >= 0 {
            return Err(ScalarError::Value(format!(
                "NegativeInt cannot represent values above or equal to 0: < {} >",
                v
            )));
        }
        Ok(())
    }
);

int_scalar!(
    /// Scalar which handles integers at or below zero
    NonPositiveInt,
    "NonPositiveInt",
    |v| {
        if v > 0 {
            return Err(ScalarError::Value(format!(
                "NonPositiveInt cannot represent values above 0: < {} >",
                v
            )));
        }
        Ok(())
    }
);

int_scalar!(
    /// Scalar which handles integers at or above zero
    NonNegativeInt,
    "NonNegativeInt",
    |v| {
        if v < 0 {
            return Err(ScalarError::Value(format!(
                "NonNegativeInt cannot represent values below 0: < {} >",
                v
            )));
        }
        Ok(())
    }
);

float_scalar!(
    /// Scalar which handles strictly positive floats
    PositiveFloat,
    "PositiveFloat",
    |v| {
        if v <= 0.0 {
            return Err(ScalarError::Value(format!(
                "PositiveFloat cannot represent values below or equal to 0: < {} >",
                v
            )));
        }
        Ok(())
    }
);

float_scalar!(
    /// Scalar which handles strictly negative floats
    NegativeFloat,
    "NegativeFloat",
    |v| {
        if v >= 0.0 {
            return Err(ScalarError::Value(format!(
                "NegativeFloat cannot represent values above or equal to 0: < {} >",
                v
            )));
        }
        Ok(())
    }
);

float_scalar!(
    /// Scalar which handles floats at or below zero
    NonPositiveFloat,
    "NonPositiveFloat",
    |v| {
        if v > 0.0 {
            return Err(ScalarError::Value(format!(
                "NonPositiveFloat cannot represent values above 0: < {} >",
                v
            )));
        }
        Ok(())
    }
);

float_scalar!(
    /// Scalar which handles floats at or above zero
    NonNegativeFloat,
    "NonNegativeFloat",
    |v| {
        if v < 0.0 {
            return Err(ScalarError::Value(format!(
                "NonNegativeFloat cannot represent values below 0: < {} >",
                v
            )));
        }
        Ok(())
    }
);

/// Scalar which handles wide integers with no range check.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigInt;

impl BigInt {
    fn parse(&self, value: &ScalarValue) -> ScalarResult<ScalarValue> {
        int_from_value("BigInt", value).map(ScalarValue::BigInt)
    }
}

impl ScalarCodec for BigInt {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        let staged = numeric_literal(literal)?;
        self.parse(&staged).ok()
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        self.parse(&value)
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        self.parse(&value)
    }
}
