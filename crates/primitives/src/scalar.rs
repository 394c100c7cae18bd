use std::fmt;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{
    quantity::{decode_hex_int, encode_u64},
    U256,
};

/// A scalar that node implementations disagree on how to encode.
///
/// Geth emits the transaction `v` value as a quantity string, whereas Parity
/// emits it as a bare JSON number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AmbiguousScalar {
    /// Encoded as a JSON string
    String(String),
    /// Encoded as a JSON number
    Number(serde_json::Number),
}

impl AmbiguousScalar {
    /// Constructs the quantity string form of a value.
    pub fn quantity(value: u64) -> Self {
        Self::String(encode_u64(value))
    }

    /// Constructs the bare number form of a value.
    pub fn number(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl fmt::Display for AmbiguousScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmbiguousScalar::String(value) => write!(f, "\"{value}\""),
            AmbiguousScalar::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Error that occurs when neither interpretation of an [`AmbiguousScalar`]
/// yields a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{raw} is neither a quantity string nor a numeric literal of at most {bit_width} bits")]
pub struct ScalarError {
    /// The raw JSON value
    pub raw: String,
    /// The maximum number of bits
    pub bit_width: usize,
}

/// Resolves an [`AmbiguousScalar`] into a value of at most `bit_width` bits.
///
/// A string is first decoded as a quantity and, failing that, as a numeric
/// literal. A number is interpreted directly; integral floats are accepted
/// because some nodes emit them.
pub fn decode_ambiguous_scalar(
    raw: &AmbiguousScalar,
    bit_width: usize,
) -> Result<U256, ScalarError> {
    let decoded = match raw {
        AmbiguousScalar::String(value) => decode_hex_int(value, bit_width).ok().or_else(|| {
            value
                .trim()
                .parse::<serde_json::Number>()
                .ok()
                .and_then(|number| decode_number(&number, bit_width))
        }),
        AmbiguousScalar::Number(number) => decode_number(number, bit_width),
    };

    decoded.ok_or_else(|| ScalarError {
        raw: raw.to_string(),
        bit_width,
    })
}

fn decode_number(number: &serde_json::Number, bit_width: usize) -> Option<U256> {
    let value = number.as_u64().or_else(|| {
        number.as_f64().and_then(|float| {
            let is_integral = float.is_finite() && float >= 0.0 && float.fract() == 0.0;
            // `u64::MAX as f64` rounds up to 2^64, which is out of range.
            (is_integral && float < u64::MAX as f64).then_some(float as u64)
        })
    })?;

    let value = U256::from(value);
    (value.bit_len() <= bit_width).then_some(value)
}

impl Serialize for AmbiguousScalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AmbiguousScalar::String(value) => serializer.serialize_str(value),
            AmbiguousScalar::Number(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AmbiguousScalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = AmbiguousScalar;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a quantity string or a JSON number")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(AmbiguousScalar::String(value.to_owned()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(AmbiguousScalar::String(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(AmbiguousScalar::Number(value.into()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(AmbiguousScalar::Number(value.into()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                serde_json::Number::from_f64(value)
                    .map(AmbiguousScalar::Number)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Float(value), &self))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}
