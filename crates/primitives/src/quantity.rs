use crate::U256;

/// Number of hex digits of a block nonce on the wire.
pub const NONCE_HEX_DIGITS: usize = 16;

/// Error that occurs when decoding a quantity string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// The string contains no digits.
    #[error("Quantity '{0}' has no digits")]
    Empty(String),
    /// The string contains a character that is not a digit of its radix.
    #[error("Quantity '{0}' contains an invalid digit")]
    InvalidDigit(String),
    /// The value does not fit in the required number of bits.
    #[error("Quantity '{value}' exceeds {bit_width} bits")]
    Overflow {
        /// The quantity string
        value: String,
        /// The maximum number of bits
        bit_width: usize,
    },
}

/// Renders a value as `0x` followed by lowercase hex digits, left-padded with
/// zeros to at least `min_digits` digits.
///
/// A `min_digits` of zero produces the minimal form, e.g. `0x0` for zero.
pub fn encode_hex_int(value: &U256, min_digits: usize) -> String {
    let digits = format!("{value:x}");
    format!("0x{digits:0>min_digits$}")
}

/// Renders a `u64` in the minimal quantity form.
pub fn encode_u64(value: u64) -> String {
    encode_hex_int(&U256::from(value), 0)
}

/// Parses a quantity string into a value of at most `bit_width` bits.
///
/// Strings prefixed with `0x` (or `0X`) are read as hex. Bare strings are read
/// as decimal when they only contain decimal digits and as hex otherwise.
pub fn decode_hex_int(value: &str, bit_width: usize) -> Result<U256, QuantityError> {
    let (digits, radix) = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(digits) => (digits, 16),
        None if value.bytes().all(|byte| byte.is_ascii_digit()) => (value, 10),
        None => (value, 16),
    };

    if digits.is_empty() {
        return Err(QuantityError::Empty(value.to_owned()));
    }

    let is_valid = if radix == 16 {
        digits.bytes().all(|byte| byte.is_ascii_hexdigit())
    } else {
        digits.bytes().all(|byte| byte.is_ascii_digit())
    };
    if !is_valid {
        return Err(QuantityError::InvalidDigit(value.to_owned()));
    }

    let overflow = || QuantityError::Overflow {
        value: value.to_owned(),
        bit_width,
    };

    // Digits were validated above, so the only remaining failure is a value
    // wider than 256 bits.
    let parsed = U256::from_str_radix(digits, radix).map_err(|_error| overflow())?;
    if parsed.bit_len() > bit_width {
        return Err(overflow());
    }

    Ok(parsed)
}

/// Parses a quantity string into a `u64`.
pub fn decode_u64(value: &str) -> Result<u64, QuantityError> {
    decode_hex_int(value, 64).map(|value| value.to::<u64>())
}

/// Returns the minimal lowercase hex form of a quantity string, or `None` if
/// it is not a valid quantity.
pub fn canonical_hex(value: &str) -> Option<String> {
    decode_hex_int(value, 256)
        .ok()
        .map(|value| encode_hex_int(&value, 0))
}

/// Compares two quantity strings by value, ignoring case and zero-padding.
///
/// Strings that are not valid quantities fall back to exact comparison.
pub fn quantity_eq(lhs: &str, rhs: &str) -> bool {
    match (canonical_hex(lhs), canonical_hex(rhs)) {
        (Some(lhs), Some(rhs)) => lhs == rhs,
        _ => lhs == rhs,
    }
}
