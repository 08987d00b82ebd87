use num_bigint::BigInt;
use num_traits::Num;

use crate::error::RecoverError;

/// Parse a share ordinate written in the given base (2..=36) into an exact
/// integer. Alphabetic digits are case-insensitive and a leading sign is
/// allowed; anything else, including an empty string or an out-of-range base,
/// is a `Decode` failure carrying the offending text.
pub fn decode_value(text: &str, base: u32) -> Result<BigInt, RecoverError> {
    // from_str_radix asserts outside this range instead of erroring.
    if !(2..=36).contains(&base) {
        return Err(RecoverError::Decode {
            value: text.to_string(),
            base,
        });
    }
    BigInt::from_str_radix(text, base).map_err(|_| RecoverError::Decode {
        value: text.to_string(),
        base,
    })
}

/// Format an integer in the given base (2..=36), the inverse of
/// `decode_value`. Lowercase digits, leading `-` for negatives.
pub fn encode_value(value: &BigInt, base: u32) -> String {
    value.to_str_radix(base)
}
