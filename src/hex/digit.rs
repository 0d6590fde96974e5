/// Nibble and digit helpers shared by the encoder and decoder.
///
/// Everything here works on raw `u8` values; input is never interpreted as
/// UTF-8. Shifts are done on unsigned bytes, so the high nibble of `0x80..=0xFF`
/// comes out as `8..=f` rather than a sign-extended value.
use super::errors::HexError;

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Whether `byte` is in `[0-9a-fA-F]`.
#[must_use]
pub fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

/// Whether `byte` is one of the whitespace characters skipped even in strict mode.
///
/// Only space, tab, LF and CR count; form feed and vertical tab do not.
#[must_use]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Map a single hex digit to its nibble value.
///
/// # Errors
///
/// Returns `HexError::InvalidDigit` if `digit` is not in `[0-9a-fA-F]`.
pub fn decode_hex_digit(digit: u8) -> Result<u8, HexError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(10 + digit - b'a'),
        b'A'..=b'F' => Ok(10 + digit - b'A'),
        _ => Err(HexError::InvalidDigit { digit }),
    }
}

/// Combine two hex digits into one byte, `high` first.
///
/// # Errors
///
/// Returns `HexError::InvalidDigit` if either digit is invalid.
pub fn decode_pair(high: u8, low: u8) -> Result<u8, HexError> {
    Ok((decode_hex_digit(high)? << 4) | decode_hex_digit(low)?)
}

/// Encode one byte as two lowercase ASCII hex digits, high nibble first.
#[must_use]
pub fn encode_byte(byte: u8) -> [u8; 2] {
    [
        LOWER_DIGITS[usize::from(byte >> 4)],
        LOWER_DIGITS[usize::from(byte & 0x0F)],
    ]
}
