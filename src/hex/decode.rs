/// Hex → binary decoder.
///
/// Digits are consumed in pairs, high nibble first. Whitespace (space, tab,
/// LF, CR) between or inside pairs is skipped. Any other non-digit is skipped
/// too, unless strict mode is on, in which case decoding stops at it.
use std::io::{Read, Write};

use super::digit::{decode_pair, is_hex_digit, is_whitespace};
use super::errors::HexError;
use super::io::{Io, read_byte};

/// Scans an input stream for the next hex digit.
pub struct DigitReader<R> {
    input: R,
    strict: bool,
    offset: u64,
}

impl<R: Read> DigitReader<R> {
    #[must_use]
    pub fn new(input: R, strict: bool) -> Self {
        Self {
            input,
            strict,
            offset: 0,
        }
    }

    /// Number of input bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Return the next hex digit, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `HexError::InvalidCharacter` in strict mode when a byte is
    /// neither a hex digit nor whitespace, and `HexError::Io` on read failure.
    pub fn next_digit(&mut self) -> Result<Option<u8>, HexError> {
        while let Some(byte) = read_byte(&mut self.input)? {
            let offset = self.offset;
            self.offset += 1;

            if is_hex_digit(byte) {
                return Ok(Some(byte));
            }
            if self.strict && !is_whitespace(byte) {
                return Err(HexError::InvalidCharacter {
                    character: byte,
                    offset,
                });
            }
        }
        Ok(None)
    }

    /// Return the next decoded byte, or `None` on a clean end between pairs.
    ///
    /// # Errors
    ///
    /// Returns `HexError::IncompletePair` if the input ends after the first
    /// digit of a pair, plus everything [`Self::next_digit`] can return.
    pub fn next_byte(&mut self) -> Result<Option<u8>, HexError> {
        let Some(high) = self.next_digit()? else {
            return Ok(None);
        };
        let Some(low) = self.next_digit()? else {
            return Err(HexError::IncompletePair {
                offset: self.offset,
            });
        };
        decode_pair(high, low).map(Some)
    }
}

/// Totals reported after a decode, successful or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub bytes_in: u64,
    pub bytes_out: u64,
}

/// Decode hex text from `io.input` into raw bytes on `io.output`.
///
/// Every byte decoded before a failure is written and flushed; a digit left
/// without its partner is never emitted.
///
/// # Errors
///
/// Returns `HexError::InvalidCharacter` (strict mode only) or
/// `HexError::IncompletePair` when the input is malformed, and `HexError::Io`
/// when a stream fails. `stats` holds the totals either way.
pub fn decode<R: Read, W: Write>(
    io: &mut Io<R, W>,
    strict: bool,
    stats: &mut DecodeStats,
) -> Result<(), HexError> {
    let mut digits = DigitReader::new(&mut io.input, strict);
    let result = copy_pairs(&mut digits, &mut io.output, stats);
    stats.bytes_in = digits.offset();

    // A decode error outranks a failed flush, so a closed stdout cannot hide it.
    let flushed = io.output.flush();
    result?;
    flushed?;
    Ok(())
}

fn copy_pairs<R: Read, W: Write>(
    digits: &mut DigitReader<R>,
    out: &mut W,
    stats: &mut DecodeStats,
) -> Result<(), HexError> {
    while let Some(byte) = digits.next_byte()? {
        out.write_all(&[byte])?;
        stats.bytes_out += 1;
    }
    Ok(())
}
