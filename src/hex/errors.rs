/// Errors from the hex codec layer.
use thiserror::Error;

/// Errors that can occur while encoding or decoding a hex stream.
#[derive(Debug, Error)]
pub enum HexError {
    /// The digit decoder was handed something outside `[0-9a-fA-F]`.
    #[error("Fatal error. Could not decode hex digit: {digit}")]
    InvalidDigit {
        /// The raw input byte.
        digit: u8,
    },

    /// Strict mode hit a character that is neither a hex digit nor whitespace.
    #[error(
        "The character {} ({character}) is not a valid hex digit (at offset {offset})",
        escape_byte(.character)
    )]
    InvalidCharacter {
        /// The raw input byte.
        character: u8,
        /// Zero-based offset of the byte in the input stream.
        offset: u64,
    },

    /// The input ended in the middle of a digit pair.
    #[error(
        "EOF before even-numbered hex digit (there has to be an even number of valid hex digits, \
         input ended at offset {offset})"
    )]
    IncompletePair {
        /// Number of input bytes consumed when the stream ended.
        offset: u64,
    },

    /// Reading stdin or writing stdout failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Render a raw input byte escaped like a `char` literal.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn escape_byte(byte: &u8) -> String {
    char::from(*byte).escape_default().to_string()
}

impl HexError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDigit { .. }
            | Self::InvalidCharacter { .. }
            | Self::IncompletePair { .. } => 1,
            Self::Io(_) => 3,
        }
    }
}
