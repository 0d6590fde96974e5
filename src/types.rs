/// Serializable error envelope written to stderr.
///
/// Decoupled from `HexError` so the JSON shape stays stable if the internal
/// error type grows variants.
use serde::{Deserialize, Serialize};

use crate::hex::HexError;

const IO_ERROR_CODE: &str = "io_error";

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Input offset the error refers to, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Process exit code that accompanies this error.
    pub exit_code: i32,
}

impl ErrorDetail {
    /// Lead-in for the plain-text rendering.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        if self.code == IO_ERROR_CODE {
            "Runtime error occurred: "
        } else {
            "Could not decode hex stream properly. Reason: "
        }
    }
}

impl ErrorOutput {
    /// Construct from a `HexError`.
    #[must_use]
    pub fn from_hex_error(err: &HexError) -> Self {
        let (code, offset) = match err {
            HexError::InvalidDigit { .. } => ("invalid_digit", None),
            HexError::InvalidCharacter { offset, .. } => ("invalid_character", Some(*offset)),
            HexError::IncompletePair { offset } => ("incomplete_pair", Some(*offset)),
            HexError::Io(_) => (IO_ERROR_CODE, None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                offset,
                exit_code: err.exit_code(),
            },
        }
    }
}
