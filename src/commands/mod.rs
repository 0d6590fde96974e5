/// Command dispatch: picks the encoder or decoder from the run configuration.
pub mod decode;
pub mod encode;

use std::io::ErrorKind;

use crate::cli::{Config, OutputCtx};
use crate::hex::HexError;

/// Dispatch to `decode` when `--read` is set, `encode` otherwise.
///
/// A closed stdout (e.g. `hexer | head`) ends the run quietly.
///
/// # Errors
///
/// Returns `HexError` on malformed input or stream failure.
pub fn dispatch(config: Config, ctx: &OutputCtx) -> Result<(), HexError> {
    let result = if config.read {
        decode::run(config.strict, ctx)
    } else {
        encode::run(config.format, ctx)
    };

    match result {
        Err(HexError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
