/// Default mode: read binary from stdin, write hex to stdout.
use std::io::BufWriter;

use crate::cli::OutputCtx;
use crate::hex::{HexError, Io, encode};

/// Run `hexer [--format]`.
///
/// # Errors
///
/// Returns `HexError::Io` if stdin or stdout fails.
pub fn run(format: bool, ctx: &OutputCtx) -> Result<(), HexError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut io = Io::new(stdin.lock(), BufWriter::new(stdout.lock()));

    let timer = ctx.timer("encode");
    let stats = encode(&mut io, format)?;
    drop(timer);

    ctx.debug_line(format_args!(
        "encoded {} bytes into {} hex digits",
        stats.bytes_in,
        stats.bytes_in * 2
    ));
    Ok(())
}
