/// `--read` mode: read hex text from stdin, write binary to stdout.
use std::io::BufWriter;

use crate::cli::OutputCtx;
use crate::hex::{DecodeStats, HexError, Io, decode};

/// Run `hexer --read [--strict]`.
///
/// # Errors
///
/// Returns the decode error that truncated the output, or `HexError::Io` if
/// stdin or stdout fails. Bytes decoded before the error are already written.
pub fn run(strict: bool, ctx: &OutputCtx) -> Result<(), HexError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut io = Io::new(stdin.lock(), BufWriter::new(stdout.lock()));
    let mut stats = DecodeStats::default();

    let timer = ctx.timer("decode");
    let result = decode(&mut io, strict, &mut stats);
    drop(timer);

    ctx.debug_line(format_args!(
        "decoded {} input bytes into {} bytes{}",
        stats.bytes_in,
        stats.bytes_out,
        if strict { " (strict)" } else { "" }
    ));
    result
}
