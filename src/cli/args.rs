/// CLI argument definitions via clap derive.
use clap::Parser;

/// hexer — convert binary data to hex text and back.
#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "hexer",
    about = "Takes input on stdin and writes to stdout. Default is reading binary \
             data and writing its hex encoding.",
    version
)]
pub struct Cli {
    /// Read hexadecimal from stdin and write the binary data to stdout.
    /// Whitespace is ignored.
    #[arg(short, long)]
    pub read: bool,

    /// Group the hex output into blocks of four bytes and lines of eight
    /// (write-hex mode only).
    #[arg(short, long)]
    pub format: bool,

    /// Only has an effect with --read. Instead of ignoring non-hex
    /// characters, stop with an error. Whitespace (space, \t, \n, \r) is
    /// still ignored.
    #[arg(short, long)]
    pub strict: bool,

    /// Write errors to stderr as a JSON envelope.
    #[arg(long)]
    pub json: bool,

    /// Print timing and byte counts to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Run configuration, fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Decode hex to binary instead of encoding.
    pub read: bool,
    /// Pretty-print encoder output.
    pub format: bool,
    /// Reject non-hex, non-whitespace input when decoding.
    pub strict: bool,
}

impl Cli {
    /// Project the mode flags into a [`Config`].
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            read: self.read,
            format: self.format,
            strict: self.strict,
        }
    }
}
