/// Binary → hex encoder.
///
/// Each input byte becomes two lowercase hex digits. With formatting enabled the
/// pairs are grouped four to a block and eight to a line:
///
/// ```text
/// 00 01 02 03  04 05 06 07
/// 08
/// ```
use std::io::{self, Read, Write};

use super::digit::encode_byte;
use super::errors::HexError;
use super::io::{Io, bytes};

/// Bytes per output line in format mode.
pub const LINE_WIDTH: u64 = 8;
/// Bytes per space-separated block within a line.
pub const GROUP_WIDTH: u64 = 4;

/// Separator written before the pair of the byte at `position` in format mode.
#[must_use]
pub fn separator(position: u64) -> &'static str {
    if position == 0 {
        ""
    } else if position % LINE_WIDTH == 0 {
        "\n"
    } else if position % GROUP_WIDTH == 0 {
        "  "
    } else {
        " "
    }
}

/// One unit of encoder output: an optional separator followed by a digit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub separator: &'static str,
    pub pair: [u8; 2],
}

impl Fragment {
    /// Write the separator and pair to `out`.
    ///
    /// # Errors
    ///
    /// Propagates write errors.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.separator.as_bytes())?;
        out.write_all(&self.pair)
    }
}

/// Lazily turns a fallible byte stream into encoder fragments.
///
/// The stream position is counted here; nothing is buffered beyond the current byte.
pub struct HexPairs<I> {
    bytes: I,
    format: bool,
    position: u64,
}

impl<I> HexPairs<I> {
    #[must_use]
    pub fn new(bytes: I, format: bool) -> Self {
        Self {
            bytes,
            format,
            position: 0,
        }
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }
}

impl<I, E> Iterator for HexPairs<I>
where
    I: Iterator<Item = Result<u8, E>>,
{
    type Item = Result<Fragment, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = match self.bytes.next()? {
            Ok(b) => b,
            Err(e) => return Some(Err(e)),
        };
        let separator = if self.format {
            separator(self.position)
        } else {
            ""
        };
        self.position += 1;
        Some(Ok(Fragment {
            separator,
            pair: encode_byte(byte),
        }))
    }
}

/// Totals reported after a successful encode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    pub bytes_in: u64,
}

/// Encode everything from `io.input` to `io.output` until end of stream.
///
/// A trailing newline is written in format mode, even for empty input. The
/// output is flushed before returning.
///
/// # Errors
///
/// Returns `HexError::Io` if reading or writing fails.
pub fn encode<R: Read, W: Write>(io: &mut Io<R, W>, format: bool) -> Result<EncodeStats, HexError> {
    let mut pairs = HexPairs::new(bytes(&mut io.input), format);
    for fragment in pairs.by_ref() {
        fragment?.write_to(&mut io.output)?;
    }
    let stats = EncodeStats {
        bytes_in: pairs.position(),
    };

    if format {
        io.output.write_all(b"\n")?;
    }
    io.output.flush()?;
    Ok(stats)
}
