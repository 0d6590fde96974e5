/// Explicit I/O context handed to the encoder and decoder.
use std::io::{self, Read, Write};

/// An input source and an output sink.
///
/// The codec never touches process streams directly; the command layer builds
/// an `Io` over stdin/stdout, tests build one over byte slices and `Vec<u8>`.
pub struct Io<R, W> {
    pub input: R,
    pub output: W,
}

impl<R: Read, W: Write> Io<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// Read a single byte from `input`, or `None` at end of stream.
///
/// Retries on `Interrupted`. Callers are expected to pass a buffered reader
/// such as `StdinLock`.
///
/// # Errors
///
/// Propagates any other read error.
pub fn read_byte<R: Read>(input: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

/// Adapt `input` into a fallible byte iterator that stops at end of stream.
pub fn bytes<R: Read>(input: &mut R) -> impl Iterator<Item = io::Result<u8>> + '_ {
    std::iter::from_fn(move || read_byte(&mut *input).transpose())
}
