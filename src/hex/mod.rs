/// Hex codec layer: digit helpers, streaming encoder and decoder.
pub mod decode;
pub mod digit;
pub mod encode;
pub mod errors;
pub mod io;

pub use decode::{DecodeStats, decode};
pub use encode::encode;
pub use errors::HexError;
pub use io::Io;
