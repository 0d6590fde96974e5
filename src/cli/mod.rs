/// CLI layer: argument parsing and diagnostic output.
pub mod args;
pub mod output;

pub use args::{Cli, Config};
pub use output::{OutputCtx, write_error};
