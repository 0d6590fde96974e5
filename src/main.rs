#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! hexer — stream binary data to hex text and back.

mod cli;
mod commands;
mod hex;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.json, cli.debug);

    match commands::dispatch(cli.config(), &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_hex_error(&err);
            write_error(&error_output, &ctx);
            std::process::exit(err.exit_code());
        }
    }
}
