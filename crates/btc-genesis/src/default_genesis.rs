use std::path::PathBuf;

use btc_module::default_genesis_state;
use eyre::Result;

use crate::document;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to the output file. Written to stdout if not given.
    #[arg(long, short, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Writes the genesis state used when no explicit genesis document is supplied.
///
/// # Errors
/// Returns an error if the document could not be written.
pub fn run(args: &Args) -> Result<()> {
    document::write(&default_genesis_state(), args.output.as_deref())
}
