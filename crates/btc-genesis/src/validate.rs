use eyre::{
    Result,
    WrapErr as _,
};
use tracing::{
    info,
    instrument,
};

use crate::document::Source;

#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    source: Source,
}

/// Decodes and validates a genesis document.
///
/// # Errors
/// Returns an error if the document cannot be read or decoded, or if the genesis state is
/// invalid.
#[instrument(skip_all, fields(genesis = %args.source.genesis.display()), err)]
pub fn run(args: &Args) -> Result<()> {
    let genesis = args.source.read()?;
    genesis
        .validate()
        .wrap_err("genesis state failed validation")?;
    info!("genesis state is valid");
    println!("{} is a valid btc genesis state", args.source.genesis.display());
    Ok(())
}
