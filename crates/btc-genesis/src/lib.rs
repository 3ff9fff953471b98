#![doc = include_str!("../README.md")]

pub mod cli;
pub mod config;
pub mod default_genesis;
pub mod document;
pub mod export;
pub mod init;
pub mod telemetry;
pub mod validate;

use btc_module::Context;
use eyre::{
    Result,
    WrapErr as _,
};
use tendermint::{
    block::Height,
    chain,
};

pub use crate::{
    cli::Command,
    config::Config,
};

/// Runs a single `btc-genesis` subcommand.
///
/// # Errors
/// Returns the error of the subcommand. Genesis failures are not retried.
pub async fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::DefaultGenesis(args) => default_genesis::run(&args),
        Command::Validate(args) => validate::run(&args),
        Command::Init(args) => init::run(&args, config).await,
        Command::Export(args) => export::run(&args, config).await,
    }
}

fn context(height: u64, chain_id: &str) -> Result<Context> {
    let height = Height::try_from(height).wrap_err("block height is out of range")?;
    let chain_id = chain_id
        .parse::<chain::Id>()
        .wrap_err_with(|| format!("`{chain_id}` is not a valid chain id"))?;
    Ok(Context::new(height, chain_id))
}
