use clap::{
    Parser,
    Subcommand,
};

use super::{
    default_genesis,
    export,
    init,
    validate,
};

/// Utilities for the genesis lifecycle of the btc module
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the default module genesis document
    DefaultGenesis(default_genesis::Args),

    /// Decode and validate a genesis document
    #[command(arg_required_else_help = true)]
    Validate(validate::Args),

    /// Initialize the module in the chain state database from a genesis document
    #[command(arg_required_else_help = true)]
    Init(init::Args),

    /// Export the module's state from the chain state database as a genesis document
    #[command(arg_required_else_help = true)]
    Export(export::Args),
}

#[must_use]
pub fn get() -> Command {
    Cli::parse().command
}
