use std::{
    fs,
    io::Write as _,
    path::{
        Path,
        PathBuf,
    },
};

use btc_module::GenesisState;
use eyre::{
    Result,
    WrapErr as _,
};

/// Where to read a genesis state from.
#[derive(clap::Args, Debug)]
pub struct Source {
    /// Path to the genesis document
    #[arg(long, value_name = "PATH")]
    pub genesis: PathBuf,

    /// Read the module's section from the `app_state` of a CometBFT genesis document
    #[arg(long)]
    pub app_state: bool,
}

impl Source {
    /// Reads and decodes the genesis state. The state is not validated.
    pub(crate) fn read(&self) -> Result<GenesisState> {
        let bytes = fs::read(&self.genesis).wrap_err_with(|| {
            format!(
                "failed to read genesis document at `{}`",
                self.genesis.display()
            )
        })?;
        if self.app_state {
            let document: serde_json::Value = serde_json::from_slice(&bytes)
                .wrap_err("failed deserializing CometBFT genesis document")?;
            GenesisState::from_app_state(&document)
                .wrap_err("failed extracting btc genesis state from app state")
        } else {
            GenesisState::from_json_slice(&bytes)
                .wrap_err("failed deserializing btc genesis document")
        }
    }
}

/// Writes `genesis` as a JSON document to `output`, or to stdout if no path is given.
pub(crate) fn write(genesis: &GenesisState, output: Option<&Path>) -> Result<()> {
    let mut json = genesis
        .to_json_pretty()
        .wrap_err("failed serializing genesis state")?;
    json.push('\n');
    match output {
        Some(path) => fs::write(path, json).wrap_err_with(|| {
            format!("failed to write genesis document to `{}`", path.display())
        }),
        None => std::io::stdout()
            .write_all(json.as_bytes())
            .wrap_err("failed to write genesis document to stdout"),
    }
}
