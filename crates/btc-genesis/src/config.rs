use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};

/// The environment prefix of all `btc-genesis` configuration variables.
pub const PREFIX: &str = "BTC_GENESIS_";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Log filter directives, e.g. `info` or `btc_module=debug,warn`.
    pub log: String,
    /// The path to the cnidarium database holding the chain state.
    pub db_filepath: PathBuf,
    /// Print compact human readable logs instead of JSON.
    pub pretty_print: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: "info".to_string(),
            db_filepath: PathBuf::from("btc_genesis_db"),
            pretty_print: false,
        }
    }
}

impl Config {
    /// Reads the config from `BTC_GENESIS_` prefixed environment variables.
    ///
    /// `RUST_LOG` is honoured as the `log` field.
    ///
    /// # Errors
    /// Returns an error if a variable has the wrong type or is not a known field.
    pub fn get() -> Result<Self, figment::Error> {
        Self::get_with_prefix(PREFIX)
    }

    fn get_with_prefix(prefix: &str) -> Result<Self, figment::Error> {
        use figment::{
            providers::Env,
            Figment,
        };
        Figment::new()
            .merge(Env::prefixed("RUST_").split("_").only(&["log"]))
            .merge(Env::prefixed(prefix))
            .extract()
    }
}
