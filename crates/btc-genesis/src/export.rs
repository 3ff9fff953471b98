use std::path::PathBuf;

use btc_module::{
    param_store::anyhow_to_eyre,
    Keeper,
    Lifecycle,
};
use cnidarium::{
    StateDelta,
    Storage,
};
use eyre::{
    bail,
    Result,
    WrapErr as _,
};
use tracing::{
    info,
    instrument,
};

use crate::{
    context,
    document,
    Config,
};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to the output file. Written to stdout if not given.
    #[arg(long, short, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Chain identifier (a.k.a. network name)
    #[arg(long)]
    pub(crate) chain_id: String,
}

/// Exports the btc module's state from the latest snapshot of the chain state database.
///
/// # Errors
/// Returns an error if the database cannot be loaded, if the module was never initialized in
/// it, or if the genesis document could not be written.
#[instrument(skip_all, err)]
pub async fn run(args: &Args, config: &Config) -> Result<()> {
    let storage = Storage::load(config.db_filepath.clone(), vec![])
        .await
        .map_err(anyhow_to_eyre)
        .wrap_err_with(|| {
            format!(
                "failed to load chain state database at `{}`",
                config.db_filepath.display()
            )
        })?;
    let snapshot = storage.latest_snapshot();
    let version = snapshot.version();
    let keeper = Keeper::new(StateDelta::new(snapshot));
    let exported = export(&keeper, version, &args.chain_id).await;
    storage.release().await;

    let genesis = exported?;
    document::write(&genesis, args.output.as_deref())?;
    info!(version, "exported btc genesis state");
    Ok(())
}

async fn export(
    keeper: &Keeper<StateDelta<cnidarium::Snapshot>>,
    version: u64,
    chain_id: &str,
) -> Result<btc_module::GenesisState> {
    match keeper
        .lifecycle()
        .await
        .wrap_err("failed reading genesis lifecycle")?
    {
        Lifecycle::Uninitialized => {
            bail!("the chain state database holds no initialized btc module")
        }
        Lifecycle::Initialized {
            activation_height,
        } => info!(activation_height, "found initialized btc module"),
    }
    let ctx = context(version, chain_id)?;
    keeper
        .export_genesis(&ctx)
        .await
        .wrap_err("failed to export btc genesis state")
}
