use btc_module::{
    param_store::anyhow_to_eyre,
    Keeper,
};
use cnidarium::{
    StateDelta,
    Storage,
};
use eyre::{
    Result,
    WrapErr as _,
};
use tracing::{
    info,
    instrument,
};

use crate::{
    context,
    document::Source,
    Config,
};

#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub(crate) source: Source,

    /// The block height at which the module is initialized
    #[arg(long, default_value_t = 0)]
    pub(crate) height: u64,

    /// Chain identifier (a.k.a. network name)
    #[arg(long)]
    pub(crate) chain_id: String,
}

/// Initializes the btc module in the chain state database and commits the result.
///
/// # Errors
/// Returns an error if the genesis document is unreadable or invalid, if the module was
/// already initialized in the database, or if the database could not be written.
#[instrument(skip_all, fields(genesis = %args.source.genesis.display()), err)]
pub async fn run(args: &Args, config: &Config) -> Result<()> {
    let ctx = context(args.height, &args.chain_id)?;
    let genesis = args.source.read()?;
    genesis
        .validate()
        .wrap_err("genesis state failed validation")?;

    let storage = Storage::load(config.db_filepath.clone(), vec![])
        .await
        .map_err(anyhow_to_eyre)
        .wrap_err_with(|| {
            format!(
                "failed to load chain state database at `{}`",
                config.db_filepath.display()
            )
        })?;

    let mut keeper = Keeper::new(StateDelta::new(storage.latest_snapshot()));
    let result = keeper.init_genesis(&ctx, &genesis).await;
    let committed = match result {
        Ok(()) => storage
            .commit(keeper.into_store())
            .await
            .map_err(anyhow_to_eyre)
            .wrap_err("failed to commit genesis state"),
        Err(error) => Err(error).wrap_err("failed to initialize btc module from genesis"),
    };
    storage.release().await;

    let root_hash = committed?;
    info!(
        app_hash = %hex::encode(root_hash.0),
        db_filepath = %config.db_filepath.display(),
        "committed btc genesis state"
    );
    Ok(())
}
