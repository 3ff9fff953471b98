//! The module's integration point with the host framework's genesis hooks.
use std::marker::PhantomData;

use eyre::{
    ensure,
    OptionExt as _,
    Result,
    WrapErr as _,
};
use tracing::{
    info,
    instrument,
};

use crate::{
    genesis::GenesisState,
    param_store::ParamStore,
    params::{
        ModuleParams,
        Params,
    },
    state_ext::{
        StateReadExt as _,
        StateWriteExt as _,
    },
    Context,
};

/// Where a module instance is in its genesis lifecycle.
///
/// The only transition is `Uninitialized -> Initialized`, taken by [`Keeper::init_genesis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Initialized { activation_height: u64 },
}

/// Mediates all reads and writes of the module's durable state.
pub struct Keeper<S, P = Params> {
    store: S,
    _params: PhantomData<fn() -> P>,
}

impl<S, P> Keeper<S, P>
where
    S: ParamStore,
    P: ModuleParams,
{
    /// Creates a keeper reading and writing through `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            _params: PhantomData,
        }
    }

    /// Returns the store, e.g. so that the host can commit the writes of
    /// [`Keeper::init_genesis`].
    pub fn into_store(self) -> S {
        self.store
    }

    /// Persists the params of `state` as the module's authoritative configuration.
    ///
    /// The state is validated again before anything is written. The block height of `ctx` is
    /// recorded as the module's activation height.
    ///
    /// # Errors
    /// Returns an error if `state` is invalid, if the module was already initialized, or if
    /// the params could not be written. The host must treat any error as fatal to chain
    /// start.
    #[instrument(
        name = "Keeper::init_genesis",
        skip_all,
        fields(height = %ctx.height(), chain_id = %ctx.chain_id()),
        err
    )]
    pub async fn init_genesis(&mut self, ctx: &Context, state: &GenesisState<P>) -> Result<()> {
        state
            .validate()
            .wrap_err("refusing to initialize from an invalid genesis state")?;
        let lifecycle = self
            .lifecycle()
            .await
            .wrap_err("failed reading genesis lifecycle")?;
        ensure!(
            lifecycle == Lifecycle::Uninitialized,
            "btc module is already initialized: {lifecycle:?}"
        );
        let params_json =
            serde_json::to_string(state.params()).wrap_err("failed to render params as json")?;
        self.store
            .put_params(state.params())
            .wrap_err("failed to write genesis params")?;
        self.store
            .put_activation_height(ctx.height().value())
            .wrap_err("failed to write activation height")?;
        info!(params = %params_json, "btc module initialized from genesis");
        Ok(())
    }

    /// Reads back the module's configuration as a genesis state.
    ///
    /// Nothing is written.
    ///
    /// # Errors
    /// Returns an error if the module was never initialized or if the stored params could not
    /// be decoded.
    #[instrument(
        name = "Keeper::export_genesis",
        skip_all,
        fields(height = %ctx.height(), chain_id = %ctx.chain_id()),
        err
    )]
    pub async fn export_genesis(&self, ctx: &Context) -> Result<GenesisState<P>> {
        let params = self
            .get_params(ctx)
            .await
            .wrap_err("failed to read params for export")?;
        Ok(GenesisState::new(params))
    }

    /// Returns the lifecycle stage recorded in storage.
    ///
    /// # Errors
    /// Returns an error if storage could not be read or holds inconsistent genesis values.
    pub async fn lifecycle(&self) -> Result<Lifecycle> {
        let has_params = self.store.get_params::<P>().await?.is_some();
        let activation_height = self.store.get_activation_height().await?;
        match (has_params, activation_height) {
            (false, None) => Ok(Lifecycle::Uninitialized),
            (true, Some(activation_height)) => Ok(Lifecycle::Initialized {
                activation_height,
            }),
            (has_params, activation_height) => Err(eyre::eyre!(
                "inconsistent genesis state in storage: params present: {has_params}, activation \
                 height: {activation_height:?}"
            )),
        }
    }

    async fn get_params(&self, _ctx: &Context) -> Result<P> {
        self.store
            .get_params()
            .await?
            .ok_or_eyre("btc module was not initialized; no params in storage")
    }
}
