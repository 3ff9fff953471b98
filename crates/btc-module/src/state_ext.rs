use async_trait::async_trait;
use eyre::{
    Result,
    WrapErr as _,
};
use tracing::instrument;

use crate::{
    param_store::ParamStore,
    params::ModuleParams,
    storage::{
        self,
        keys,
        StoredValue,
    },
};

#[async_trait]
pub(crate) trait StateReadExt: ParamStore {
    #[instrument(skip_all)]
    async fn get_params<P: ModuleParams>(&self) -> Result<Option<P>> {
        let Some(bytes) = self
            .get(keys::PARAMS)
            .await
            .wrap_err("failed reading raw params from state")?
        else {
            return Ok(None);
        };
        StoredValue::deserialize(&bytes)
            .and_then(storage::EncodedParams::try_from)
            .and_then(|encoded| encoded.decode())
            .map(Some)
            .wrap_err("invalid params bytes")
    }

    #[instrument(skip_all)]
    async fn get_activation_height(&self) -> Result<Option<u64>> {
        let Some(bytes) = self
            .get(keys::ACTIVATION_HEIGHT)
            .await
            .wrap_err("failed reading raw activation height from state")?
        else {
            return Ok(None);
        };
        StoredValue::deserialize(&bytes)
            .and_then(|value| storage::ActivationHeight::try_from(value).map(u64::from))
            .map(Some)
            .wrap_err("invalid activation height bytes")
    }
}

impl<T: ParamStore + ?Sized> StateReadExt for T {}

pub(crate) trait StateWriteExt: ParamStore {
    #[instrument(skip_all)]
    fn put_params<P: ModuleParams>(&mut self, params: &P) -> Result<()> {
        let bytes = storage::EncodedParams::encode(params)
            .map(StoredValue::from)
            .and_then(|value| value.serialize())
            .wrap_err("failed to serialize params")?;
        self.set(keys::PARAMS, bytes);
        Ok(())
    }

    #[instrument(skip_all)]
    fn put_activation_height(&mut self, height: u64) -> Result<()> {
        let bytes = StoredValue::from(storage::ActivationHeight::from(height))
            .serialize()
            .wrap_err("failed to serialize activation height")?;
        self.set(keys::ACTIVATION_HEIGHT, bytes);
        Ok(())
    }
}

impl<T: ParamStore + ?Sized> StateWriteExt for T {}
