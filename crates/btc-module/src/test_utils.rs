use cnidarium::{
    Snapshot,
    StateDelta,
    TempStorage,
};
use serde::{
    Deserialize,
    Serialize,
};
use tendermint::{
    block::Height,
    chain,
};

use crate::{
    params::{
        ModuleParams,
        ParamsError,
    },
    Context,
};

pub(crate) const TEST_CHAIN_ID: &str = "test-1";

/// Params with fields and a constraint, standing in for a populated module configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct TestParams {
    pub(crate) confirmation_height: u64,
    pub(crate) network: String,
}

impl TestParams {
    pub(crate) const MAX_CONFIRMATION_HEIGHT: u64 = 10_000;
}

impl ModuleParams for TestParams {
    fn validate(&self) -> Result<(), ParamsError> {
        if self.confirmation_height > Self::MAX_CONFIRMATION_HEIGHT {
            return Err(ParamsError::invalid_field(
                "confirmation_height",
                format!("must not exceed {}", Self::MAX_CONFIRMATION_HEIGHT),
            ));
        }
        Ok(())
    }
}

pub(crate) fn test_params() -> TestParams {
    TestParams {
        confirmation_height: 6,
        network: "regtest".to_string(),
    }
}

pub(crate) fn context_at(height: u32) -> Context {
    Context::new(
        Height::from(height),
        TEST_CHAIN_ID.parse::<chain::Id>().unwrap(),
    )
}

pub(crate) async fn new_state() -> (TempStorage, StateDelta<Snapshot>) {
    let storage = TempStorage::new().await.unwrap();
    let state = StateDelta::new(storage.latest_snapshot());
    (storage, state)
}
