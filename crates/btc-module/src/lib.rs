#![doc = include_str!("../README.md")]

pub mod context;
pub mod genesis;
pub mod keeper;
pub mod param_store;
pub mod params;
mod state_ext;
pub(crate) mod storage;
#[cfg(test)]
pub(crate) mod test_utils;

pub use context::Context;
pub use genesis::{
    default_genesis_state,
    GenesisError,
    GenesisState,
    MODULE_NAME,
};
pub use keeper::{
    Keeper,
    Lifecycle,
};
pub use param_store::ParamStore;
pub use params::{
    ModuleParams,
    Params,
    ParamsError,
};
