pub(crate) mod keys;
mod values;

use std::fmt::{
    self,
    Display,
    Formatter,
};

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use eyre::{
    Result,
    WrapErr as _,
};

pub(crate) use self::values::{
    ActivationHeight,
    EncodedParams,
    Value,
};

/// The envelope every value in the module's namespace is stored in.
#[derive(Debug, BorshSerialize, BorshDeserialize)]
pub(crate) enum StoredValue {
    Btc(Value),
}

impl StoredValue {
    pub(crate) fn serialize(&self) -> Result<Vec<u8>> {
        borsh::to_vec(&self).wrap_err("failed to serialize stored value")
    }

    pub(crate) fn deserialize(bytes: &[u8]) -> Result<Self> {
        borsh::from_slice(bytes).wrap_err("failed to deserialize stored value")
    }
}

impl Display for StoredValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StoredValue::Btc(value) => write!(f, "btc {value}"),
        }
    }
}
