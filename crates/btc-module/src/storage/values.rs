use std::fmt::{
    self,
    Debug,
    Display,
    Formatter,
};

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use eyre::{
    bail,
    Result,
    WrapErr as _,
};

use super::StoredValue;
use crate::params::ModuleParams;

#[derive(Debug, BorshSerialize, BorshDeserialize)]
pub(crate) struct Value(ValueImpl);

#[derive(Debug, BorshSerialize, BorshDeserialize)]
enum ValueImpl {
    Params(EncodedParams),
    ActivationHeight(ActivationHeight),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueImpl::Params(params) => write!(f, "params ({} bytes)", params.0.len()),
            ValueImpl::ActivationHeight(height) => write!(f, "activation height {height}"),
        }
    }
}

/// The JSON encoding of a module params record, carried as opaque bytes inside the borsh
/// envelope.
///
/// JSON is self-describing: params written before a field was added decode with that field at
/// its zero value, and fields a newer release wrote are ignored by an older one. A positional
/// encoding would tie the stored bytes to the exact shape of the params type.
#[derive(BorshSerialize, BorshDeserialize)]
pub(crate) struct EncodedParams(Vec<u8>);

impl EncodedParams {
    pub(crate) fn encode<P: ModuleParams>(params: &P) -> Result<Self> {
        serde_json::to_vec(params)
            .map(Self)
            .wrap_err("failed to encode params")
    }

    pub(crate) fn decode<P: ModuleParams>(&self) -> Result<P> {
        serde_json::from_slice(&self.0).wrap_err("failed to decode params")
    }
}

impl Debug for EncodedParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedParams({} bytes)", self.0.len())
    }
}

impl From<EncodedParams> for StoredValue {
    fn from(params: EncodedParams) -> Self {
        StoredValue::Btc(Value(ValueImpl::Params(params)))
    }
}

impl TryFrom<StoredValue> for EncodedParams {
    type Error = eyre::Error;

    fn try_from(value: StoredValue) -> Result<Self, Self::Error> {
        let StoredValue::Btc(Value(ValueImpl::Params(params))) = value else {
            bail!("btc stored value type mismatch: expected params, found {value}");
        };
        Ok(params)
    }
}

#[derive(Debug, BorshSerialize, BorshDeserialize)]
pub(crate) struct ActivationHeight(u64);

impl Display for ActivationHeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for ActivationHeight {
    fn from(height: u64) -> Self {
        ActivationHeight(height)
    }
}

impl From<ActivationHeight> for u64 {
    fn from(height: ActivationHeight) -> Self {
        height.0
    }
}

impl From<ActivationHeight> for StoredValue {
    fn from(height: ActivationHeight) -> Self {
        StoredValue::Btc(Value(ValueImpl::ActivationHeight(height)))
    }
}

impl TryFrom<StoredValue> for ActivationHeight {
    type Error = eyre::Error;

    fn try_from(value: StoredValue) -> Result<Self, Self::Error> {
        let StoredValue::Btc(Value(ValueImpl::ActivationHeight(height))) = value else {
            bail!("btc stored value type mismatch: expected activation height, found {value}");
        };
        Ok(height)
    }
}
