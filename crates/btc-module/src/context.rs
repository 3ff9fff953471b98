use tendermint::{
    block::Height,
    chain,
};

/// Request-scoped values the host supplies with every genesis call.
///
/// The context never gives access to storage; the keeper reads and writes through the
/// [`crate::ParamStore`] it was constructed with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    height: Height,
    chain_id: chain::Id,
}

impl Context {
    #[must_use]
    pub fn new(height: Height, chain_id: chain::Id) -> Self {
        Self {
            height,
            chain_id,
        }
    }

    #[must_use]
    pub fn height(&self) -> Height {
        self.height
    }

    #[must_use]
    pub fn chain_id(&self) -> &chain::Id {
        &self.chain_id
    }
}
