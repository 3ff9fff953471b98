use std::fmt::Debug;

use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize,
};

/// The capabilities a module configuration record must provide.
///
/// The genesis lifecycle only ever handles params through this trait: it decodes them from the
/// genesis document and writes them to and reads them from storage (both through serde), and
/// asks them to validate themselves. The zero value returned by [`Default`] must always be valid.
pub trait ModuleParams:
    Clone
    + Debug
    + Default
    + PartialEq
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Checks the params against the module's constraints.
    ///
    /// This is the only place where parameter constraints are enforced. It is consulted by
    /// [`crate::GenesisState::validate`], which in turn gates
    /// [`crate::Keeper::init_genesis`].
    ///
    /// # Errors
    /// Returns an error naming the first field that violates a constraint.
    fn validate(&self) -> Result<(), ParamsError> {
        Ok(())
    }
}

/// Configuration of the `btc` module.
///
/// No parameters are defined yet. Unknown fields in a genesis document are ignored and missing
/// ones take their zero value, so documents written by newer releases still decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {}

impl ModuleParams for Params {}

/// A module parameter violated one of its constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for param `{field}`: {reason}")]
pub struct ParamsError {
    field: &'static str,
    reason: String,
}

impl ParamsError {
    #[must_use]
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }
}
