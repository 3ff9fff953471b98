//! The genesis state of the `btc` module.
//!
//! A [`GenesisState`] is a transient snapshot of the module's configuration. It is decoded from
//! the genesis document at chain start and handed to [`crate::Keeper::init_genesis`], or built
//! by [`crate::Keeper::export_genesis`] when the chain state is exported.
//!
//! The genesis document schema is a JSON object with a single field:
//! ```json
//! { "params": {} }
//! ```
use serde::{
    Deserialize,
    Serialize,
};

use crate::params::{
    ModuleParams,
    Params,
    ParamsError,
};

/// The key of the module's section in the `app_state` of a host genesis document.
pub const MODULE_NAME: &str = "btc";

/// Returns the genesis state used when no explicit genesis document is supplied.
#[must_use]
pub fn default_genesis_state() -> GenesisState {
    GenesisState::default()
}

/// The module's configuration at genesis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenesisState<P = Params> {
    #[serde(default)]
    params: P,
}

impl<P: ModuleParams> GenesisState<P> {
    /// Wraps `params` verbatim.
    #[must_use]
    pub fn new(params: P) -> Self {
        Self {
            params,
        }
    }

    #[must_use]
    pub fn params(&self) -> &P {
        &self.params
    }

    #[must_use]
    pub fn into_params(self) -> P {
        self.params
    }

    /// Checks that the genesis state may be used to start the chain.
    ///
    /// The host must treat an error as fatal: no part of an invalid genesis state is ever
    /// persisted.
    ///
    /// # Errors
    /// Returns an error if the params violate one of the module's constraints.
    pub fn validate(&self) -> Result<(), GenesisError> {
        self.params.validate().map_err(GenesisError::invalid_params)
    }

    /// Decodes a genesis state from a module genesis document.
    ///
    /// # Errors
    /// Returns an error if `bytes` is not a JSON encoded genesis state.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, GenesisError> {
        serde_json::from_slice(bytes).map_err(GenesisError::decode)
    }

    /// Extracts the module's section from the `app_state` of a host genesis document.
    ///
    /// A document without a `btc` section yields the default genesis state.
    ///
    /// # Errors
    /// Returns an error if the document has no `app_state` object, or if the module's section
    /// cannot be decoded.
    pub fn from_app_state(document: &serde_json::Value) -> Result<Self, GenesisError> {
        let Some(app_state) = document
            .get("app_state")
            .and_then(serde_json::Value::as_object)
        else {
            return Err(GenesisError::missing_app_state());
        };
        match app_state.get(MODULE_NAME) {
            Some(section) => Self::deserialize(section).map_err(GenesisError::decode),
            None => Ok(Self::default()),
        }
    }

    /// Encodes the genesis state as a pretty printed module genesis document.
    ///
    /// # Errors
    /// Returns an error if the params cannot be represented as JSON.
    pub fn to_json_pretty(&self) -> Result<String, GenesisError> {
        serde_json::to_string_pretty(self).map_err(GenesisError::encode)
    }
}

/// The errors that can occur when decoding or validating a genesis state.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct GenesisError(GenesisErrorKind);

impl GenesisError {
    fn invalid_params(source: ParamsError) -> Self {
        Self(GenesisErrorKind::InvalidParams(source))
    }

    fn decode(source: serde_json::Error) -> Self {
        Self(GenesisErrorKind::Decode(source))
    }

    fn encode(source: serde_json::Error) -> Self {
        Self(GenesisErrorKind::Encode(source))
    }

    fn missing_app_state() -> Self {
        Self(GenesisErrorKind::MissingAppState)
    }

    /// Returns the violated constraint if validation failed.
    #[must_use]
    pub fn as_invalid_params(&self) -> Option<&ParamsError> {
        match &self.0 {
            GenesisErrorKind::InvalidParams(source) => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum GenesisErrorKind {
    #[error("genesis params are invalid")]
    InvalidParams(#[source] ParamsError),
    #[error("failed decoding genesis state from JSON")]
    Decode(#[source] serde_json::Error),
    #[error("failed encoding genesis state as JSON")]
    Encode(#[source] serde_json::Error),
    #[error("genesis document does not contain an `app_state` object")]
    MissingAppState,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_utils::{
        test_params,
        TestParams,
    };

    #[test]
    fn default_genesis_state_is_valid() {
        default_genesis_state().validate().unwrap();
        GenesisState::<TestParams>::default().validate().unwrap();
    }

    #[test]
    fn default_genesis_state_has_zero_value_params() {
        assert_eq!(default_genesis_state().params(), &Params::default());
    }

    #[test]
    fn new_wraps_params_verbatim() {
        let params = test_params();
        let genesis = GenesisState::new(params.clone());
        assert_eq!(genesis.params(), &params);
        assert_eq!(genesis.into_params(), params);
    }

    #[test]
    fn validate_rejects_params_violating_a_constraint() {
        let genesis = GenesisState::new(TestParams {
            confirmation_height: TestParams::MAX_CONFIRMATION_HEIGHT + 1,
            ..test_params()
        });
        let error = genesis
            .validate()
            .expect_err("a confirmation height above the maximum must be rejected");
        assert_eq!(
            error
                .as_invalid_params()
                .expect("the error must be caused by invalid params")
                .field(),
            "confirmation_height",
        );
    }

    #[test]
    fn validate_accepts_params_at_the_constraint_boundary() {
        GenesisState::new(TestParams {
            confirmation_height: TestParams::MAX_CONFIRMATION_HEIGHT,
            ..test_params()
        })
        .validate()
        .unwrap();
    }

    #[test]
    fn default_genesis_document_should_not_change() {
        insta::assert_snapshot!(
            "default_genesis_document",
            default_genesis_state().to_json_pretty().unwrap()
        );
    }

    #[test]
    fn genesis_document_round_trips() {
        let genesis = GenesisState::new(test_params());
        let json = genesis.to_json_pretty().unwrap();
        assert_eq!(
            GenesisState::<TestParams>::from_json_slice(json.as_bytes()).unwrap(),
            genesis
        );
    }

    #[test]
    fn genesis_document_without_params_decodes_to_default() {
        let genesis = GenesisState::<TestParams>::from_json_slice(b"{}").unwrap();
        assert_eq!(genesis, GenesisState::default());
    }

    #[test]
    fn genesis_document_ignores_unknown_fields() {
        let genesis = GenesisState::<TestParams>::from_json_slice(
            br#"{"params": {"confirmation_height": 6, "network": "regtest"}, "version": 2}"#,
        )
        .unwrap();
        assert_eq!(genesis, GenesisState::new(test_params()));
    }

    #[test]
    fn malformed_genesis_document_is_rejected() {
        let _ = GenesisState::<TestParams>::from_json_slice(br#"{"params": 42}"#)
            .expect_err("params must be an object");
    }

    #[test]
    fn module_section_is_extracted_from_app_state() {
        let document = json!({
            "chain_id": "test-1",
            "app_state": {
                "bank": { "balances": [] },
                "btc": { "params": { "confirmation_height": 6, "network": "regtest" } },
            },
        });
        assert_eq!(
            GenesisState::<TestParams>::from_app_state(&document).unwrap(),
            GenesisState::new(test_params()),
        );
    }

    #[test]
    fn missing_module_section_yields_default_genesis_state() {
        let document = json!({
            "chain_id": "test-1",
            "app_state": { "bank": { "balances": [] } },
        });
        assert_eq!(
            GenesisState::<TestParams>::from_app_state(&document).unwrap(),
            GenesisState::default(),
        );
    }

    #[test]
    fn document_without_app_state_is_rejected() {
        let _ = GenesisState::<TestParams>::from_app_state(&json!({ "chain_id": "test-1" }))
            .expect_err("a host genesis document must contain an app state");
    }
}
