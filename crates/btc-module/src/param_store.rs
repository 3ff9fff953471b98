//! The storage capability the [`crate::Keeper`] is constructed with.
use async_trait::async_trait;
use cnidarium::StateWrite;
use eyre::{
    Result,
    WrapErr as _,
};

/// A namespaced key-value store holding the module's durable state.
///
/// Every [`cnidarium::StateWrite`] is a `ParamStore`, so the host hands the keeper the state
/// delta it will later commit.
#[async_trait]
pub trait ParamStore: Send + Sync {
    /// Reads the raw bytes stored under `key`, if any.
    ///
    /// # Errors
    /// Returns an error if the underlying store could not be read.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Vec<u8>);
}

#[async_trait]
impl<T: StateWrite> ParamStore for T {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.get_raw(key)
            .await
            .map_err(anyhow_to_eyre)
            .wrap_err_with(|| format!("failed reading raw value at `{key}` from state"))
    }

    fn set(&mut self, key: &str, value: Vec<u8>) {
        self.put_raw(key.to_string(), value);
    }
}

/// Converts the `anyhow` errors returned by cnidarium into an eyre report, keeping the source
/// chain.
pub fn anyhow_to_eyre(anyhow_error: anyhow::Error) -> eyre::Report {
    let boxed: Box<dyn std::error::Error + Send + Sync> = anyhow_error.into();
    eyre::eyre!(boxed)
}

#[cfg(test)]
mod tests {
    use super::{
        anyhow_to_eyre,
        ParamStore as _,
    };
    use crate::test_utils::new_state;

    #[test]
    fn anyhow_source_chain_is_kept() {
        let error = anyhow_to_eyre(anyhow::anyhow!("root cause").context("outer"));
        let chain: Vec<String> = error.chain().map(ToString::to_string).collect();
        assert!(
            chain.iter().any(|cause| cause.contains("root cause")),
            "source chain lost: {chain:?}"
        );
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let (_storage, state) = new_state().await;
        assert_eq!(state.get("btc/nothing_here").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_value_is_read_back() {
        let (_storage, mut state) = new_state().await;
        state.set("btc/raw", vec![1, 2, 3]);
        assert_eq!(state.get("btc/raw").await.unwrap(), Some(vec![1, 2, 3]));

        state.set("btc/raw", vec![4]);
        assert_eq!(state.get("btc/raw").await.unwrap(), Some(vec![4]));
    }
}
