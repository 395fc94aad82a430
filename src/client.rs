//! The coordination client facade

use std::time::Duration;

use tracing::debug;

use crate::common::{ClientConfig, Error, Result};
use crate::keys::{GetOptions, KeysApi, SetOptions};

/// Client for a single coordination-store endpoint with a fixed per-call
/// timeout.
///
/// Stateless after construction: every method takes `&self` and performs one
/// bounded round trip, so one instance can be shared across tasks without
/// external synchronization. No call retries internally; retry policy belongs
/// to the caller.
#[derive(Clone, Debug)]
pub struct CoordClient {
    keys: KeysApi,
}

impl CoordClient {
    /// Connect to a single store endpoint.
    ///
    /// `timeout` bounds every remote call issued by this client and cannot be
    /// overridden per call. Fails with `InvalidConfig` on an empty endpoint
    /// or zero timeout, `Connection` if the transport cannot be built.
    pub fn connect(endpoint: &str, timeout: Duration) -> Result<Self> {
        ClientConfig::new(endpoint, timeout).validate()?;
        Ok(Self {
            keys: KeysApi::new(endpoint, timeout)?,
        })
    }

    /// As [`connect`](Self::connect), from an assembled configuration.
    pub fn from_config(cfg: &ClientConfig) -> Result<Self> {
        Self::connect(&cfg.endpoint, cfg.timeout())
    }

    /// Deadline applied to every call.
    pub fn timeout(&self) -> Duration {
        self.keys.timeout()
    }

    /// Write `value` at `key` with default write semantics.
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_with_options(key, value, &SetOptions::default())
            .await
    }

    /// As [`set`](Self::set), forwarding an options bag to the store
    /// unchanged. Invalid option combinations surface as store errors.
    pub async fn set_with_options(
        &self,
        key: &str,
        value: &str,
        opts: &SetOptions,
    ) -> Result<()> {
        self.keys.set(key, value, opts).await?;
        Ok(())
    }

    /// Read the value at `key`.
    ///
    /// Fails with `NotFound` if the key does not exist. A directory node
    /// reads as an empty value.
    pub async fn get(&self, key: &str) -> Result<String> {
        self.get_with_options(key, &GetOptions::default()).await
    }

    /// As [`get`](Self::get), forwarding an options bag to the store
    /// unchanged.
    pub async fn get_with_options(&self, key: &str, opts: &GetOptions) -> Result<String> {
        let resp = self.keys.get(key, opts).await?;
        Ok(resp.node.value.unwrap_or_default())
    }

    /// Idempotent directory creation.
    ///
    /// Issues a single conditional create (`dir=true`, `prevExist=false`)
    /// rather than a read-then-write sequence, so two callers racing on the
    /// same absent key cannot collide: the store arbitrates, and the loser's
    /// already-exists answer is folded into success. A key that already
    /// exists in any form, directory or plain value, is likewise success and
    /// is left untouched. Every other error propagates, including a
    /// `NotDir` answer: that means a parent path component is a plain
    /// value, so the directory was not created and cannot be.
    pub async fn ensure_dir(&self, key: &str) -> Result<()> {
        let opts = SetOptions {
            dir: true,
            prev_exist: Some(false),
            ..Default::default()
        };
        match self.keys.set(key, "", &opts).await {
            Ok(_) => {
                debug!(key, "directory created");
                Ok(())
            }
            Err(Error::NodeExist(_)) | Err(Error::NotFile(_)) => {
                debug!(key, "directory already present");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_rejects_empty_endpoint() {
        let err = CoordClient::connect("", Duration::from_secs(2)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_connect_rejects_zero_timeout() {
        let err = CoordClient::connect("http://127.0.0.1:2379", Duration::ZERO).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_connect_ok() {
        let client = CoordClient::connect("http://127.0.0.1:2379", Duration::from_secs(2)).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(2));
    }
}
