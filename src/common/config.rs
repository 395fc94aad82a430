//! Configuration for the coordkv client and tooling

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Client configuration: exactly one store endpoint and one fixed per-call
/// timeout, immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Store endpoint, e.g. "http://127.0.0.1:2379"
    pub endpoint: String,

    /// Deadline applied to every remote call, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    2000
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms: timeout.as_millis() as u64,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "endpoint must not be empty".into(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(crate::Error::InvalidConfig(
                "timeout must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Load-generation settings published into the store as a small configuration
/// value. The client core consumes none of this; it only carries the bag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchConfig {
    /// Number of concurrent connections to use
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,

    /// Duration of the test in seconds
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,

    /// Socket/request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// HTTP method
    #[serde(default = "default_method")]
    pub method: String,

    /// Raw header string sent to the target URL
    #[serde(default)]
    pub headers: String,

    /// Disable keep-alives
    #[serde(default)]
    pub disable_keepalive: bool,

    /// Prevent sending the "Accept-Encoding: gzip" header
    #[serde(default)]
    pub compress: bool,

    /// Load the request payload from a file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_concurrency() -> u32 {
    10
}
fn default_duration_secs() -> u64 {
    10
}
fn default_request_timeout_ms() -> u64 {
    1000
}
fn default_method() -> String {
    "GET".to_string()
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            duration_secs: default_duration_secs(),
            request_timeout_ms: default_request_timeout_ms(),
            method: default_method(),
            headers: String::new(),
            disable_keepalive: false,
            compress: false,
            data_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_validate() {
        let cfg = ClientConfig::new("http://127.0.0.1:2379", Duration::from_secs(2));
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.timeout(), Duration::from_secs(2));

        let empty = ClientConfig::new("", Duration::from_secs(2));
        assert!(empty.validate().is_err());

        let zero = ClientConfig::new("http://127.0.0.1:2379", Duration::ZERO);
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_client_config_default_timeout() {
        let cfg: ClientConfig =
            serde_json::from_str(r#"{"endpoint":"http://127.0.0.1:2379"}"#).unwrap();
        assert_eq!(cfg.timeout_ms, 2000);
    }

    #[test]
    fn test_bench_config_roundtrip() {
        let cfg = BenchConfig {
            method: "POST".into(),
            headers: "X-Token: abc".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: BenchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_bench_config_defaults() {
        let cfg: BenchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.concurrency, 10);
        assert_eq!(cfg.duration_secs, 10);
        assert_eq!(cfg.request_timeout_ms, 1000);
        assert_eq!(cfg.method, "GET");
        assert!(!cfg.disable_keepalive);
        assert!(cfg.data_file.is_none());
    }
}
