use std::{collections::BTreeMap, time::Duration};

use serde::{Deserialize, Serialize};

const DEFAULT_URL: &str = "http://localhost:8545";
const URL_ENV_VAR: &str = "ETH_RPC_URL";
const MAX_RETRIES_ENV_VAR: &str = "ETH_RPC_MAX_RETRIES";

// Retry parameters for transient transport failures.
const DEFAULT_MAX_RETRIES: u32 = 9;
const DEFAULT_MIN_RETRY_INTERVAL_SECS: u64 = 1;
const DEFAULT_MAX_RETRY_INTERVAL_SECS: u64 = 32;

/// Configuration of an [`RpcClient`](crate::RpcClient).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RpcClientConfig {
    /// URL of the remote node
    pub url: String,
    /// Maximum number of retries of a request that failed with a transient
    /// HTTP error
    pub max_retries: u32,
    /// Lower bound of the exponential backoff, in seconds
    pub min_retry_interval_secs: u64,
    /// Upper bound of the exponential backoff, in seconds
    pub max_retry_interval_secs: u64,
    /// Headers added to every request
    pub extra_headers: BTreeMap<String, String>,
}

impl RpcClientConfig {
    /// Constructs a configuration with default settings for the provided
    /// URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Reads the configuration from the `ETH_RPC_URL` and, optionally,
    /// `ETH_RPC_MAX_RETRIES` environment variables.
    ///
    /// Returns `None` if `ETH_RPC_URL` is not defined or empty, or if
    /// `ETH_RPC_MAX_RETRIES` is not a number.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var(URL_ENV_VAR)
            .ok()
            .filter(|url| !url.is_empty())?;

        let max_retries = match std::env::var(MAX_RETRIES_ENV_VAR) {
            Ok(max_retries) => max_retries.parse().ok()?,
            Err(_missing) => DEFAULT_MAX_RETRIES,
        };

        Some(Self {
            url,
            max_retries,
            ..Self::default()
        })
    }

    /// Lower bound of the exponential backoff
    pub fn min_retry_interval(&self) -> Duration {
        Duration::from_secs(self.min_retry_interval_secs)
    }

    /// Upper bound of the exponential backoff
    pub fn max_retry_interval(&self) -> Duration {
        Duration::from_secs(self.max_retry_interval_secs)
    }
}

impl Default for RpcClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_owned(),
            max_retries: DEFAULT_MAX_RETRIES,
            min_retry_interval_secs: DEFAULT_MIN_RETRY_INTERVAL_SECS,
            max_retry_interval_secs: DEFAULT_MAX_RETRY_INTERVAL_SECS,
            extra_headers: BTreeMap::new(),
        }
    }
}
