use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_request_timeout_ms() -> u64 {
    8000
}

fn default_user_agent() -> String {
    concat!("kotoba/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Outbound HTTP settings shared by every provider client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Upper bound for a single upstream call
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self {
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", default_request_timeout_ms()),
            user_agent: std::env::var("USER_AGENT").unwrap_or_else(|_| default_user_agent()),
        }
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }
}
