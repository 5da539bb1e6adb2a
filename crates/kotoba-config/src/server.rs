use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self {
            bind_addr: env_or("KOTOBA_BIND", default_bind_addr()),
        }
    }
}
