//! Development proxy configuration.

use serde::{Deserialize, Serialize};

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_backend() -> String {
    "http://localhost:8080".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProxyConfig {
    /// Address the development proxy binds to.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Backend origin that `/api/*` requests are forwarded to.
    #[serde(default = "default_backend")]
    pub backend: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            backend: default_backend(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ProxyConfig::default();
        assert_eq!(config.listen, "127.0.0.1:3000");
        assert_eq!(config.backend, "http://localhost:8080");
    }
}
