// Configuration for AdminClient

use serde::Deserialize;

/// Configuration for the administrative client
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AdminClientConfig {
    /// Server addresses (e.g. ["http://127.0.0.1:8080"])
    pub server_addrs: Vec<String>,
    /// API token
    pub token: String,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
    /// GraphQL endpoint path (default: "/graphql")
    pub graphql_path: String,
}

impl Default for AdminClientConfig {
    fn default() -> Self {
        Self {
            server_addrs: vec!["http://127.0.0.1:8080".to_string()],
            token: String::new(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            graphql_path: "/graphql".to_string(),
        }
    }
}
