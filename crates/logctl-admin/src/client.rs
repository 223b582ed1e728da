// AdminClient - facade for repository management

use std::sync::Arc;

use logctl_client::{GraphqlHttpClient, HttpClientConfig};

use crate::{
    binder::CallBinder, config::AdminClientConfig, lifecycle::Repositories, transport::Transport,
    viewer::Viewer,
};

/// Entry point for administrative operations over one transport
#[derive(Clone)]
pub struct AdminClient {
    binder: CallBinder,
}

impl AdminClient {
    /// Create a new AdminClient backed by the GraphQL HTTP transport
    pub fn new(config: AdminClientConfig) -> anyhow::Result<Self> {
        let http_config = HttpClientConfig::with_servers(config.server_addrs)
            .with_token(&config.token)
            .with_timeouts(config.connect_timeout_ms, config.read_timeout_ms)
            .with_graphql_path(&config.graphql_path);

        let http_client = GraphqlHttpClient::new(http_config)?;
        Ok(Self::with_transport(Arc::new(http_client)))
    }

    /// Create a new AdminClient from a single server address
    pub fn from_server_addr(addr: &str, token: &str) -> anyhow::Result<Self> {
        let config = AdminClientConfig {
            server_addrs: vec![addr.to_string()],
            token: token.to_string(),
            ..Default::default()
        };
        Self::new(config)
    }

    /// Create an AdminClient over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            binder: CallBinder::new(transport),
        }
    }

    pub fn repositories(&self) -> Repositories {
        Repositories::new(self.binder.clone())
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::new(self.binder.clone())
    }
}
