//! HTTP client for the GraphQL endpoint
//!
//! Every administrative operation is a single POST of `{query, variables}` to
//! the platform's GraphQL endpoint, authenticated with a bearer token.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::{sync::RwLock, time::Duration};
use tracing::{debug, error, warn};

use crate::error::{ClientError, Result};
use crate::model::{GraphqlRequest, GraphqlResponse};

/// Configuration for the HTTP client
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// List of server addresses to connect to
    pub server_addrs: Vec<String>,
    /// API token sent as a bearer credential
    pub token: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
    /// GraphQL endpoint path (default: "/graphql")
    pub graphql_path: String,
}

impl Default for HttpClientConfig {
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

impl HttpClientConfig {
    /// Create a new config with a single server address
    pub fn new(server_addr: &str) -> Self {
        Self {
            server_addrs: vec![server_addr.to_string()],
            ..Default::default()
        }
    }

    /// Create a config with multiple server addresses
    pub fn with_servers(server_addrs: Vec<String>) -> Self {
        Self {
            server_addrs,
            ..Default::default()
        }
    }

    /// Set the API token
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = token.to_string();
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Set the GraphQL endpoint path
    pub fn with_graphql_path(mut self, path: &str) -> Self {
        self.graphql_path = path.to_string();
        self
    }
}

/// GraphQL client with token authentication and failover support
pub struct GraphqlHttpClient {
    client: Client,
    config: HttpClientConfig,
    current_server_index: RwLock<usize>,
}

impl GraphqlHttpClient {
    /// Create a new HTTP client
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        if config.server_addrs.is_empty() {
            return Err(ClientError::InvalidConfig(
                "at least one server address is required".to_string(),
            ));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            config,
            current_server_index: RwLock::new(0),
        })
    }

    /// Get the current server URL
    fn current_server(&self) -> String {
        let index = *self
            .current_server_index
            .read()
            .unwrap_or_else(|e| e.into_inner());
        self.config.server_addrs[index].clone()
    }

    /// Switch to the next server (for failover)
    fn switch_to_next_server(&self) {
        let mut index = self
            .current_server_index
            .write()
            .unwrap_or_else(|e| e.into_inner());
        *index = (*index + 1) % self.config.server_addrs.len();
        debug!("Switched to server index: {}", *index);
    }

    /// Build the endpoint URL for the current server
    fn build_url(&self) -> String {
        let base_url = self.current_server();
        let path = self.config.graphql_path.trim_start_matches('/');
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    }

    /// Execute a GraphQL document and decode its `data` member.
    ///
    /// Only connection failures move on to the next address: such a request
    /// never reached a server, so resending it cannot apply a mutation twice.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: &Map<String, Value>,
    ) -> Result<T> {
        let max_attempts = self.config.server_addrs.len();
        let mut last_error = None;
        let body = GraphqlRequest {
            query: document,
            variables,
        };

        for _ in 0..max_attempts {
            let url = self.build_url();
            debug!("Sending GraphQL request to {}", url);

            let mut request = self.client.post(&url).json(&body);
            if !self.config.token.is_empty() {
                request = request.bearer_auth(&self.config.token);
            }

            match request.send().await {
                Ok(response) => return self.handle_response(response).await,
                Err(e) if e.is_connect() => {
                    warn!("Request failed: {}, switching to next server", e);
                    self.switch_to_next_server();
                    last_error = Some(e.into());
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(last_error.unwrap_or(ClientError::AllServersFailed))
    }

    /// Handle response and unwrap the GraphQL envelope
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let envelope: GraphqlResponse<T> = serde_json::from_slice(&bytes)?;

        if !envelope.errors.is_empty() {
            debug!("GraphQL returned {} error(s)", envelope.errors.len());
            return Err(ClientError::Graphql(envelope.errors));
        }

        envelope.data.ok_or(ClientError::MissingData)
    }
}
