//! Transport error types

use crate::model::GraphqlError;

/// Error type for a single GraphQL round trip
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("GraphQL error: {}", join_messages(.0))]
    Graphql(Vec<GraphqlError>),

    #[error("response contained no data")]
    MissingData,

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("All servers failed")]
    AllServersFailed,
}

impl ClientError {
    /// Messages reported by the remote GraphQL layer, if any
    pub fn graphql_messages(&self) -> Vec<&str> {
        match self {
            ClientError::Graphql(errors) => errors.iter().map(|e| e.message.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ClientError>;
