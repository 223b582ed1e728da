// Transport abstraction used by the call binder

use async_trait::async_trait;
use logctl_client::{ClientError, GraphqlHttpClient};
use serde_json::Value;

use crate::binder::{Operation, Variables};

/// Performs one GraphQL round trip and returns the `data` payload.
///
/// Authentication, connection reuse, timeouts and any network-level retry are
/// the implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        operation: &Operation,
        variables: &Variables,
    ) -> Result<Value, ClientError>;
}

#[async_trait]
impl Transport for GraphqlHttpClient {
    async fn execute(
        &self,
        operation: &Operation,
        variables: &Variables,
    ) -> Result<Value, ClientError> {
        GraphqlHttpClient::execute::<Value>(self, operation.document, variables.as_map()).await
    }
}
