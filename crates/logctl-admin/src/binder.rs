//! Typed call binder
//!
//! Builds the named variable set for an operation, performs exactly one round
//! trip through the injected [`Transport`], and decodes the `data` payload into
//! the caller's result type. Errors are returned as the transport produced
//! them; adding context is the caller's job.

use std::sync::Arc;

use logctl_client::ClientError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::transport::Transport;

/// Whether an operation reads or writes remote state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Query => write!(f, "query"),
            OperationKind::Mutation => write!(f, "mutation"),
        }
    }
}

/// A named GraphQL document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub kind: OperationKind,
    pub document: &'static str,
}

impl Operation {
    pub const fn query(name: &'static str, document: &'static str) -> Self {
        Self {
            name,
            kind: OperationKind::Query,
            document,
        }
    }

    pub const fn mutation(name: &'static str, document: &'static str) -> Self {
        Self {
            name,
            kind: OperationKind::Mutation,
            document,
        }
    }
}

/// A nullable operation argument.
///
/// `Absent` is sent as an explicit `null` under its name. It is unrelated to
/// the `0` "unset" sentinel stored in repository retention fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nullable<T> {
    Absent,
    Present(T),
}

impl<T> Nullable<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Absent => None,
            Nullable::Present(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Nullable::Absent, Nullable::Present)
    }
}

impl<T: Into<Value>> From<Nullable<T>> for Value {
    fn from(value: Nullable<T>) -> Self {
        match value {
            Nullable::Absent => Value::Null,
            Nullable::Present(v) => v.into(),
        }
    }
}

/// Named operation arguments
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables {
    values: Map<String, Value>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument; the name must match the document's `$name` exactly
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

/// Dispatches typed calls through a shared transport
#[derive(Clone)]
pub struct CallBinder {
    transport: Arc<dyn Transport>,
}

impl CallBinder {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Run a read operation
    pub async fn query<R: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Variables,
    ) -> Result<R, ClientError> {
        debug_assert_eq!(operation.kind, OperationKind::Query);
        self.call(operation, variables).await
    }

    /// Run a write operation
    pub async fn mutate<R: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Variables,
    ) -> Result<R, ClientError> {
        debug_assert_eq!(operation.kind, OperationKind::Mutation);
        self.call(operation, variables).await
    }

    async fn call<R: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Variables,
    ) -> Result<R, ClientError> {
        debug!(
            operation = operation.name,
            kind = %operation.kind,
            variables = variables.len(),
            "dispatching GraphQL operation"
        );
        let data = self.transport.execute(operation, &variables).await?;
        Ok(serde_json::from_value(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde::Deserialize;
    use serde_json::json;

    struct CannedTransport {
        response: Value,
        calls: Mutex<Vec<(&'static str, Variables)>>,
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn execute(
            &self,
            operation: &Operation,
            variables: &Variables,
        ) -> Result<Value, ClientError> {
            self.calls
                .lock()
                .unwrap()
                .push((operation.name, variables.clone()));
            Ok(self.response.clone())
        }
    }

    const PING: Operation = Operation::query("Ping", "query Ping { ping }");

    #[test]
    fn test_nullable_to_value() {
        assert_eq!(Value::from(Nullable::<f64>::Absent), Value::Null);
        assert_eq!(Value::from(Nullable::Present(0.0)), json!(0.0));
        assert_eq!(Value::from(Nullable::Present(10.5)), json!(10.5));
    }

    #[test]
    fn test_nullable_from_option() {
        assert!(Nullable::<i32>::from(None).is_absent());
        assert_eq!(Nullable::from(Some(3)), Nullable::Present(3));
        assert_eq!(Nullable::Present(3).into_option(), Some(3));
    }

    #[test]
    fn test_absent_variable_is_present_as_null() {
        let vars = Variables::new()
            .with("name", "logs")
            .with("retentionInDays", Nullable::<f64>::Absent);

        assert_eq!(vars.len(), 2);
        assert!(vars.contains("retentionInDays"));
        assert_eq!(vars.get("retentionInDays"), Some(&Value::Null));
        assert_eq!(vars.get("name"), Some(&json!("logs")));
    }

    #[tokio::test]
    async fn test_binder_decodes_typed_result() {
        #[derive(Deserialize)]
        struct Data {
            ping: String,
        }

        let transport = Arc::new(CannedTransport {
            response: json!({ "ping": "pong" }),
            calls: Mutex::new(Vec::new()),
        });
        let binder = CallBinder::new(transport.clone());

        let data: Data = binder
            .query(&PING, Variables::new().with("x", 1))
            .await
            .unwrap();

        assert_eq!(data.ping, "pong");
        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Ping");
        assert_eq!(calls[0].1.get("x"), Some(&json!(1)));
    }

    #[tokio::test]
    async fn test_binder_reports_shape_mismatch_as_decode_error() {
        #[derive(Debug, Deserialize)]
        struct Data {
            #[allow(dead_code)]
            ping: u64,
        }

        let transport = Arc::new(CannedTransport {
            response: json!({ "ping": "not a number" }),
            calls: Mutex::new(Vec::new()),
        });
        let binder = CallBinder::new(transport);

        let err = binder
            .query::<Data>(&PING, Variables::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
