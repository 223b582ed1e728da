// GraphQL envelope types

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body posted to the GraphQL endpoint
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub variables: &'a Map<String, Value>,
}

/// Response envelope returned by the GraphQL endpoint
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// A single entry of the `errors` array
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Value>,
}

impl fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        let path = self
            .path
            .iter()
            .map(|segment| match segment {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{} (at {})", self.message, path)
    }
}
