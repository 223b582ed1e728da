//! logctl-client - GraphQL transport for the log platform administrative API
//!
//! This crate provides:
//! - HTTP client with bearer-token authentication and failover across addresses
//! - GraphQL request/response envelope types
//! - Transport error types

pub mod error;
pub mod http;
pub mod model;

pub use error::{ClientError, Result};
pub use http::{GraphqlHttpClient, HttpClientConfig};
pub use model::{GraphqlError, GraphqlRequest, GraphqlResponse};
