//! logctl-admin - repository retention and lifecycle management
//!
//! This crate provides:
//! - A typed call binder over an injected GraphQL transport
//! - Fresh repository snapshots read before every lifecycle decision
//! - The retention policy guard that blocks silent data loss
//! - Repository lifecycle operations (create, delete, describe, retention, membership)

pub mod binder;
pub mod client;
pub mod config;
pub mod documents;
pub mod error;
pub mod guard;
pub mod lifecycle;
pub mod model;
pub mod snapshot;
pub mod transport;
pub mod viewer;

pub use binder::{CallBinder, Nullable, Operation, OperationKind, Variables};
pub use client::AdminClient;
pub use config::AdminClientConfig;
pub use error::{AdminError, Result};
pub use guard::{
    DeletionDecision, GuardedAction, RetentionDecision, RetentionDimension, evaluate_deletion,
    evaluate_retention,
};
pub use lifecycle::Repositories;
pub use model::{DefaultGroup, Repository, RepositoryListItem};
pub use snapshot::SnapshotReader;
pub use transport::Transport;
pub use viewer::Viewer;
