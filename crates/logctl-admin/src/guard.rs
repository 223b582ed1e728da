//! Retention policy guard
//!
//! The remote platform applies a tightened retention window or an outright
//! delete without complaint, so the decision to risk data happens here, before
//! the request is sent. Every evaluation is stateless: it compares a proposal
//! against the snapshot it is given and nothing else.
//!
//! Retention rule, shared by all three dimensions:
//!
//! - `proposed <= 0` clears the ceiling and is always approved.
//! - `proposed > 0` narrows when `proposed < current` or `current == 0`. A
//!   narrowing proposal on a repository that holds data is rejected unless
//!   data deletion is explicitly allowed.
//!
//! Deletion is approved only with the override or when the repository is empty.

use crate::binder::{Nullable, Operation};
use crate::documents;
use crate::model::Repository;

/// A retention ceiling configured on a repository
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RetentionDimension {
    /// Age of events, in days
    Time,
    /// Compressed bytes stored, in GB
    StorageSize,
    /// Uncompressed bytes ingested, in GB
    IngestSize,
}

impl RetentionDimension {
    pub const ALL: [RetentionDimension; 3] = [
        RetentionDimension::Time,
        RetentionDimension::StorageSize,
        RetentionDimension::IngestSize,
    ];

    /// Currently configured ceiling (`0` when unset)
    pub fn current(self, repository: &Repository) -> f64 {
        match self {
            RetentionDimension::Time => repository.retention_days,
            RetentionDimension::StorageSize => repository.storage_retention_size_gb,
            RetentionDimension::IngestSize => repository.ingest_retention_size_gb,
        }
    }

    /// Name of the nullable argument in the update document
    pub fn variable(self) -> &'static str {
        match self {
            RetentionDimension::Time => "retentionInDays",
            RetentionDimension::StorageSize => "storageInGB",
            RetentionDimension::IngestSize => "ingestInGB",
        }
    }

    pub fn operation(self) -> &'static Operation {
        match self {
            RetentionDimension::Time => &documents::UPDATE_TIME_BASED_RETENTION,
            RetentionDimension::StorageSize => &documents::UPDATE_STORAGE_BASED_RETENTION,
            RetentionDimension::IngestSize => &documents::UPDATE_INGEST_BASED_RETENTION,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            RetentionDimension::Time => "days",
            RetentionDimension::StorageSize | RetentionDimension::IngestSize => "GB",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RetentionDimension::Time => "time-based retention",
            RetentionDimension::StorageSize => "storage-size-based retention",
            RetentionDimension::IngestSize => "ingest-size-based retention",
        }
    }
}

impl std::fmt::Display for RetentionDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The change a guard rejection refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardedAction {
    Deletion,
    Retention(RetentionDimension),
}

impl std::fmt::Display for GuardedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardedAction::Deletion => write!(f, "repository deletion"),
            GuardedAction::Retention(dimension) => write!(f, "{}", dimension),
        }
    }
}

/// Outcome of evaluating a retention proposal
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RetentionDecision {
    /// Remove the ceiling; sent as an absent argument
    Clear,
    /// Apply the ceiling as given
    Set(f64),
    Rejected,
}

impl RetentionDecision {
    pub fn is_approved(&self) -> bool {
        !matches!(self, RetentionDecision::Rejected)
    }

    /// The argument to send, or `None` when nothing may be sent
    pub fn argument(self) -> Option<Nullable<f64>> {
        match self {
            RetentionDecision::Clear => Some(Nullable::Absent),
            RetentionDecision::Set(value) => Some(Nullable::Present(value)),
            RetentionDecision::Rejected => None,
        }
    }
}

/// Outcome of evaluating a deletion request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletionDecision {
    Approved,
    Rejected,
}

/// Decide whether a retention ceiling may change from `current` to `proposed`.
///
/// `current == 0` means no ceiling is configured, so introducing any positive
/// ceiling counts as narrowing.
pub fn evaluate_retention(
    current: f64,
    proposed: f64,
    space_used_bytes: u64,
    allow_data_deletion: bool,
) -> RetentionDecision {
    if proposed <= 0.0 {
        return RetentionDecision::Clear;
    }

    let narrowing = proposed < current || current == 0.0;
    if narrowing && space_used_bytes != 0 && !allow_data_deletion {
        RetentionDecision::Rejected
    } else {
        RetentionDecision::Set(proposed)
    }
}

/// Decide whether a repository may be deleted
pub fn evaluate_deletion(space_used_bytes: u64, allow_data_deletion: bool) -> DeletionDecision {
    if allow_data_deletion || space_used_bytes == 0 {
        DeletionDecision::Approved
    } else {
        DeletionDecision::Rejected
    }
}
