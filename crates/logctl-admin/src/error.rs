// Error types for repository management

use logctl_client::ClientError;

use crate::guard::GuardedAction;

/// Appended when a repository name does not resolve
pub const LOOKUP_HINT: &str = "Does the repository exist?";

/// Appended when creating a repository fails; the remote message alone does
/// not say whether the name is taken
pub const CREATE_HINT: &str = "Does the repository already exist?";

/// Errors that can occur during repository management operations
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error(transparent)]
    Transport(#[from] ClientError),

    #[error("{source}. {hint}")]
    Hinted {
        source: ClientError,
        hint: &'static str,
    },

    #[error("repository '{name}' could not be resolved: {source}. {}", LOOKUP_HINT)]
    Lookup { name: String, source: ClientError },

    #[error("invalid argument: {0}")]
    Validation(String),

    #[error("repository '{name}' contains data and data deletion not allowed ({action})")]
    RetentionGuardRejection { name: String, action: GuardedAction },
}

impl AdminError {
    pub fn is_guard_rejection(&self) -> bool {
        matches!(self, AdminError::RetentionGuardRejection { .. })
    }

    /// True for any failed read of a repository, outages and auth failures
    /// included. Inspect [`AdminError::transport_error`] to tell a missing
    /// repository apart from an unreachable server.
    pub fn is_lookup(&self) -> bool {
        matches!(self, AdminError::Lookup { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AdminError::Validation(_))
    }

    /// Hint appended to an ambiguous remote failure, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AdminError::Hinted { hint, .. } => Some(*hint),
            AdminError::Lookup { .. } => Some(LOOKUP_HINT),
            _ => None,
        }
    }

    /// The underlying transport failure, if the error came from a round trip
    pub fn transport_error(&self) -> Option<&ClientError> {
        match self {
            AdminError::Transport(source)
            | AdminError::Hinted { source, .. }
            | AdminError::Lookup { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
