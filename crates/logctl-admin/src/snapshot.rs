// Repository snapshot reader
//
// Snapshots are read fresh on every call and never cached; the guard must not
// decide from stale state.

use logctl_client::ClientError;
use serde::Deserialize;

use crate::{
    binder::{CallBinder, Variables},
    documents,
    error::{AdminError, Result},
    model::{Repository, RepositoryListItem},
};

/// Reads current repository state from the remote
#[derive(Clone)]
pub struct SnapshotReader {
    binder: CallBinder,
}

impl SnapshotReader {
    pub fn new(binder: CallBinder) -> Self {
        Self { binder }
    }

    /// Fetch a repository by exact name.
    ///
    /// Any failure is reported as [`AdminError::Lookup`]: the remote's
    /// "not found" is not reliably distinguishable from other failures.
    pub async fn get(&self, name: &str) -> Result<Repository> {
        #[derive(Deserialize)]
        struct Data {
            repository: Option<Repository>,
        }

        let data: Data = self
            .binder
            .query(&documents::REPOSITORY, Variables::new().with("name", name))
            .await
            .map_err(|source| AdminError::Lookup {
                name: name.to_string(),
                source,
            })?;

        data.repository.ok_or_else(|| AdminError::Lookup {
            name: name.to_string(),
            source: ClientError::MissingData,
        })
    }

    /// Fetch every repository visible to the token in use
    pub async fn list(&self) -> Result<Vec<RepositoryListItem>> {
        #[derive(Deserialize)]
        struct Data {
            repositories: Vec<RepositoryListItem>,
        }

        let data: Data = self
            .binder
            .query(&documents::REPOSITORIES, Variables::new())
            .await?;
        Ok(data.repositories)
    }
}
