//! Repository lifecycle operations
//!
//! Guarded operations read a fresh snapshot, ask the guard, and only then send
//! the mutation. Snapshot and mutation are separate round trips: a concurrent
//! change that lands between them is not detected.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    binder::{CallBinder, Variables},
    documents,
    error::{AdminError, CREATE_HINT, Result},
    guard::{
        DeletionDecision, GuardedAction, RetentionDecision, RetentionDimension, evaluate_deletion,
        evaluate_retention,
    },
    model::{DefaultGroup, Repository, RepositoryListItem},
    snapshot::SnapshotReader,
};

/// Repository management operations
#[derive(Clone)]
pub struct Repositories {
    binder: CallBinder,
    snapshots: SnapshotReader,
}

impl Repositories {
    pub fn new(binder: CallBinder) -> Self {
        let snapshots = SnapshotReader::new(binder.clone());
        Self { binder, snapshots }
    }

    pub async fn get(&self, name: &str) -> Result<Repository> {
        self.snapshots.get(name).await
    }

    pub async fn list(&self) -> Result<Vec<RepositoryListItem>> {
        self.snapshots.list().await
    }

    pub async fn create(&self, name: &str) -> Result<Repository> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            create_repository: Created,
        }

        #[derive(Deserialize)]
        struct Created {
            repository: Repository,
        }

        let data: Data = self
            .binder
            .mutate(
                &documents::CREATE_REPOSITORY,
                Variables::new().with("name", name),
            )
            .await
            .map_err(|source| AdminError::Hinted {
                source,
                hint: CREATE_HINT,
            })?;

        info!(repository = name, "created repository");
        Ok(data.create_repository.repository)
    }

    /// Delete a repository; `reason` is recorded remotely for audit
    pub async fn delete(&self, name: &str, reason: &str, allow_data_deletion: bool) -> Result<()> {
        let existing = self.snapshots.get(name).await?;

        if evaluate_deletion(existing.space_used_bytes, allow_data_deletion)
            == DeletionDecision::Rejected
        {
            warn!(
                repository = name,
                space_used_bytes = existing.space_used_bytes,
                "refusing to delete repository that contains data"
            );
            return Err(AdminError::RetentionGuardRejection {
                name: name.to_string(),
                action: GuardedAction::Deletion,
            });
        }

        let _: Value = self
            .binder
            .mutate(
                &documents::DELETE_REPOSITORY,
                Variables::new().with("name", name).with("reason", reason),
            )
            .await?;

        info!(repository = name, reason, "deleted repository");
        Ok(())
    }

    pub async fn update_description(&self, name: &str, description: &str) -> Result<()> {
        let _: Value = self
            .binder
            .mutate(
                &documents::UPDATE_DESCRIPTION,
                Variables::new()
                    .with("name", name)
                    .with("description", description),
            )
            .await?;
        Ok(())
    }

    /// Change one retention ceiling.
    ///
    /// A `value <= 0` clears the ceiling. Values must be finite.
    pub async fn update_retention(
        &self,
        name: &str,
        dimension: RetentionDimension,
        value: f64,
        allow_data_deletion: bool,
    ) -> Result<()> {
        if !value.is_finite() {
            return Err(AdminError::Validation(format!(
                "{} must be a finite number, got {}",
                dimension, value
            )));
        }

        let existing = self.snapshots.get(name).await?;
        let current = dimension.current(&existing);
        let decision = evaluate_retention(
            current,
            value,
            existing.space_used_bytes,
            allow_data_deletion,
        );

        let Some(argument) = decision.argument() else {
            warn!(
                repository = name,
                %dimension,
                current,
                proposed = value,
                space_used_bytes = existing.space_used_bytes,
                "refusing to narrow retention on repository that contains data"
            );
            return Err(AdminError::RetentionGuardRejection {
                name: name.to_string(),
                action: GuardedAction::Retention(dimension),
            });
        };

        debug!(
            repository = name,
            %dimension,
            current,
            proposed = value,
            clear = matches!(decision, RetentionDecision::Clear),
            "retention change approved"
        );

        let _: Value = self
            .binder
            .mutate(
                dimension.operation(),
                Variables::new()
                    .with("name", name)
                    .with(dimension.variable(), argument),
            )
            .await?;
        Ok(())
    }

    pub async fn update_time_based_retention(
        &self,
        name: &str,
        retention_in_days: f64,
        allow_data_deletion: bool,
    ) -> Result<()> {
        self.update_retention(
            name,
            RetentionDimension::Time,
            retention_in_days,
            allow_data_deletion,
        )
        .await
    }

    pub async fn update_storage_based_retention(
        &self,
        name: &str,
        storage_in_gb: f64,
        allow_data_deletion: bool,
    ) -> Result<()> {
        self.update_retention(
            name,
            RetentionDimension::StorageSize,
            storage_in_gb,
            allow_data_deletion,
        )
        .await
    }

    pub async fn update_ingest_based_retention(
        &self,
        name: &str,
        ingest_in_gb: f64,
        allow_data_deletion: bool,
    ) -> Result<()> {
        self.update_retention(
            name,
            RetentionDimension::IngestSize,
            ingest_in_gb,
            allow_data_deletion,
        )
        .await
    }

    /// Replace a user's default group memberships in a repository
    pub async fn update_user_group_membership(
        &self,
        name: &str,
        username: &str,
        groups: &[DefaultGroup],
    ) -> Result<()> {
        if groups.is_empty() {
            return Err(AdminError::Validation(
                "at least one group must be defined".to_string(),
            ));
        }

        let _: Value = self
            .binder
            .mutate(
                &documents::UPDATE_USER_GROUP,
                Variables::new()
                    .with("name", name)
                    .with("username", username)
                    .with("groups", groups.to_vec()),
            )
            .await?;
        Ok(())
    }
}
