// Repository model types

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// Live snapshot of a repository.
///
/// Retention fields use `0` for "not configured"; the remote reports those as
/// `null`, which decodes to `0`.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: String,
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "timeBasedRetention", default)]
    pub retention_days: f64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "ingestSizeBasedRetention", default)]
    pub ingest_retention_size_gb: f64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "storageSizeBasedRetention", default)]
    pub storage_retention_size_gb: f64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "compressedByteSize", default)]
    pub space_used_bytes: u64,
}

impl Repository {
    /// Whether the repository currently stores any data
    pub fn holds_data(&self) -> bool {
        self.space_used_bytes != 0
    }
}

/// Repository entry returned by the listing query
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryListItem {
    pub id: String,
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "compressedByteSize", default)]
    pub space_used_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_deserialization() {
        let json = r#"{
            "id": "abc123",
            "name": "logs",
            "description": "application logs",
            "timeBasedRetention": 30.0,
            "ingestSizeBasedRetention": 100.5,
            "storageSizeBasedRetention": 20,
            "compressedByteSize": 500
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, "abc123");
        assert_eq!(repo.name, "logs");
        assert_eq!(repo.description, "application logs");
        assert_eq!(repo.retention_days, 30.0);
        assert_eq!(repo.ingest_retention_size_gb, 100.5);
        assert_eq!(repo.storage_retention_size_gb, 20.0);
        assert_eq!(repo.space_used_bytes, 500);
        assert!(repo.holds_data());
    }

    #[test]
    fn test_unset_retention_decodes_to_zero() {
        let json = r#"{
            "id": "e1",
            "name": "empty",
            "description": null,
            "timeBasedRetention": null,
            "ingestSizeBasedRetention": null,
            "storageSizeBasedRetention": null,
            "compressedByteSize": 0
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.description, "");
        assert_eq!(repo.retention_days, 0.0);
        assert_eq!(repo.ingest_retention_size_gb, 0.0);
        assert_eq!(repo.storage_retention_size_gb, 0.0);
        assert!(!repo.holds_data());
    }

    #[test]
    fn test_repository_serializes_remote_field_names() {
        let repo = Repository {
            id: "1".to_string(),
            name: "logs".to_string(),
            retention_days: 7.0,
            space_used_bytes: 42,
            ..Default::default()
        };

        let json = serde_json::to_string(&repo).unwrap();
        assert!(json.contains("\"timeBasedRetention\":7.0"));
        assert!(json.contains("\"compressedByteSize\":42"));
    }

    #[test]
    fn test_list_item_deserialization() {
        let json = r#"[{"id":"1","name":"logs","compressedByteSize":500},{"id":"2","name":"empty"}]"#;
        let items: Vec<RepositoryListItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].space_used_bytes, 500);
        assert_eq!(items[1].name, "empty");
        assert_eq!(items[1].space_used_bytes, 0);
    }
}
