// GraphQL documents for the administrative API
//
// Variable names in each document are the names the binder must use.

use crate::binder::Operation;

// Viewer
pub const VIEWER: Operation = Operation::query("Viewer", "query Viewer { viewer { username } }");

// Repository reads
pub const REPOSITORY: Operation = Operation::query(
    "Repository",
    "query Repository($name: String!) { \
     repository(name: $name) { \
     id name description timeBasedRetention ingestSizeBasedRetention \
     storageSizeBasedRetention compressedByteSize } }",
);
pub const REPOSITORIES: Operation = Operation::query(
    "Repositories",
    "query Repositories { repositories { id name compressedByteSize } }",
);

// Repository lifecycle
pub const CREATE_REPOSITORY: Operation = Operation::mutation(
    "CreateRepository",
    "mutation CreateRepository($name: String!) { \
     createRepository(name: $name) { repository { \
     id name description timeBasedRetention ingestSizeBasedRetention \
     storageSizeBasedRetention compressedByteSize } } }",
);
pub const DELETE_REPOSITORY: Operation = Operation::mutation(
    "DeleteSearchDomain",
    "mutation DeleteSearchDomain($name: String!, $reason: String!) { \
     deleteSearchDomain(name: $name, deleteMessage: $reason) { clientMutationId } }",
);
pub const UPDATE_DESCRIPTION: Operation = Operation::mutation(
    "UpdateDescription",
    "mutation UpdateDescription($name: String!, $description: String!) { \
     updateDescriptionForSearchDomain(name: $name, newDescription: $description) { __typename } }",
);
pub const UPDATE_USER_GROUP: Operation = Operation::mutation(
    "UpdateDefaultGroupMemberships",
    "mutation UpdateDefaultGroupMemberships($name: String!, $username: String!, $groups: [DefaultGroupEnum!]!) { \
     updateDefaultGroupMemberships(input: {viewName: $name, userName: $username, groups: $groups}) { \
     clientMutationId } }",
);

// Retention, one document per dimension
pub const UPDATE_TIME_BASED_RETENTION: Operation = Operation::mutation(
    "UpdateTimeBasedRetention",
    "mutation UpdateTimeBasedRetention($name: String!, $retentionInDays: Float) { \
     updateRetention(repositoryName: $name, timeBasedRetention: $retentionInDays) { __typename } }",
);
pub const UPDATE_STORAGE_BASED_RETENTION: Operation = Operation::mutation(
    "UpdateStorageBasedRetention",
    "mutation UpdateStorageBasedRetention($name: String!, $storageInGB: Float) { \
     updateRetention(repositoryName: $name, storageSizeBasedRetention: $storageInGB) { __typename } }",
);
pub const UPDATE_INGEST_BASED_RETENTION: Operation = Operation::mutation(
    "UpdateIngestBasedRetention",
    "mutation UpdateIngestBasedRetention($name: String!, $ingestInGB: Float) { \
     updateRetention(repositoryName: $name, ingestSizeBasedRetention: $ingestInGB) { __typename } }",
);
