// Model types for repository management

pub mod group;
pub mod repository;

pub use group::DefaultGroup;
pub use repository::{Repository, RepositoryListItem};
