pub mod defaults;
pub mod repo;
pub mod repo_types;

pub use repo::ContentStore;
pub use repo_types::{ContactInfo, PhotoSet, PhotoSlot, Project, ProjectId, Theme};
