//! Core data model definitions shared across Arbor crates.
#![allow(missing_docs)]

pub mod error;
pub mod folder;
pub mod ids;
pub mod path;

pub use error::{ModelError, Result as ModelResult};
pub use folder::Folder;
pub use ids::OrgId;
pub use path::{FolderPath, PathError, SEPARATOR};
