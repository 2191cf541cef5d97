//! Trait surfaces that describe interactions with Arbor data models.

pub mod folder_like;
pub mod hierarchy;

/// Frequently used traits for store implementations and their callers.
pub mod prelude {
    pub use super::folder_like::FolderLike;
    pub use super::hierarchy::{HierarchyQuery, SubtreeMover};
}
