//! # Arbor Core
//!
//! Path-based hierarchy engine for organization-scoped folder collections.
//!
//! ## Overview
//!
//! Folders live in a flat collection and carry a materialized path such as
//! `alpha.bravo.charlie`. `arbor-core` offers:
//!
//! - **Store**: [`FolderStore`] owns the collection and hands out immutable
//!   [`FolderSnapshot`]s and capability-gated [`Accessor`] handles
//! - **Queries**: folders by organization and descendants of a named folder
//! - **Moves**: validated relocation of a folder and its whole subtree
//! - **Validation**: opt-in structural checks for loaded collections
//! - **Sample data**: a seeded random forest generator and JSON import/export
//!
//! ## Examples
//!
//! ```
//! use arbor_core::{FolderStore, sample};
//! use arbor_model::OrgId;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let org = OrgId::new();
//! let store = FolderStore::new(sample::fixture(org)?);
//!
//! let below_alpha = store.children_of(org, "alpha")?;
//! assert_eq!(below_alpha.len(), 3);
//!
//! let moved = store.move_folder("bravo", "delta")?;
//! assert_eq!(moved[1].path, "alpha.delta.bravo");
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]

/// Error kinds for hierarchy operations and data import/export
pub mod error;

/// Subtree move validation and path rewriting
pub mod mover;

/// Read-only hierarchy lookups
pub mod query;

/// Sample data generation and JSON import/export
pub mod sample;

/// Folder collection ownership, snapshots and accessors
pub mod store;

/// Structural checks for folder collections
pub mod validation;

pub use error::{DataError, ErrorKind, HierarchyError, Result};
pub use mover::{MovePlan, MoveScope};
pub use store::{Accessor, FolderSnapshot, FolderStore, ReadOnly, ReadWrite};

pub use arbor_model::{Folder, FolderPath, OrgId};
