//! The folder collection and its ownership model.
//!
//! [`FolderStore`] keeps the collection as an immutable `Arc<[Folder]>`
//! behind a [`parking_lot::RwLock`]. Reads clone the `Arc` and release the
//! lock immediately; a move holds the write lock while it validates against
//! the current collection and swaps in the rewritten one. A reader therefore
//! observes either the collection before a move or the one after it, never a
//! partially rewritten mix.

mod accessor;

pub use accessor::{Accessor, ReadCap, ReadOnly, ReadWrite, WriteCap};

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use arbor_contracts::hierarchy::{HierarchyQuery, SubtreeMover};
use arbor_model::{Folder, OrgId};
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::error::{HierarchyError, Result};
use crate::mover::{MovePlan, MoveScope};
use crate::query;
use crate::validation;

pub(crate) type SharedFolders = Arc<RwLock<Arc<[Folder]>>>;

/// Immutable view of the collection at one point in time.
#[derive(Clone, PartialEq, Eq)]
pub struct FolderSnapshot(Arc<[Folder]>);

impl FolderSnapshot {
    pub fn folders_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        query::folders_by_org(&self.0, org_id)
    }

    pub fn children_of(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>> {
        query::children_of(&self.0, org_id, name)
    }

    pub fn to_vec(&self) -> Vec<Folder> {
        self.0.to_vec()
    }
}

impl Deref for FolderSnapshot {
    type Target = [Folder];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for FolderSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FolderSnapshot")
            .field("len", &self.0.len())
            .finish()
    }
}

impl HierarchyQuery for FolderSnapshot {
    type Error = HierarchyError;

    fn folders_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        FolderSnapshot::folders_by_org(self, org_id)
    }

    fn children_of(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>> {
        FolderSnapshot::children_of(self, org_id, name)
    }
}

/// Owner of a folder collection.
///
/// Queries and moves go through the store itself or through [`Accessor`]
/// handles cloned out of it; all of them share one collection.
pub struct FolderStore {
    folders: SharedFolders,
}

impl FolderStore {
    /// Take ownership of `folders` as-is. No structural validation runs; see
    /// [`FolderStore::try_new`] for that.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self {
            folders: Arc::new(RwLock::new(folders.into())),
        }
    }

    /// Take ownership of `folders` after checking paths, name uniqueness per
    /// organization and parent presence.
    pub fn try_new(folders: Vec<Folder>) -> Result<Self> {
        validation::validate(&folders)?;
        Ok(Self::new(folders))
    }

    pub fn snapshot(&self) -> FolderSnapshot {
        snapshot(&self.folders)
    }

    /// Owned copy of the current collection, in store order.
    pub fn folders(&self) -> Vec<Folder> {
        self.snapshot().to_vec()
    }

    pub fn len(&self) -> usize {
        self.folders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.read().is_empty()
    }

    pub fn folders_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        self.snapshot().folders_by_org(org_id)
    }

    pub fn children_of(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>> {
        self.snapshot().children_of(org_id, name)
    }

    /// Move `name` and its subtree below `destination`, resolving both names
    /// across every organization (first match in store order).
    pub fn move_folder(&self, name: &str, destination: &str) -> Result<Vec<Folder>> {
        commit_move(&self.folders, name, destination, MoveScope::Global)
    }

    /// Move `name` and its subtree below `destination`, resolving both names
    /// only among the folders of `org_id`.
    pub fn move_within_org(
        &self,
        org_id: OrgId,
        name: &str,
        destination: &str,
    ) -> Result<Vec<Folder>> {
        commit_move(&self.folders, name, destination, MoveScope::Org(org_id))
    }

    /// A handle that can only run queries.
    pub fn reader(&self) -> Accessor<ReadOnly> {
        Accessor::new(Arc::clone(&self.folders))
    }

    /// A handle that can run queries and moves.
    pub fn writer(&self) -> Accessor<ReadWrite> {
        Accessor::new(Arc::clone(&self.folders))
    }
}

impl From<Vec<Folder>> for FolderStore {
    fn from(folders: Vec<Folder>) -> Self {
        Self::new(folders)
    }
}

impl FromIterator<Folder> for FolderStore {
    fn from_iter<I: IntoIterator<Item = Folder>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for FolderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FolderStore")
            .field("len", &self.len())
            .finish()
    }
}

impl HierarchyQuery for FolderStore {
    type Error = HierarchyError;

    fn folders_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        FolderStore::folders_by_org(self, org_id)
    }

    fn children_of(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>> {
        FolderStore::children_of(self, org_id, name)
    }
}

impl SubtreeMover for FolderStore {
    type Error = HierarchyError;

    fn move_folder(&self, name: &str, destination: &str) -> Result<Vec<Folder>> {
        FolderStore::move_folder(self, name, destination)
    }

    fn move_within_org(
        &self,
        org_id: OrgId,
        name: &str,
        destination: &str,
    ) -> Result<Vec<Folder>> {
        FolderStore::move_within_org(self, org_id, name, destination)
    }
}

pub(crate) fn snapshot(folders: &SharedFolders) -> FolderSnapshot {
    FolderSnapshot(Arc::clone(&*folders.read()))
}

/// Validate and apply a move while holding the write lock, then publish the
/// rewritten collection. The lock serializes concurrent moves.
pub(crate) fn commit_move(
    folders: &SharedFolders,
    name: &str,
    destination: &str,
    scope: MoveScope,
) -> Result<Vec<Folder>> {
    let mut guard = folders.write();

    let plan = match MovePlan::resolve(&guard, name, destination, scope) {
        Ok(plan) => plan,
        Err(err) => {
            warn!(
                source_name = name,
                destination,
                ?scope,
                error = %err,
                "rejected folder move"
            );
            return Err(err);
        }
    };

    let (updated, rewritten) = plan.apply(&guard);
    let updated: Arc<[Folder]> = updated.into();
    *guard = Arc::clone(&updated);
    drop(guard);

    info!(
        source_name = %plan.source,
        destination = %plan.destination,
        org_id = %plan.org_id,
        from = %plan.old_prefix,
        to = %plan.new_prefix,
        rewritten,
        "moved folder subtree"
    );
    Ok(updated.to_vec())
}
