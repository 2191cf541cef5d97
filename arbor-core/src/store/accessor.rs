use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use arbor_contracts::hierarchy::{HierarchyQuery, SubtreeMover};
use arbor_model::{Folder, OrgId};

use super::{FolderSnapshot, SharedFolders, commit_move, snapshot};
use crate::error::{HierarchyError, Result};
use crate::mover::MoveScope;

/// Marker types for capability roles
#[derive(Debug, Clone, Copy)]
pub struct ReadOnly;
#[derive(Debug, Clone, Copy)]
pub struct ReadWrite;

/// Role traits for capability gating
pub trait ReadCap {}
pub trait WriteCap: ReadCap {}

impl ReadCap for ReadOnly {}
impl ReadCap for ReadWrite {}
impl WriteCap for ReadWrite {}

/// Shareable handle onto a [`FolderStore`](super::FolderStore) whose
/// available operations depend on its role.
pub struct Accessor<R> {
    folders: SharedFolders,
    _role: PhantomData<R>,
}

impl<R> Accessor<R> {
    pub(crate) fn new(folders: SharedFolders) -> Self {
        Self {
            folders,
            _role: PhantomData,
        }
    }
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.folders))
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("role", &std::any::type_name::<R>())
            .field("len", &self.folders.read().len())
            .finish()
    }
}

// -------------------------
// Read-only API
// -------------------------
impl<R: ReadCap> Accessor<R> {
    pub fn snapshot(&self) -> FolderSnapshot {
        snapshot(&self.folders)
    }

    pub fn folders_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        self.snapshot().folders_by_org(org_id)
    }

    pub fn children_of(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>> {
        self.snapshot().children_of(org_id, name)
    }

    /// Narrow this handle to read-only access.
    pub fn read_only(&self) -> Accessor<ReadOnly> {
        Accessor::new(Arc::clone(&self.folders))
    }
}

// -------------------------
// Write API
// -------------------------
impl<R: WriteCap> Accessor<R> {
    pub fn move_folder(&self, name: &str, destination: &str) -> Result<Vec<Folder>> {
        commit_move(&self.folders, name, destination, MoveScope::Global)
    }

    pub fn move_within_org(
        &self,
        org_id: OrgId,
        name: &str,
        destination: &str,
    ) -> Result<Vec<Folder>> {
        commit_move(&self.folders, name, destination, MoveScope::Org(org_id))
    }
}

impl<R: ReadCap> HierarchyQuery for Accessor<R> {
    type Error = HierarchyError;

    fn folders_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        Accessor::folders_by_org(self, org_id)
    }

    fn children_of(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>> {
        Accessor::children_of(self, org_id, name)
    }
}

impl<R: WriteCap> SubtreeMover for Accessor<R> {
    type Error = HierarchyError;

    fn move_folder(&self, name: &str, destination: &str) -> Result<Vec<Folder>> {
        Accessor::move_folder(self, name, destination)
    }

    fn move_within_org(
        &self,
        org_id: OrgId,
        name: &str,
        destination: &str,
    ) -> Result<Vec<Folder>> {
        Accessor::move_within_org(self, org_id, name, destination)
    }
}
