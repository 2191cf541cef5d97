//! Opt-in structural checks for a folder collection.
//!
//! Queries and moves never call these; they assume a well-formed input.
//! [`FolderStore::try_new`](crate::store::FolderStore::try_new) runs
//! [`validate`] for callers that want loading to fail fast instead.

use std::collections::HashSet;

use arbor_model::{Folder, FolderPath, OrgId};

use crate::error::{HierarchyError, Result};

/// Check every folder, in collection order, for:
/// - a path whose final segment is the folder's name,
/// - a name not already used in the same organization,
/// - a parent path present in the same organization (non-roots only).
pub fn validate(folders: &[Folder]) -> Result<()> {
    let mut names: HashSet<(OrgId, &str)> = HashSet::with_capacity(folders.len());
    let paths: HashSet<(OrgId, &FolderPath)> = folders
        .iter()
        .map(|folder| (folder.org_id, &folder.path))
        .collect();

    for folder in folders {
        if !folder.is_consistent() {
            return Err(HierarchyError::InvalidPath {
                name: folder.name.clone(),
                path: folder.path.to_string(),
                reason: format!(
                    "path ends with '{}' instead of the folder name",
                    folder.path.name()
                ),
            });
        }

        if !names.insert((folder.org_id, folder.name.as_str())) {
            return Err(HierarchyError::DuplicateName {
                name: folder.name.clone(),
                org_id: folder.org_id,
            });
        }

        if let Some(parent) = folder.path.parent()
            && !paths.contains(&(folder.org_id, &parent))
        {
            return Err(HierarchyError::OrphanedFolder {
                name: folder.name.clone(),
                path: folder.path.to_string(),
            });
        }
    }

    Ok(())
}
