use arbor_model::{Folder, FolderPath, OrgId};

/// Read-only view over anything that carries a folder's identity and position.
pub trait FolderLike {
    /// The folder's own name, the last segment of a well-formed path.
    fn name(&self) -> &str;

    /// Materialized path from the organization root down to this folder.
    fn path(&self) -> &FolderPath;

    /// Organization owning this folder and its whole subtree.
    fn org_id(&self) -> OrgId;

    fn is_root(&self) -> bool {
        self.path().is_root()
    }

    /// True when `self` is `other` or lies below it in the same organization.
    fn is_within(&self, other: &impl FolderLike) -> bool {
        self.org_id() == other.org_id() && other.path().contains(self.path())
    }

    /// True when `self` lies strictly below `other` in the same organization.
    fn is_descendant_of(&self, other: &impl FolderLike) -> bool {
        self.org_id() == other.org_id()
            && other.path().is_ancestor_of(self.path())
    }
}

impl FolderLike for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &FolderPath {
        &self.path
    }

    fn org_id(&self) -> OrgId {
        self.org_id
    }
}

impl<T: FolderLike + ?Sized> FolderLike for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn path(&self) -> &FolderPath {
        (**self).path()
    }

    fn org_id(&self) -> OrgId {
        (**self).org_id()
    }
}
