use arbor_model::{Folder, OrgId};

/// Read-only hierarchy lookups over a folder collection.
pub trait HierarchyQuery {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every folder owned by `org_id`, in collection order. Never fails; an
    /// unknown organization yields an empty vector.
    fn folders_by_org(&self, org_id: OrgId) -> Vec<Folder>;

    /// Every strict descendant of the folder named `name` in `org_id`,
    /// excluding that folder itself.
    fn children_of(
        &self,
        org_id: OrgId,
        name: &str,
    ) -> Result<Vec<Folder>, Self::Error>;
}

/// Relocation of a folder and its whole subtree below a new parent.
pub trait SubtreeMover {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Move `name` below `destination`, resolving both by name across all
    /// organizations. Returns the full collection after the move.
    fn move_folder(
        &self,
        name: &str,
        destination: &str,
    ) -> Result<Vec<Folder>, Self::Error>;

    /// Like [`SubtreeMover::move_folder`], but both names are resolved only
    /// among the folders of `org_id`.
    fn move_within_org(
        &self,
        org_id: OrgId,
        name: &str,
        destination: &str,
    ) -> Result<Vec<Folder>, Self::Error>;
}
