//! Read-only hierarchy lookups over a borrowed folder slice.
//!
//! These functions back every read path in the crate: [`FolderSnapshot`],
//! [`FolderStore`] and read accessors all resolve a slice first and then
//! call into here, so the lookup rules live in one place.
//!
//! [`FolderSnapshot`]: crate::store::FolderSnapshot
//! [`FolderStore`]: crate::store::FolderStore

use arbor_contracts::folder_like::FolderLike;
use arbor_model::{Folder, OrgId};
use tracing::{debug, warn};

use crate::error::{HierarchyError, Result};

/// Every folder owned by `org_id`, in collection order.
pub fn folders_by_org(folders: &[Folder], org_id: OrgId) -> Vec<Folder> {
    let matches: Vec<Folder> = folders
        .iter()
        .filter(|folder| folder.org_id == org_id)
        .cloned()
        .collect();

    debug!(%org_id, count = matches.len(), "resolved folders by organization");
    matches
}

/// Resolve the anchor folder named `name` inside `org_id`.
///
/// The first match in collection order wins. When no folder of that name
/// exists in the organization, the error distinguishes a name that exists
/// elsewhere ([`HierarchyError::OrgMismatch`]) from one that exists nowhere
/// ([`HierarchyError::NotFound`]).
pub fn find_anchor<'a>(
    folders: &'a [Folder],
    org_id: OrgId,
    name: &str,
) -> Result<&'a Folder> {
    if let Some(anchor) = folders
        .iter()
        .find(|folder| folder.org_id == org_id && folder.name == name)
    {
        return Ok(anchor);
    }

    if let Some(elsewhere) = folders.iter().find(|folder| folder.name == name) {
        warn!(
            folder = name,
            %org_id,
            found_in = %elsewhere.org_id,
            "folder exists but not in the requested organization"
        );
        return Err(HierarchyError::OrgMismatch {
            name: name.to_owned(),
            org_id,
        });
    }

    Err(HierarchyError::NotFound {
        name: name.to_owned(),
    })
}

/// Every strict descendant of the anchor `name` within `org_id`.
pub fn children_of(
    folders: &[Folder],
    org_id: OrgId,
    name: &str,
) -> Result<Vec<Folder>> {
    let anchor = find_anchor(folders, org_id, name)?;

    let descendants: Vec<Folder> = folders
        .iter()
        .filter(|folder| folder.is_descendant_of(anchor))
        .cloned()
        .collect();

    debug!(
        folder = name,
        %org_id,
        anchor_path = %anchor.path,
        count = descendants.len(),
        "resolved descendants"
    );
    Ok(descendants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn folder(name: &str, path: &str, org: OrgId) -> Folder {
        Folder::parse(name, path, org).unwrap()
    }

    #[test]
    fn anchor_is_first_match_in_org() {
        let org = OrgId::new();
        let folders = vec![
            folder("alpha", "alpha", org),
            folder("alpha", "echo.alpha", org),
        ];

        let anchor = find_anchor(&folders, org, "alpha").unwrap();
        assert_eq!(anchor.path, "alpha");
    }

    #[test]
    fn descendants_skip_prefix_siblings() {
        let org = OrgId::new();
        let folders = vec![
            folder("alpha", "alpha", org),
            folder("alphabet", "alphabet", org),
            folder("soup", "alphabet.soup", org),
            folder("bravo", "alpha.bravo", org),
        ];

        let names: Vec<String> = children_of(&folders, org, "alpha")
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["bravo".to_string()]);
    }

    #[test]
    fn descendants_stay_inside_the_organization() {
        let org = OrgId::new();
        let other = OrgId::new();
        let folders = vec![
            folder("alpha", "alpha", org),
            folder("bravo", "alpha.bravo", other),
        ];

        assert!(children_of(&folders, org, "alpha").unwrap().is_empty());
    }

    #[test]
    fn error_kinds_for_missing_anchor() {
        let org = OrgId::new();
        let other = OrgId::new();
        let folders = vec![folder("foxtrot", "foxtrot", other)];

        let err = children_of(&folders, org, "foxtrot").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OrgMismatch);

        let err = children_of(&folders, org, "invalid").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = children_of(&[], org, "anything").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
