//! Subtree relocation.
//!
//! A move is split into [`MovePlan::resolve`], which runs every validation
//! against an unchanged collection, and [`MovePlan::apply`], which builds the
//! rewritten collection. Nothing is rewritten unless resolution succeeded.

use arbor_contracts::folder_like::FolderLike;
use arbor_model::{Folder, FolderPath, OrgId};

use crate::error::{HierarchyError, Result};

/// Which folders a move may resolve its source and destination among.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveScope {
    /// First folder with a matching name in any organization.
    Global,
    /// First folder with a matching name in this organization only.
    Org(OrgId),
}

impl MoveScope {
    fn admits(self, folder: &Folder) -> bool {
        match self {
            MoveScope::Global => true,
            MoveScope::Org(org_id) => folder.org_id == org_id,
        }
    }
}

/// A validated move: every path inside `old_prefix` in `org_id` is rebased
/// onto `new_prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub source: String,
    pub destination: String,
    pub org_id: OrgId,
    pub old_prefix: FolderPath,
    pub new_prefix: FolderPath,
}

impl MovePlan {
    /// Validate moving `name` below `destination`.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// same name, missing source, missing destination, organization
    /// mismatch, destination inside the source's subtree, and finally a
    /// source name that cannot be appended to the destination path
    /// ([`HierarchyError::InvalidPath`]).
    pub fn resolve(
        folders: &[Folder],
        name: &str,
        destination: &str,
        scope: MoveScope,
    ) -> Result<Self> {
        if name == destination {
            return Err(HierarchyError::SameFolder {
                name: name.to_owned(),
            });
        }

        let lookup = |wanted: &str| {
            folders
                .iter()
                .find(|folder| scope.admits(folder) && folder.name == wanted)
        };

        let source =
            lookup(name).ok_or_else(|| HierarchyError::SourceNotFound {
                name: name.to_owned(),
            })?;
        let target = lookup(destination).ok_or_else(|| {
            HierarchyError::DestinationNotFound {
                name: destination.to_owned(),
            }
        })?;

        if source.org_id != target.org_id {
            return Err(HierarchyError::CrossOrganization {
                source_name: source.name.clone(),
                source_org: source.org_id,
                destination: target.name.clone(),
                destination_org: target.org_id,
            });
        }

        if target.is_within(source) {
            return Err(HierarchyError::CyclicMove {
                source_name: source.name.clone(),
                destination: target.name.clone(),
            });
        }

        let new_prefix = target.path.child(&source.name).map_err(|err| {
            HierarchyError::invalid_path(&source.name, source.path.as_str(), &err)
        })?;

        Ok(Self {
            source: source.name.clone(),
            destination: target.name.clone(),
            org_id: source.org_id,
            old_prefix: source.path.clone(),
            new_prefix,
        })
    }

    /// Whether `folder` is the source or one of its descendants.
    pub fn covers(&self, folder: &Folder) -> bool {
        folder.is_within(self)
    }

    /// Build the rewritten collection, preserving order, and report how many
    /// folders had their path rebased.
    pub fn apply(&self, folders: &[Folder]) -> (Vec<Folder>, usize) {
        let mut rewritten = 0;
        let updated = folders
            .iter()
            .map(|folder| {
                let rebased = self
                    .covers(folder)
                    .then(|| folder.path.rebase(&self.old_prefix, &self.new_prefix))
                    .flatten();
                match rebased {
                    Some(path) => {
                        rewritten += 1;
                        Folder {
                            path,
                            ..folder.clone()
                        }
                    }
                    None => folder.clone(),
                }
            })
            .collect();
        (updated, rewritten)
    }
}

/// A plan stands in for the source folder as it was before the move.
impl FolderLike for MovePlan {
    fn name(&self) -> &str {
        &self.source
    }

    fn path(&self) -> &FolderPath {
        &self.old_prefix
    }

    fn org_id(&self) -> OrgId {
        self.org_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn folder(name: &str, path: &str, org: OrgId) -> Folder {
        Folder::parse(name, path, org).unwrap()
    }

    fn sample(org: OrgId) -> Vec<Folder> {
        vec![
            folder("alpha", "alpha", org),
            folder("bravo", "alpha.bravo", org),
            folder("charlie", "alpha.bravo.charlie", org),
            folder("delta", "alpha.delta", org),
        ]
    }

    #[test]
    fn resolve_builds_prefixes() {
        let org = OrgId::new();
        let plan =
            MovePlan::resolve(&sample(org), "bravo", "delta", MoveScope::Global)
                .unwrap();

        assert_eq!(plan.old_prefix, "alpha.bravo");
        assert_eq!(plan.new_prefix, "alpha.delta.bravo");
        assert_eq!(plan.org_id, org);
    }

    #[test]
    fn same_name_wins_over_everything() {
        let err = MovePlan::resolve(&[], "ghost", "ghost", MoveScope::Global)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SameFolder);
    }

    #[test]
    fn source_checked_before_destination() {
        let err = MovePlan::resolve(&[], "ghost", "phantom", MoveScope::Global)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceNotFound);
    }

    #[test]
    fn apply_only_touches_the_subtree() {
        let org = OrgId::new();
        let folders = sample(org);
        let plan =
            MovePlan::resolve(&folders, "bravo", "delta", MoveScope::Global)
                .unwrap();

        let (updated, rewritten) = plan.apply(&folders);
        let paths: Vec<&str> = updated.iter().map(|f| f.path.as_str()).collect();

        assert_eq!(rewritten, 2);
        assert_eq!(
            paths,
            vec![
                "alpha",
                "alpha.delta.bravo",
                "alpha.delta.bravo.charlie",
                "alpha.delta"
            ]
        );
    }

    #[test]
    fn apply_leaves_other_organizations_alone() {
        let org = OrgId::new();
        let other = OrgId::new();
        let mut folders = sample(org);
        folders.push(folder("bravo", "alpha.bravo", other));

        let plan = MovePlan::resolve(&folders, "bravo", "delta", MoveScope::Org(org))
            .unwrap();
        let (updated, rewritten) = plan.apply(&folders);

        assert_eq!(rewritten, 2);
        assert_eq!(updated[4].path, "alpha.bravo");
    }

    #[test]
    fn org_scope_ignores_foreign_names() {
        let org = OrgId::new();
        let other = OrgId::new();
        let mut folders = vec![folder("foxtrot", "foxtrot", other)];
        folders.extend(sample(org));

        let err = MovePlan::resolve(&folders, "foxtrot", "delta", MoveScope::Org(org))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceNotFound);

        let err = MovePlan::resolve(&folders, "foxtrot", "delta", MoveScope::Global)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CrossOrganization);
    }

    #[test]
    fn plan_covers_the_source_subtree_only() {
        let org = OrgId::new();
        let mut folders = sample(org);
        folders.push(folder("bravissimo", "alpha.bravissimo", org));
        let plan =
            MovePlan::resolve(&folders, "bravo", "delta", MoveScope::Global)
                .unwrap();

        let covered: Vec<&str> = folders
            .iter()
            .filter(|f| plan.covers(f))
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(covered, vec!["bravo", "charlie"]);
        assert_eq!(plan.name(), "bravo");
    }

    #[test]
    fn dotted_source_name_is_an_invalid_path() {
        let org = OrgId::new();
        let folders = vec![
            folder("b.c", "a.b.c", org),
            folder("a", "a", org),
            folder("d", "d", org),
        ];

        let err = MovePlan::resolve(&folders, "b.c", "d", MoveScope::Global)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPath);
    }
}
