use crate::error::Result;
use crate::ids::OrgId;
use crate::path::FolderPath;

/// A folder record positioned in its organization's hierarchy by a
/// materialized [`FolderPath`].
///
/// The serialized form uses the field names `name`, `org_id` and `paths`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Folder {
    pub name: String,
    pub org_id: OrgId,
    #[cfg_attr(feature = "serde", serde(rename = "paths"))]
    pub path: FolderPath,
}

impl Folder {
    pub fn new(name: impl Into<String>, path: FolderPath, org_id: OrgId) -> Self {
        Self {
            name: name.into(),
            org_id,
            path,
        }
    }

    /// Build a folder from an unparsed path string.
    pub fn parse(
        name: impl Into<String>,
        path: &str,
        org_id: OrgId,
    ) -> Result<Self> {
        Ok(Self::new(name, FolderPath::new(path)?, org_id))
    }

    /// A root folder whose path is just its name.
    pub fn root(name: impl Into<String>, org_id: OrgId) -> Result<Self> {
        let name = name.into();
        let path = FolderPath::root(&name)?;
        Ok(Self::new(name, path, org_id))
    }

    /// A direct child of `self`, in the same organization.
    pub fn child(&self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let path = self.path.child(&name)?;
        Ok(Self::new(name, path, self.org_id))
    }

    pub fn is_root(&self) -> bool {
        self.path.is_root()
    }

    /// Whether the path's final segment matches the name.
    pub fn is_consistent(&self) -> bool {
        self.path.name() == self.name
    }
}
