use crate::error::ModelError;
use std::str::FromStr;
use uuid::Uuid;

/// Strongly typed ID for organizations owning folders
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OrgId(pub Uuid);

impl Default for OrgId {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgId {
    pub fn new() -> Self {
        OrgId(Uuid::now_v7())
    }

    pub const fn from_uuid(id: Uuid) -> Self {
        OrgId(id)
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for OrgId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for OrgId {
    fn from(id: Uuid) -> Self {
        OrgId(id)
    }
}

impl FromStr for OrgId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId(
                "organization ID cannot be empty".to_string(),
            ));
        }
        Uuid::parse_str(trimmed).map(OrgId).map_err(|err| {
            ModelError::InvalidId(format!("'{trimmed}': {err}"))
        })
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
