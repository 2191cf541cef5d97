use arbor_model::{OrgId, PathError};
use std::path::PathBuf;
use thiserror::Error;

/// Failures of hierarchy queries, subtree moves and integrity validation.
///
/// Every variant carries the names and organizations involved so callers can
/// branch on [`HierarchyError::kind`] instead of matching message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("folder '{name}' does not exist")]
    NotFound { name: String },

    #[error("folder '{name}' does not exist in organization {org_id}")]
    OrgMismatch { name: String, org_id: OrgId },

    #[error("cannot move folder '{name}' to itself")]
    SameFolder { name: String },

    #[error("source folder '{name}' does not exist")]
    SourceNotFound { name: String },

    #[error("destination folder '{name}' does not exist")]
    DestinationNotFound { name: String },

    #[error(
        "cannot move folder '{source_name}' ({source_org}) to a different organization: '{destination}' belongs to {destination_org}"
    )]
    CrossOrganization {
        source_name: String,
        source_org: OrgId,
        destination: String,
        destination_org: OrgId,
    },

    #[error("cannot move folder '{source_name}' to '{destination}', a child of itself")]
    CyclicMove {
        source_name: String,
        destination: String,
    },

    #[error("folder name '{name}' appears more than once in organization {org_id}")]
    DuplicateName { name: String, org_id: OrgId },

    #[error("folder '{name}' has an invalid path '{path}': {reason}")]
    InvalidPath {
        name: String,
        path: String,
        reason: String,
    },

    #[error("folder '{name}' at '{path}' has no parent folder in its organization")]
    OrphanedFolder { name: String, path: String },
}

/// Fieldless discriminant of [`HierarchyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    OrgMismatch,
    SameFolder,
    SourceNotFound,
    DestinationNotFound,
    CrossOrganization,
    CyclicMove,
    DuplicateName,
    InvalidPath,
    OrphanedFolder,
}

impl HierarchyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HierarchyError::NotFound { .. } => ErrorKind::NotFound,
            HierarchyError::OrgMismatch { .. } => ErrorKind::OrgMismatch,
            HierarchyError::SameFolder { .. } => ErrorKind::SameFolder,
            HierarchyError::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            HierarchyError::DestinationNotFound { .. } => {
                ErrorKind::DestinationNotFound
            }
            HierarchyError::CrossOrganization { .. } => {
                ErrorKind::CrossOrganization
            }
            HierarchyError::CyclicMove { .. } => ErrorKind::CyclicMove,
            HierarchyError::DuplicateName { .. } => ErrorKind::DuplicateName,
            HierarchyError::InvalidPath { .. } => ErrorKind::InvalidPath,
            HierarchyError::OrphanedFolder { .. } => ErrorKind::OrphanedFolder,
        }
    }

    pub(crate) fn invalid_path(
        name: &str,
        path: impl Into<String>,
        err: &PathError,
    ) -> Self {
        HierarchyError::InvalidPath {
            name: name.to_owned(),
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HierarchyError>;

/// Failures reading or writing serialized folder collections.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid folder data in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}
