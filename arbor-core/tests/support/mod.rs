#![allow(dead_code)]

use arbor_core::{Folder, FolderStore, OrgId};

pub fn folder(name: &str, path: &str, org: OrgId) -> Folder {
    Folder::parse(name, path, org).expect("valid test path")
}

/// Two organizations: `org` holds a small tree plus an unrelated root,
/// `other` holds a single root.
pub struct Fixture {
    pub org: OrgId,
    pub other: OrgId,
    pub folders: Vec<Folder>,
}

impl Fixture {
    pub fn new() -> Self {
        let org = OrgId::new();
        let other = OrgId::new();
        let folders = vec![
            folder("alpha", "alpha", org),
            folder("bravo", "alpha.bravo", org),
            folder("charlie", "alpha.bravo.charlie", org),
            folder("delta", "alpha.delta", org),
            folder("echo", "alpha.delta.echo", org),
            folder("foxtrot", "foxtrot", other),
            folder("golf", "golf", org),
        ];
        Self {
            org,
            other,
            folders,
        }
    }

    pub fn store(&self) -> FolderStore {
        FolderStore::new(self.folders.clone())
    }
}

pub fn names(folders: &[Folder]) -> Vec<&str> {
    let mut names: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
    names.sort_unstable();
    names
}

pub fn path_of<'a>(folders: &'a [Folder], name: &str) -> &'a str {
    folders
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.path.as_str())
        .expect("folder present")
}
