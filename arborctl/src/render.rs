//! Output formatting for folder collections.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use arbor_core::sample;
use arbor_model::{Folder, OrgId};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON array, in store order
    Json,
    /// Indented tree per organization, sorted by path
    Tree,
}

pub fn render(folders: &[Folder], format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Json => sample::to_pretty_json(folders),
        Format::Tree => Ok(tree(folders)),
    }
}

/// One block per organization headed by its id. Each folder is indented two
/// spaces per level below the shallowest folder shown.
pub fn tree(folders: &[Folder]) -> String {
    let mut by_org: BTreeMap<OrgId, Vec<&Folder>> = BTreeMap::new();
    for folder in folders {
        by_org.entry(folder.org_id).or_default().push(folder);
    }

    let mut out = String::new();
    for (org, mut group) in by_org {
        group.sort_by(|a, b| a.path.segments().cmp(b.path.segments()));
        let base = group.iter().map(|f| f.path.depth()).min().unwrap_or(1);

        let _ = writeln!(out, "{org}");
        for folder in group {
            let indent = "  ".repeat(folder.path.depth() - base + 1);
            let _ = writeln!(out, "{indent}{}", folder.name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(name: &str, path: &str, org: OrgId) -> Folder {
        Folder::parse(name, path, org).unwrap()
    }

    #[test]
    fn tree_indents_by_depth() {
        let org = OrgId::new();
        let folders = vec![
            folder("delta", "alpha.delta", org),
            folder("alpha", "alpha", org),
            folder("charlie", "alpha.bravo.charlie", org),
            folder("bravo", "alpha.bravo", org),
        ];

        let expected = format!("{org}\n  alpha\n    bravo\n      charlie\n    delta\n");
        assert_eq!(tree(&folders), expected);
    }

    #[test]
    fn tree_of_descendants_starts_at_left_margin() {
        let org = OrgId::new();
        let folders = vec![
            folder("charlie", "alpha.bravo.charlie", org),
            folder("bravo", "alpha.bravo", org),
        ];
        assert_eq!(tree(&folders), format!("{org}\n  bravo\n    charlie\n"));
    }

    #[test]
    fn siblings_sharing_a_prefix_stay_separate() {
        let org = OrgId::new();
        let folders = vec![
            folder("alpha", "alpha", org),
            folder("alpha-2", "alpha-2", org),
            folder("bravo", "alpha.bravo", org),
        ];
        assert_eq!(
            tree(&folders),
            format!("{org}\n  alpha\n    bravo\n  alpha-2\n")
        );
    }

    #[test]
    fn empty_collection_renders_nothing() {
        assert_eq!(tree(&[]), "");
        assert_eq!(render(&[], Format::Json).unwrap(), "[]\n");
    }
}
