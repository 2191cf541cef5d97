//! Sample folder data: a random forest generator, a small fixed fixture and
//! JSON import/export of folder collections.

use std::collections::HashSet;
use std::fs;
use std::io::BufReader;
use std::path::Path;

use arbor_model::{Folder, ModelResult, OrgId};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DataError;

const WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
    "india", "juliet", "kilo", "lima", "mike", "november", "oscar", "papa",
    "quebec", "romeo", "sierra", "tango", "uniform", "victor", "whiskey",
    "xray", "yankee", "zulu",
];

/// Shape of a generated sample forest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SampleSpec {
    /// Number of organizations, each with its own random id.
    pub orgs: usize,
    /// Root folders created per organization.
    pub roots_per_org: usize,
    /// Maximum path depth; roots have depth 1, so zero yields no folders.
    pub max_depth: usize,
    /// Upper bound on children per folder; the actual count is random.
    pub max_children: usize,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            orgs: 2,
            roots_per_org: 2,
            max_depth: 3,
            max_children: 3,
        }
    }
}

/// Generate a structurally valid forest: every non-root folder's parent is
/// present, names are unique per organization, and folders appear in
/// depth-first order. No folder is deeper than `spec.max_depth`.
pub fn generate<R: Rng + ?Sized>(
    spec: &SampleSpec,
    rng: &mut R,
) -> ModelResult<Vec<Folder>> {
    let mut folders = Vec::new();
    if spec.max_depth == 0 {
        return Ok(folders);
    }

    for _ in 0..spec.orgs {
        let org_id = OrgId::from_uuid(
            uuid::Builder::from_random_bytes(rng.random()).into_uuid(),
        );
        let mut names = NamePool::default();

        for _ in 0..spec.roots_per_org {
            let root = Folder::root(names.next(rng), org_id)?;
            folders.push(root.clone());
            grow(&root, 1, spec, rng, &mut names, &mut folders)?;
        }
    }

    debug!(
        orgs = spec.orgs,
        count = folders.len(),
        "generated sample folders"
    );
    Ok(folders)
}

fn grow<R: Rng + ?Sized>(
    parent: &Folder,
    depth: usize,
    spec: &SampleSpec,
    rng: &mut R,
    names: &mut NamePool,
    out: &mut Vec<Folder>,
) -> ModelResult<()> {
    if depth >= spec.max_depth {
        return Ok(());
    }

    let count = rng.random_range(0..=spec.max_children);
    for _ in 0..count {
        let child = parent.child(names.next(rng))?;
        out.push(child.clone());
        grow(&child, depth + 1, spec, rng, names, out)?;
    }
    Ok(())
}

#[derive(Default)]
struct NamePool {
    taken: HashSet<String>,
}

impl NamePool {
    fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let word = WORDS.choose(rng).copied().unwrap_or("folder");
        if self.taken.insert(word.to_owned()) {
            return word.to_owned();
        }

        let mut suffix = 2;
        loop {
            let candidate = format!("{word}-{suffix}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

/// The four-folder example tree: `alpha` with children `bravo` and `delta`,
/// and `charlie` below `bravo`.
pub fn fixture(org_id: OrgId) -> ModelResult<Vec<Folder>> {
    let alpha = Folder::root("alpha", org_id)?;
    let bravo = alpha.child("bravo")?;
    let charlie = bravo.child("charlie")?;
    let delta = alpha.child("delta")?;
    Ok(vec![alpha, bravo, charlie, delta])
}

/// Read a JSON array of folders.
pub fn load_json(path: &Path) -> Result<Vec<Folder>, DataError> {
    let file = fs::File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let folders: Vec<Folder> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), count = folders.len(), "loaded folders");
    Ok(folders)
}

/// Pretty-printed JSON for a folder collection, with a trailing newline.
pub fn to_pretty_json(folders: &[Folder]) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(folders)?;
    json.push('\n');
    Ok(json)
}

/// Write a folder collection as pretty-printed JSON, replacing `path`.
pub fn write_json(path: &Path, folders: &[Folder]) -> Result<(), DataError> {
    let json = to_pretty_json(folders).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = folders.len(), "wrote folders");
    Ok(())
}
