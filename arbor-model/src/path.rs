use std::fmt;
use std::str::FromStr;

/// Character joining the segments of a materialized path.
pub const SEPARATOR: char = '.';

/// Errors produced when constructing a [`FolderPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    Empty,
    EmptySegment { path: String },
    InvalidSegment { segment: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "folder path cannot be empty"),
            PathError::EmptySegment { path } => {
                write!(f, "folder path '{path}' contains an empty segment")
            }
            PathError::InvalidSegment { segment } => write!(
                f,
                "'{segment}' is not a valid path segment (empty or contains '{SEPARATOR}')"
            ),
        }
    }
}

impl std::error::Error for PathError {}

/// Materialized path of a folder: its ancestors' names and its own name
/// joined by [`SEPARATOR`], e.g. `alpha.bravo.charlie`.
///
/// Every comparison on this type is segment-aware, so `alpha` is an ancestor
/// of `alpha.bravo` but not of `alphabet`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct FolderPath(String);

impl FolderPath {
    /// Parse a full dot-separated path.
    pub fn new(value: impl Into<String>) -> Result<Self, PathError> {
        let value = value.into();
        if value.is_empty() {
            return Err(PathError::Empty);
        }
        if value.split(SEPARATOR).any(str::is_empty) {
            return Err(PathError::EmptySegment { path: value });
        }
        Ok(Self(value))
    }

    /// Path of a root folder called `name`.
    pub fn root(name: &str) -> Result<Self, PathError> {
        check_segment(name)?;
        Ok(Self(name.to_owned()))
    }

    /// Path of a direct child called `name` below this path.
    pub fn child(&self, name: &str) -> Result<Self, PathError> {
        check_segment(name)?;
        Ok(Self(format!("{}{SEPARATOR}{name}", self.0)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// Number of segments; roots have depth 1.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Final segment, which for a well-formed folder equals its name.
    pub fn name(&self) -> &str {
        self.0
            .rsplit_once(SEPARATOR)
            .map_or(self.0.as_str(), |(_, last)| last)
    }

    pub fn parent(&self) -> Option<FolderPath> {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(head, _)| FolderPath(head.to_owned()))
    }

    pub fn is_root(&self) -> bool {
        !self.0.contains(SEPARATOR)
    }

    /// True when `other` equals this path or lies anywhere below it.
    pub fn contains(&self, other: &FolderPath) -> bool {
        remainder_below(&self.0, &other.0).is_some()
    }

    /// True when `other` lies strictly below this path.
    pub fn is_ancestor_of(&self, other: &FolderPath) -> bool {
        matches!(remainder_below(&self.0, &other.0), Some(rest) if !rest.is_empty())
    }

    /// Replace the `from` prefix of this path with `to`, keeping the
    /// remainder. Returns `None` when this path is not inside `from`.
    pub fn rebase(&self, from: &FolderPath, to: &FolderPath) -> Option<FolderPath> {
        let rest = remainder_below(&from.0, &self.0)?;
        Some(FolderPath(format!("{}{rest}", to.0)))
    }
}

/// The part of `path` following `prefix`, if `prefix` is a segment-aware
/// prefix of it. The remainder is empty or starts with the separator.
fn remainder_below<'a>(prefix: &str, path: &'a str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    (rest.is_empty() || rest.starts_with(SEPARATOR)).then_some(rest)
}

fn check_segment(segment: &str) -> Result<(), PathError> {
    if segment.is_empty() || segment.contains(SEPARATOR) {
        return Err(PathError::InvalidSegment {
            segment: segment.to_owned(),
        });
    }
    Ok(())
}

impl TryFrom<String> for FolderPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FolderPath::new(value)
    }
}

impl From<FolderPath> for String {
    fn from(path: FolderPath) -> Self {
        path.0
    }
}

impl FromStr for FolderPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FolderPath::new(s)
    }
}

impl AsRef<str> for FolderPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FolderPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FolderPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> FolderPath {
        FolderPath::new(raw).unwrap()
    }

    #[test]
    fn rejects_malformed_paths() {
        assert_eq!(FolderPath::new(""), Err(PathError::Empty));
        assert!(matches!(
            FolderPath::new("alpha..bravo"),
            Err(PathError::EmptySegment { .. })
        ));
        assert!(FolderPath::new(".alpha").is_err());
        assert!(FolderPath::new("alpha.").is_err());
    }

    #[test]
    fn containment_is_segment_aware() {
        let alpha = path("alpha");

        assert!(alpha.contains(&path("alpha")));
        assert!(alpha.contains(&path("alpha.bravo")));
        assert!(alpha.contains(&path("alpha.bravo.charlie")));
        assert!(!alpha.contains(&path("alphabet")));
        assert!(!alpha.contains(&path("alphabet.bravo")));
        assert!(!alpha.contains(&path("echo.alpha")));

        assert!(!alpha.is_ancestor_of(&path("alpha")));
        assert!(alpha.is_ancestor_of(&path("alpha.bravo")));
    }

    #[test]
    fn structural_accessors() {
        let p = path("alpha.bravo.charlie");
        assert_eq!(p.depth(), 3);
        assert_eq!(p.name(), "charlie");
        assert_eq!(p.parent(), Some(path("alpha.bravo")));
        assert!(!p.is_root());

        let root = path("alpha");
        assert_eq!(root.name(), "alpha");
        assert_eq!(root.parent(), None);
        assert!(root.is_root());
    }

    #[test]
    fn child_and_root_reject_separator() {
        assert_eq!(path("alpha").child("bravo").unwrap(), "alpha.bravo");
        assert!(path("alpha").child("bra.vo").is_err());
        assert!(path("alpha").child("").is_err());
        assert!(FolderPath::root("a.b").is_err());
    }

    #[test]
    fn rebase_keeps_remainder() {
        let from = path("alpha.bravo");
        let to = path("alpha.delta.bravo");

        assert_eq!(
            path("alpha.bravo.charlie").rebase(&from, &to),
            Some(path("alpha.delta.bravo.charlie"))
        );
        assert_eq!(path("alpha.bravo").rebase(&from, &to), Some(to.clone()));
        assert_eq!(path("alpha.bravos").rebase(&from, &to), None);
        assert_eq!(path("alpha.delta").rebase(&from, &to), None);
    }
}
