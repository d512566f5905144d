use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};
use std::path::{Path, PathBuf};

/// A single planned rename inside the target directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenameOperation<'a> {
    /// Current file name
    #[serde(rename = "from")]
    pub original: &'a str,
    /// File name after the rename
    #[serde(rename = "to")]
    pub target: &'a str,
}

impl<'a> RenameOperation<'a> {
    pub fn new(original: &'a str, target: &'a str) -> Self {
        Self { original, target }
    }

    pub fn source_path(&self, directory: &Path) -> PathBuf {
        directory.join(self.original)
    }

    pub fn destination_path(&self, directory: &Path) -> PathBuf {
        directory.join(self.target)
    }
}

/// Mapping from new file name to original file name.
///
/// Target names are unique keys. Iteration is ordered by target name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameSet {
    entries: BTreeMap<String, String>,
}

impl RenameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Original name already mapped to `target`, if any
    #[cfg(test)]
    pub(crate) fn original_for(&self, target: &str) -> Option<&str> {
        self.entries.get(target).map(String::as_str)
    }

    /// Record `target -> original`.
    ///
    /// Returns the original name already claiming `target` without
    /// replacing it.
    pub fn insert(&mut self, target: String, original: String) -> Result<(), String> {
        match self.entries.entry(target) {
            btree_map::Entry::Occupied(existing) => Err(existing.get().clone()),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(original);
                Ok(())
            }
        }
    }

    pub fn operations(&self) -> impl Iterator<Item = RenameOperation<'_>> {
        self.entries
            .iter()
            .map(|(target, original)| RenameOperation::new(original, target))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_operation_paths() {
        let op = RenameOperation::new("ep1.mp4", "Show S01E01.mp4");

        assert_eq!(
            op.source_path(Path::new("/media/Show")),
            PathBuf::from("/media/Show/ep1.mp4")
        );
        assert_eq!(
            op.destination_path(Path::new("/media/Show")),
            PathBuf::from("/media/Show/Show S01E01.mp4")
        );
    }

    #[test]
    fn test_rename_set_insert() {
        let mut set = RenameSet::new();

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);

        set.insert("Show S01E01.mp4".to_string(), "ep1.mp4".to_string())
            .unwrap();

        assert!(!set.is_empty());
        assert_eq!(set.len(), 1);
        assert_eq!(set.original_for("Show S01E01.mp4"), Some("ep1.mp4"));
        assert_eq!(set.original_for("Show S01E02.mp4"), None);
    }

    #[test]
    fn test_rename_set_duplicate_target_is_rejected() {
        let mut set = RenameSet::new();
        set.insert("Show S01E01.mp4".to_string(), "ep01.mp4".to_string())
            .unwrap();

        let result = set.insert("Show S01E01.mp4".to_string(), "ep1.mp4".to_string());

        assert_eq!(result, Err("ep01.mp4".to_string()));
        // First mapping is kept
        assert_eq!(set.original_for("Show S01E01.mp4"), Some("ep01.mp4"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_operations_ordered_by_target() {
        let mut set = RenameSet::new();
        set.insert("Show S01E02.mp4".to_string(), "a2.mp4".to_string())
            .unwrap();
        set.insert("Show S01E01.mp4".to_string(), "b1.mp4".to_string())
            .unwrap();

        let ops: Vec<RenameOperation> = set.operations().collect();

        assert_eq!(ops[0], RenameOperation::new("b1.mp4", "Show S01E01.mp4"));
        assert_eq!(ops[1], RenameOperation::new("a2.mp4", "Show S01E02.mp4"));
    }

    #[test]
    fn test_operation_serializes_as_from_to() {
        let op = RenameOperation::new("ep1.mp4", "Show S01E01.mp4");
        let json = serde_json::to_string(&op).unwrap();

        assert_eq!(json, r#"{"from":"ep1.mp4","to":"Show S01E01.mp4"}"#);
    }
}
