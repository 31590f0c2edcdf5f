//! Index (staging area)
//!
//! A mutable map from file path to staged content, or to a deletion marker,
//! representing what the next commit will contain. The index is transient:
//! it is fully cleared by a successful commit and by checkout.

use crate::artifacts::objects::tree::Tree;
use std::collections::BTreeMap;

/// A single staged entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    /// Path will carry this content in the next commit
    Staged(String),
    /// Path will be removed in the next commit
    Removed,
}

#[derive(Debug, Default)]
pub struct Index {
    entries: BTreeMap<String, IndexEntry>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage content for a path, replacing any earlier stage of it
    pub fn stage(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.entries
            .insert(path.into(), IndexEntry::Staged(content.into()));
    }

    /// Stage a deletion marker for a path
    pub fn stage_removal(&mut self, path: impl Into<String>) {
        self.entries.insert(path.into(), IndexEntry::Removed);
    }

    /// Stage a complete snapshot relative to the current HEAD tree
    ///
    /// Every path of the snapshot is staged; paths present in the HEAD tree
    /// but absent from the snapshot get deletion markers, so committing the
    /// index reproduces the snapshot exactly. Used by the automatic
    /// merge-commit step.
    pub fn stage_snapshot(&mut self, snapshot: &Tree, head_tree: &Tree) {
        self.entries.clear();

        for (path, content) in snapshot.iter() {
            self.stage(path, content);
        }
        for path in head_tree.paths() {
            if !snapshot.contains(path) {
                self.stage_removal(path);
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterate (path, entry) pairs in sorted order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &IndexEntry)> {
        self.entries
            .iter()
            .map(|(path, entry)| (path.as_str(), entry))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
