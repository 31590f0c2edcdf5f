//! Working set
//!
//! The mutable file path → content map the user edits directly, plus a
//! per-file tracked flag that flips to true once the path has appeared in
//! some commit's tree. Checkout replaces the whole working set with a
//! branch tip's tree.

use crate::artifacts::objects::tree::Tree;
use crate::errors::Error;
use std::collections::BTreeMap;

/// A single editable file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingFile {
    content: String,
    tracked: bool,
}

impl WorkingFile {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_tracked(&self) -> bool {
        self.tracked
    }
}

#[derive(Debug, Default)]
pub struct Workspace {
    files: BTreeMap<String, WorkingFile>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite a working file, preserving its tracked flag
    pub fn write_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        let tracked = self.files.get(&path).is_some_and(WorkingFile::is_tracked);
        self.files.insert(
            path,
            WorkingFile {
                content: content.into(),
                tracked,
            },
        );
    }

    pub fn read_file(&self, path: &str) -> crate::errors::Result<&str> {
        self.files
            .get(path)
            .map(|file| file.content.as_str())
            .ok_or_else(|| Error::NotFound(format!("pathspec '{path}'")))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&WorkingFile> {
        self.files.get(path)
    }

    /// Flip the tracked flag once a path has landed in a commit tree
    pub fn mark_tracked(&mut self, path: &str) {
        if let Some(file) = self.files.get_mut(path) {
            file.tracked = true;
        }
    }

    /// Replace the entire working set with a tree snapshot
    ///
    /// Every resulting file is tracked; files not present in the tree are
    /// removed.
    pub fn reset_to_tree(&mut self, tree: &Tree) {
        self.files = tree
            .iter()
            .map(|(path, content)| {
                (
                    path.to_string(),
                    WorkingFile {
                        content: content.to_string(),
                        tracked: true,
                    },
                )
            })
            .collect();
    }

    /// Iterate (path, file) pairs in sorted order
    pub fn files(&self) -> impl Iterator<Item = (&str, &WorkingFile)> {
        self.files.iter().map(|(path, file)| (path.as_str(), file))
    }

    /// Snapshot the current contents as a tree
    pub fn snapshot(&self) -> Tree {
        self.files
            .iter()
            .map(|(path, file)| (path.clone(), file.content.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
