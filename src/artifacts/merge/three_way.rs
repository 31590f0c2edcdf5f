//! Three-way tree merge
//!
//! Combines a base tree (the merge base's snapshot) with "ours" (the current
//! HEAD tree) and "theirs" (the other tip's tree), file by file, across the
//! union of all three trees' paths.
//!
//! ## Per-file rules
//!
//! - unchanged relative to base on one side: take the other side's value
//!   (including its absence, which deletes the file)
//! - both sides equal: take that value
//! - both sides present but changed differently: conflict; the merged
//!   content embeds both versions between conflict markers
//! - deleted on one side while the other side changed: keep the content
//!   that exists (deletions are not deep-merged)

use crate::artifacts::merge::debug_log;
use crate::artifacts::objects::tree::Tree;
use std::collections::BTreeSet;

/// Marker opening the HEAD side of a conflict block
pub const CONFLICT_OURS_MARKER: &str = "<<<<<<< HEAD";
/// Marker separating the two sides of a conflict block
pub const CONFLICT_SEPARATOR: &str = "=======";
/// Marker closing the incoming side of a conflict block
pub const CONFLICT_THEIRS_MARKER: &str = ">>>>>>> MERGE";

/// Result of merging three trees
///
/// The tree always holds a complete snapshot; for conflicted paths the
/// content is the conflict-marked combination of both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTree {
    pub tree: Tree,
    /// Paths where both sides changed differently, in sorted order
    pub conflicts: Vec<String>,
}

impl MergedTree {
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Merge `ours` and `theirs` against their common `base`
pub fn merge_trees(base: &Tree, ours: &Tree, theirs: &Tree) -> MergedTree {
    let paths: BTreeSet<&str> = base
        .paths()
        .chain(ours.paths())
        .chain(theirs.paths())
        .collect();

    let mut tree = Tree::new();
    let mut conflicts = Vec::new();

    for path in paths {
        let base_content = base.get(path);
        let our_content = ours.get(path);
        let their_content = theirs.get(path);

        let resolution = if our_content == base_content {
            their_content.map(str::to_string)
        } else if their_content == base_content {
            our_content.map(str::to_string)
        } else if our_content == their_content {
            our_content.map(str::to_string)
        } else {
            match (our_content, their_content) {
                (Some(ours), Some(theirs)) => {
                    debug_log!("three-way: conflict at {}", path);
                    conflicts.push(path.to_string());
                    Some(conflict_block(ours, theirs))
                }
                // one-sided delete against a change: keep what exists
                (Some(content), None) | (None, Some(content)) => Some(content.to_string()),
                (None, None) => None,
            }
        };

        if let Some(content) = resolution {
            tree.insert(path, content);
        }
    }

    MergedTree { tree, conflicts }
}

fn conflict_block(ours: &str, theirs: &str) -> String {
    format!(
        "{CONFLICT_OURS_MARKER}\n{ours}\n{CONFLICT_SEPARATOR}\n{theirs}\n{CONFLICT_THEIRS_MARKER}\n"
    )
}
