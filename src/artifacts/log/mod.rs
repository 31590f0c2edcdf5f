//! Commit history traversal
//!
//! History is reconstructed by walking `parents[0]` from a tip back to a
//! commit with no parents, newest first. A merge commit's second parent is
//! recorded on the commit but never followed here.

use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;

/// Iterator over the first-parent chain of a commit, newest first
pub struct FirstParentWalk<'a> {
    database: &'a Database,
    cursor: Option<CommitId>,
}

impl<'a> FirstParentWalk<'a> {
    pub fn new(database: &'a Database, tip: Option<CommitId>) -> Self {
        Self {
            database,
            cursor: tip,
        }
    }
}

impl<'a> Iterator for FirstParentWalk<'a> {
    type Item = &'a Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.cursor.take()?;
        // the database is append-only, so a recorded parent is always present
        let commit = self.database.load(&oid).ok()?;
        self.cursor = commit.first_parent().cloned();
        Some(commit)
    }
}
