//! Merge base finder
//!
//! Finds the nearest common ancestor of two commits by walking first-parent
//! chains from each until the chains intersect. The merge base is the input
//! every three-way merge needs: its tree becomes the `base` side against
//! which both branch tips are compared.
//!
//! ## Algorithm
//!
//! 1. Walk the first-parent chain of the source commit, recording every
//!    commit id in visit order
//! 2. Walk the first-parent chain of the target commit; the first commit
//!    that also appears in the source chain is the merge base
//!
//! Only `parents[0]` is followed: a merge commit's second parent is
//! invisible to the search. This keeps the search linear and matches the
//! sandbox's single-parent-per-branch history model, at the cost of
//! misidentifying the base in criss-cross merge histories. The loader
//! closure keeps the finder independent of any particular commit store, so
//! a full multi-parent reachability search could be swapped in behind the
//! same interface.

use crate::artifacts::merge::debug_log;
use crate::artifacts::objects::commit_id::CommitId;
use std::collections::HashSet;

/// Slim representation of a commit
///
/// Contains only what the ancestor search needs: the commit's own id and
/// its first parent.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    /// The commit's id
    pub oid: CommitId,
    /// The commit's first parent, if any
    pub first_parent: Option<CommitId>,
}

/// Finds the merge base between two commits
///
/// Takes a generic loader function that produces `SlimCommit` data for any
/// given commit id, making the finder independent of the storage backend
/// (local database, remote mirror, test fixture).
pub struct BaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&CommitId) -> SlimCommit,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> BaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&CommitId) -> SlimCommit,
{
    /// Creates a new merge base finder with the given commit loader
    ///
    /// # Arguments
    ///
    /// * `commit_loader` - Function that takes a commit id and returns a
    ///   `SlimCommit`; must return `first_parent: None` for root commits
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let finder = BaseFinder::new(|commit_id| database.slim(commit_id));
    /// ```
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Finds the nearest common ancestor of two commits
    ///
    /// # Arguments
    ///
    /// * `source_commit_id` - The current HEAD commit
    /// * `target_commit_id` - The tip being merged in
    ///
    /// # Returns
    ///
    /// - `Some(id)` - The first commit on the target's first-parent chain
    ///   that is also reachable from the source. When one tip is an
    ///   ancestor of the other, that tip itself is returned.
    /// - `None` - The histories share no commit (disjoint roots).
    pub fn find_merge_base(
        &self,
        source_commit_id: &CommitId,
        target_commit_id: &CommitId,
    ) -> Option<CommitId> {
        let mut source_chain = HashSet::new();

        let mut cursor = Some(source_commit_id.clone());
        while let Some(oid) = cursor {
            debug_log!("base finder: source chain visits {}", oid);
            let slim = (self.commit_loader)(&oid);
            source_chain.insert(oid);
            cursor = slim.first_parent;
        }

        let mut cursor = Some(target_commit_id.clone());
        while let Some(oid) = cursor {
            if source_chain.contains(&oid) {
                debug_log!("base finder: chains intersect at {}", oid);
                return Some(oid);
            }
            debug_log!("base finder: target chain visits {}", oid);
            let slim = (self.commit_loader)(&oid);
            cursor = slim.first_parent;
        }

        None
    }
}
