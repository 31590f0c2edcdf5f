//! Commit database
//!
//! An append-only arena mapping commit id to commit record. Commits
//! reference each other only by id, never by direct reference, so the
//! commit graph carries no ownership cycles. Records are never mutated or
//! deleted once stored.

use crate::artifacts::merge::base_finder::SlimCommit;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::Error;
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Debug, Default)]
pub struct Database {
    commits: HashMap<CommitId, Commit>,
    /// Allocation counter feeding commit id generation
    serial: u64,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store a new commit, allocating its id
    ///
    /// This is the only way the local store grows, apart from importing
    /// records pulled from the remote mirror.
    pub fn store(
        &mut self,
        parents: Vec<CommitId>,
        tree: Tree,
        author: Author,
        message: String,
    ) -> CommitId {
        self.serial += 1;
        let id = CommitId::generate(self.serial, &message);

        let commit = Commit::new(id.clone(), parents, tree, author, message);
        self.commits.insert(id.clone(), commit);
        id
    }

    /// Load a commit by id
    pub fn load(&self, oid: &CommitId) -> crate::errors::Result<&Commit> {
        self.commits
            .get(oid)
            .ok_or_else(|| Error::NotFound(format!("commit '{}'", oid.to_short_oid())))
    }

    pub fn contains(&self, oid: &CommitId) -> bool {
        self.commits.contains_key(oid)
    }

    /// Slim view of a commit for the merge base finder
    ///
    /// A missing id yields a parentless slim commit, which terminates the
    /// first-parent walk instead of panicking on a corrupt graph.
    pub fn slim(&self, oid: &CommitId) -> SlimCommit {
        SlimCommit {
            oid: oid.clone(),
            first_parent: self
                .commits
                .get(oid)
                .and_then(|commit| commit.first_parent().cloned()),
        }
    }

    /// Insert an already-built commit record transferred from the mirror
    ///
    /// Existing records win; commits are immutable, so a re-import of a
    /// known id is a no-op.
    pub fn import(&mut self, commit: Commit) {
        self.commits.entry(commit.id().clone()).or_insert(commit);
    }

    /// Collect every commit reachable from a tip through all parent links
    ///
    /// Used by push/pull to transfer history between the local store and
    /// the remote mirror. Unlike ancestor search, the transfer follows
    /// second parents too, so merge history survives a round trip.
    pub fn export_reachable(&self, tip: &CommitId) -> Vec<Commit> {
        collect_reachable(&self.commits, tip)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Breadth-first reachability over a commit map, shared with the mirror
pub(crate) fn collect_reachable(
    commits: &HashMap<CommitId, Commit>,
    tip: &CommitId,
) -> Vec<Commit> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([tip.clone()]);
    let mut reachable = Vec::new();

    while let Some(oid) = queue.pop_front() {
        if !seen.insert(oid.clone()) {
            continue;
        }
        if let Some(commit) = commits.get(&oid) {
            reachable.push(commit.clone());
            queue.extend(commit.parents().iter().cloned());
        }
    }

    reachable
}
