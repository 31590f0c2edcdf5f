//! Remote mirror
//!
//! A second, physically separate (branch table, commit store) pair used
//! only by push and pull to simulate a second repository. The mirror never
//! merges anything: it stores whatever the last push transferred, and
//! hands back whatever a pull asks for.

use crate::areas::database::collect_reachable;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use std::collections::{BTreeMap, HashMap};

/// Remote name accepted by `remote add`; the sandbox supports exactly one
pub const REMOTE_NAME: &str = "origin";

#[derive(Debug)]
pub struct RemoteMirror {
    url: String,
    branches: BTreeMap<BranchName, Option<CommitId>>,
    commits: HashMap<CommitId, Commit>,
}

impl RemoteMirror {
    pub fn new(url: String) -> Self {
        RemoteMirror {
            url,
            branches: BTreeMap::new(),
            commits: HashMap::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: String) {
        self.url = url;
    }

    /// Accept a pushed branch pointer plus the commits backing it
    ///
    /// The pointer is overwritten unconditionally; the mirror performs no
    /// fast-forward check. Existing commit records are kept as-is.
    pub fn receive(&mut self, branch: BranchName, tip: Option<CommitId>, pack: Vec<Commit>) {
        for commit in pack {
            self.commits.entry(commit.id().clone()).or_insert(commit);
        }
        self.branches.insert(branch, tip);
    }

    /// Tip of a mirrored branch, if the branch has ever been pushed bound
    pub fn branch_tip(&self, branch: &BranchName) -> Option<&CommitId> {
        self.branches.get(branch).and_then(Option::as_ref)
    }

    /// Every mirror commit reachable from a tip, for transfer on pull
    pub fn export_reachable(&self, tip: &CommitId) -> Vec<Commit> {
        collect_reachable(&self.commits, tip)
    }

    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    pub fn contains(&self, oid: &CommitId) -> bool {
        self.commits.contains_key(oid)
    }
}
