//! Branch table and HEAD
//!
//! References are human-readable branch names bound to a commit id, or
//! unbound for a branch with no commits yet. Exactly one branch is the HEAD
//! branch at any time; the engine never deletes a branch.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::Error;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct Refs {
    branches: BTreeMap<BranchName, Option<CommitId>>,
    head: BranchName,
}

impl Refs {
    /// Create the reference table with the default branch selected, unbound
    pub fn new() -> Self {
        let head = BranchName::default_branch();
        Refs {
            branches: BTreeMap::from([(head.clone(), None)]),
            head,
        }
    }

    pub fn head_branch(&self) -> &BranchName {
        &self.head
    }

    /// Tip commit of the HEAD branch, if it has one
    pub fn read_head(&self) -> Option<&CommitId> {
        self.branches.get(&self.head).and_then(Option::as_ref)
    }

    /// Advance the HEAD branch to a new tip
    pub fn update_head(&mut self, oid: CommitId) {
        self.branches.insert(self.head.clone(), Some(oid));
    }

    /// Switch HEAD to another existing branch
    pub fn set_head_branch(&mut self, name: &BranchName) -> crate::errors::Result<()> {
        if !self.branches.contains_key(name) {
            return Err(Error::NotFound(format!("branch '{name}'")));
        }
        self.head = name.clone();
        Ok(())
    }

    /// Bind a new branch name, failing on collision
    pub fn create_branch(
        &mut self,
        name: BranchName,
        tip: Option<CommitId>,
    ) -> crate::errors::Result<()> {
        if self.branches.contains_key(&name) {
            return Err(Error::AlreadyExists(format!("branch '{name}'")));
        }
        self.branches.insert(name, tip);
        Ok(())
    }

    /// Tip of a named branch; `NotFound` for unknown branches, `None` for a
    /// known branch with no commits yet
    pub fn branch_tip(&self, name: &BranchName) -> crate::errors::Result<Option<&CommitId>> {
        self.branches
            .get(name)
            .map(Option::as_ref)
            .ok_or_else(|| Error::NotFound(format!("branch '{name}'")))
    }

    pub fn contains(&self, name: &BranchName) -> bool {
        self.branches.contains_key(name)
    }

    /// Branch names in sorted order
    pub fn branch_names(&self) -> impl Iterator<Item = &BranchName> {
        self.branches.keys()
    }
}

impl Default for Refs {
    fn default() -> Self {
        Self::new()
    }
}
