use crate::areas::index::IndexEntry;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::base_finder::BaseFinder;
use crate::artifacts::merge::three_way::merge_trees;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::tree::Tree;

/// How a merge (or pull) ended
///
/// `Conflicted` is a normal, expected outcome, not an error: the merged
/// tree with conflict markers has been written to the working set, the
/// index is empty, and no commit was created. The user resolves by
/// editing, re-adding, and committing manually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Nothing to do: same tip, unbound other branch, or the other tip is
    /// already part of HEAD's history
    AlreadyUpToDate,
    /// The HEAD branch pointer jumped to the other tip; no commit created
    FastForward(CommitId),
    /// Clean divergent merge: an automatic two-parent commit was created
    Merged(Commit),
    /// Conflict-marked files were written to the working set; the affected
    /// paths are listed in sorted order
    Conflicted(Vec<String>),
}

impl Repository {
    /// Merge another branch's tip into the current HEAD branch
    pub fn merge(&mut self, other: &str) -> crate::errors::Result<MergeOutcome> {
        self.require_initialized()?;

        let other_name = BranchName::try_parse(other)?;
        let Some(other_tip) = self.refs().branch_tip(&other_name)?.cloned() else {
            // the other branch has no commits: nothing to merge
            return Ok(MergeOutcome::AlreadyUpToDate);
        };

        let head_tip = self.refs().read_head().cloned();
        let message = format!("Merge branch '{other_name}'");
        self.merge_tip(other_tip, head_tip, message)
    }

    /// Shared merge driver for `merge` and `pull`
    ///
    /// `theirs_tip` must already be present in the local database (pull
    /// imports the mirror's records first).
    pub(crate) fn merge_tip(
        &mut self,
        theirs_tip: CommitId,
        head_tip: Option<CommitId>,
        message: String,
    ) -> crate::errors::Result<MergeOutcome> {
        let Some(head_tip) = head_tip else {
            // no local commits yet: fast-forward
            self.fast_forward(theirs_tip.clone())?;
            return Ok(MergeOutcome::FastForward(theirs_tip));
        };

        if head_tip == theirs_tip {
            return Ok(MergeOutcome::AlreadyUpToDate);
        }

        let base = {
            let database = self.database();
            BaseFinder::new(|oid: &CommitId| database.slim(oid))
                .find_merge_base(&head_tip, &theirs_tip)
        };

        match &base {
            Some(oid) if *oid == theirs_tip => return Ok(MergeOutcome::AlreadyUpToDate),
            Some(oid) if *oid == head_tip => {
                // HEAD never diverged: pointer jump, no merge commit
                self.fast_forward(theirs_tip.clone())?;
                return Ok(MergeOutcome::FastForward(theirs_tip));
            }
            _ => {}
        }

        let base_tree = match &base {
            Some(oid) => self.database().load(oid)?.tree().clone(),
            // disjoint histories merge against an empty base
            None => Tree::new(),
        };
        let ours_tree = self.database().load(&head_tip)?.tree().clone();
        let theirs_tree = self.database().load(&theirs_tip)?.tree().clone();

        let merged = merge_trees(&base_tree, &ours_tree, &theirs_tree);

        if !merged.is_clean() {
            // terminal conflict state: marked files land in the working
            // set, the index stays empty, no commit is created
            for (path, content) in merged.tree.iter() {
                self.workspace_mut().write_file(path, content);
            }
            self.index_mut().clear();
            return Ok(MergeOutcome::Conflicted(merged.conflicts));
        }

        // a merge commit is needed: the identity must be configured before
        // anything is mutated (a conflicted merge never needs it)
        let author = self.identity().author()?;

        // stage the merged snapshot, then commit it with both parents
        self.index_mut().stage_snapshot(&merged.tree, &ours_tree);
        let mut tree = ours_tree;
        for (path, entry) in self.index().entries() {
            match entry {
                IndexEntry::Staged(content) => tree.insert(path, content.clone()),
                IndexEntry::Removed => tree.remove(path),
            }
        }

        let parents = vec![head_tip, theirs_tip];
        let id = self.database_mut().store(parents, tree, author, message);
        let commit = self.database().load(&id)?.clone();

        self.refs_mut().update_head(id);
        self.workspace_mut().reset_to_tree(commit.tree());
        self.index_mut().clear();

        Ok(MergeOutcome::Merged(commit))
    }

    /// Advance the HEAD branch pointer and reset index/working set
    fn fast_forward(&mut self, tip: CommitId) -> crate::errors::Result<()> {
        let tree = self.database().load(&tip)?.tree().clone();
        self.refs_mut().update_head(tip);
        self.index_mut().clear();
        self.workspace_mut().reset_to_tree(&tree);
        Ok(())
    }
}
