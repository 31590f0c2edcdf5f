use crate::areas::remote::{REMOTE_NAME, RemoteMirror};
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::commands::porcelain::merge::MergeOutcome;
use crate::errors::Error;

impl Repository {
    /// Configure the single supported remote
    ///
    /// Only `origin` is accepted; re-adding it replaces the URL, so a
    /// mistyped URL can be corrected without restarting the lesson.
    pub fn remote_add(&mut self, name: &str, url: &str) -> crate::errors::Result<()> {
        self.require_initialized()?;

        if name != REMOTE_NAME {
            return Err(Error::Unsupported(format!(
                "remote '{name}' (only '{REMOTE_NAME}' is supported)"
            )));
        }

        match self.remote_mut() {
            Some(remote) => remote.set_url(url.to_string()),
            None => self.set_remote(RemoteMirror::new(url.to_string())),
        }
        Ok(())
    }

    /// Copy a local branch pointer into the remote mirror
    ///
    /// The mirror's pointer is overwritten unconditionally: there is no
    /// fast-forward check and no rejection on divergence. All commits
    /// reachable from the tip travel along with it.
    ///
    /// # Returns
    ///
    /// The tip that was pushed, or `None` when the branch has no commits
    pub fn push(&mut self, branch: &str, _set_upstream: bool) -> crate::errors::Result<Option<CommitId>> {
        self.require_initialized()?;
        if self.remote().is_none() {
            return Err(Error::NotFound(format!("remote '{REMOTE_NAME}'")));
        }

        let branch = BranchName::try_parse(branch)?;
        let tip = self.refs().branch_tip(&branch)?.cloned();

        let pack = match &tip {
            Some(oid) => self.database().export_reachable(oid),
            None => Vec::new(),
        };

        if let Some(remote) = self.remote_mut() {
            remote.receive(branch, tip.clone(), pack);
        }

        Ok(tip)
    }

    /// Bring the current HEAD branch up to date with the mirror
    ///
    /// Requires a configured remote and a remote tip for the HEAD branch.
    /// Imports every reachable mirror commit, then fast-forwards an unborn
    /// local branch or runs the same three-way merge as `merge`.
    pub fn pull(&mut self) -> crate::errors::Result<MergeOutcome> {
        self.require_initialized()?;

        let head_branch = self.refs().head_branch().clone();
        let Some(remote) = self.remote() else {
            return Err(Error::NotFound(format!("remote '{REMOTE_NAME}'")));
        };
        let Some(remote_tip) = remote.branch_tip(&head_branch).cloned() else {
            return Err(Error::NotFound(format!(
                "remote branch '{REMOTE_NAME}/{head_branch}'"
            )));
        };
        let url = remote.url().to_string();
        let pack = remote.export_reachable(&remote_tip);

        for commit in pack {
            self.database_mut().import(commit);
        }

        let head_tip = self.refs().read_head().cloned();
        let message = format!("Merge branch '{head_branch}' of {url}");
        self.merge_tip(remote_tip, head_tip, message)
    }
}
