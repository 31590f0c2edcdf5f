//! Repository aggregate
//!
//! Owns every component of the sandbox: the committer identity, commit
//! database, index, workspace, branch table, and the optional remote
//! mirror. The repository is an explicit constructor-created value passed
//! to every operation; there is no process-wide state, so independent
//! instances (one per practicing user) never interact.
//!
//! All engine operations are implemented on this type in
//! `crate::commands::porcelain`, one file per command.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::remote::RemoteMirror;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Identity;
use crate::artifacts::objects::tree::Tree;
use crate::errors::Error;

#[derive(Debug, Default)]
pub struct Repository {
    identity: Identity,
    database: Database,
    index: Index,
    workspace: Workspace,
    refs: Refs,
    remote: Option<RemoteMirror>,
    initialized: bool,
}

impl Repository {
    /// Create an empty, uninitialized repository
    ///
    /// Only `config` works before `init` is run.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    pub(crate) fn require_initialized(&self) -> crate::errors::Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub(crate) fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub(crate) fn database_mut(&mut self) -> &mut Database {
        &mut self.database
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub(crate) fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub(crate) fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub(crate) fn refs_mut(&mut self) -> &mut Refs {
        &mut self.refs
    }

    pub fn remote(&self) -> Option<&RemoteMirror> {
        self.remote.as_ref()
    }

    pub(crate) fn remote_mut(&mut self) -> Option<&mut RemoteMirror> {
        self.remote.as_mut()
    }

    pub(crate) fn set_remote(&mut self, remote: RemoteMirror) {
        self.remote = Some(remote);
    }

    /// Create or edit a working file
    ///
    /// This is the editing boundary the excluded presentation layer would
    /// call; tests and the shell's `echo` helper use it directly.
    pub fn write_file(
        &mut self,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> crate::errors::Result<()> {
        self.require_initialized()?;
        self.workspace.write_file(path, content);
        Ok(())
    }

    /// Read a working file's current content
    pub fn read_file(&self, path: &str) -> crate::errors::Result<&str> {
        self.require_initialized()?;
        self.workspace.read_file(path)
    }

    /// Snapshot of the current HEAD commit's tree, or an empty tree when
    /// the HEAD branch has no commits yet
    pub(crate) fn head_tree(&self) -> crate::errors::Result<Tree> {
        match self.refs.read_head() {
            Some(oid) => Ok(self.database.load(oid)?.tree().clone()),
            None => Ok(Tree::new()),
        }
    }
}
