use crate::areas::index::IndexEntry;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::Error;

impl Repository {
    /// Turn the index into a new commit on the HEAD branch
    ///
    /// Preconditions, checked in order before any mutation: repository
    /// initialized, identity configured, message non-empty, index
    /// non-empty. The new tree is the HEAD tree with every index entry
    /// applied on top (deletion markers remove their path). This is the
    /// only path by which the commit database grows locally.
    pub fn commit(&mut self, message: &str) -> crate::errors::Result<Commit> {
        self.require_initialized()?;
        let author = self.identity().author()?;

        let message = message.trim();
        if message.is_empty() {
            return Err(Error::EmptyMessage);
        }
        if self.index().is_empty() {
            return Err(Error::NothingToCommit);
        }

        let mut tree = self.head_tree()?;
        for (path, entry) in self.index().entries() {
            match entry {
                IndexEntry::Staged(content) => tree.insert(path, content.clone()),
                IndexEntry::Removed => tree.remove(path),
            }
        }

        let parents = self.refs().read_head().cloned().into_iter().collect();
        let id = self
            .database_mut()
            .store(parents, tree, author, message.to_string());
        let commit = self.database().load(&id)?.clone();

        self.refs_mut().update_head(id);
        for path in commit.tree().paths() {
            self.workspace_mut().mark_tracked(path);
        }
        self.index_mut().clear();

        Ok(commit)
    }
}
