use crate::areas::repository::Repository;
use crate::artifacts::log::FirstParentWalk;
use crate::artifacts::objects::commit::Commit;

impl Repository {
    /// Walk the first-parent history of HEAD, newest first
    ///
    /// Empty when the HEAD branch has no commits yet. A merge commit's
    /// second parent appears in the commit record but is not followed.
    pub fn log(&self) -> crate::errors::Result<Vec<Commit>> {
        self.require_initialized()?;

        let tip = self.refs().read_head().cloned();
        Ok(FirstParentWalk::new(self.database(), tip)
            .cloned()
            .collect())
    }
}
