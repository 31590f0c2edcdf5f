use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;

impl Repository {
    /// Bind a new branch name to the current HEAD tip
    ///
    /// The tip may be unbound when there are no commits yet; the branch is
    /// then created unbound too.
    pub fn branch(&mut self, name: &str) -> crate::errors::Result<BranchName> {
        self.require_initialized()?;

        let name = BranchName::try_parse(name)?;
        let tip = self.refs().read_head().cloned();
        self.refs_mut().create_branch(name.clone(), tip)?;

        Ok(name)
    }

    /// List branch names in sorted order
    pub fn branches(&self) -> crate::errors::Result<Vec<BranchName>> {
        self.require_initialized()?;
        Ok(self.refs().branch_names().cloned().collect())
    }
}
