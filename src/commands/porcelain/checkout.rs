use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::tree::Tree;

impl Repository {
    /// Switch HEAD to another branch
    ///
    /// Clears the index, discarding uncommitted stages, and replaces the
    /// entire working set with the branch tip's tree; an unbound branch
    /// yields an empty working set.
    pub fn checkout(&mut self, name: &str) -> crate::errors::Result<BranchName> {
        self.require_initialized()?;

        let name = BranchName::try_parse(name)?;
        let tip = self.refs().branch_tip(&name)?.cloned();

        self.refs_mut().set_head_branch(&name)?;
        self.index_mut().clear();

        let tree = match tip {
            Some(oid) => self.database().load(&oid)?.tree().clone(),
            None => Tree::new(),
        };
        self.workspace_mut().reset_to_tree(&tree);

        Ok(name)
    }

    /// Create a branch and switch to it in one step
    ///
    /// Fails as a whole if the name already exists; the branch table and
    /// HEAD are untouched in that case.
    pub fn checkout_new(&mut self, name: &str) -> crate::errors::Result<BranchName> {
        self.require_initialized()?;

        let created = self.branch(name)?;
        self.checkout(created.as_ref())
    }
}
