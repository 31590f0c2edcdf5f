//! Validated branch names
//!
//! Branch names are restricted to a conservative character set so lesson
//! scripts cannot create names the command grammar cannot refer back to.

use crate::errors::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    /// The branch `init` selects
    pub fn default_branch() -> Self {
        Self(crate::artifacts::branch::DEFAULT_BRANCH.to_string())
    }

    /// Parse and validate a branch name
    ///
    /// Allowed characters are alphanumerics plus `.`, `-`, `_`, and `/`;
    /// the name must be non-empty and must not start with `-` (it would be
    /// indistinguishable from a flag on the command line).
    pub fn try_parse(name: &str) -> crate::errors::Result<Self> {
        if name.is_empty() {
            return Err(Error::Parse("branch name cannot be empty".to_string()));
        }
        if name.starts_with('-') {
            return Err(Error::Parse(format!("invalid branch name: {name}")));
        }

        let valid = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '/'));
        if !valid {
            return Err(Error::Parse(format!("invalid branch name: {name}")));
        }

        Ok(Self(name.to_string()))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
