//! Status report
//!
//! The classification produced by `status`:
//! - staged: index content differs from the HEAD tree content
//! - modified: working content differs from the HEAD tree and the path is
//!   not staged
//! - untracked: path has no HEAD tree entry and is not staged
//!
//! A path staged identically to HEAD is not reported at all.

/// Read-only classification of every interesting path, sorted by path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub staged: Vec<String>,
    pub modified: Vec<String>,
    pub untracked: Vec<String>,
}

impl StatusReport {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty() && self.untracked.is_empty()
    }
}

/// Short-format status code for a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileStatus {
    Staged,
    Modified,
    Untracked,
}

impl From<FileStatus> for &str {
    fn from(status: FileStatus) -> Self {
        match status {
            FileStatus::Staged => "A ",
            FileStatus::Modified => " M",
            FileStatus::Untracked => "??",
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status_str: &str = (*self).into();
        write!(f, "{status_str}")
    }
}
