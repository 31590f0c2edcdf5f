//! Engine error taxonomy
//!
//! Every fallible engine operation returns one of these kinds. They are
//! values, not panics: the repository is never left partially updated by a
//! failed operation. A merge that detects conflicts is *not* an error; it is
//! reported as a normal `MergeOutcome::Conflicted` value by the merge
//! machinery.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Any operation other than `config` invoked before `init`
    #[error("repository is not initialized (run `init` first)")]
    NotInitialized,

    /// Commit attempted before both user.name and user.email are set
    #[error("committer identity is not configured (set user.name and user.email)")]
    IdentityMissing,

    /// Unknown branch, working file, or remote
    #[error("{0} not found")]
    NotFound(String),

    /// Branch name collision, or re-initialization
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// Commit attempted with an empty staging area
    #[error("nothing to commit (staging area is empty)")]
    NothingToCommit,

    /// Commit attempted with an empty message
    #[error("commit message must not be empty")]
    EmptyMessage,

    /// Malformed command line or invalid name
    #[error("parse error: {0}")]
    Parse(String),

    /// A command or argument outside the supported sandbox surface
    #[error("unsupported: {0}")]
    Unsupported(String),
}
