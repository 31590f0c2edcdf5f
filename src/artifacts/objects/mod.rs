//! Commit objects
//!
//! - `commit`: authors, committer identity, and the immutable commit record
//! - `commit_id`: opaque commit identifiers
//! - `tree`: complete path-to-content snapshots

pub mod commit;
pub mod commit_id;
pub mod tree;

/// Length of a full commit id in hex characters
pub const COMMIT_ID_LENGTH: usize = 40;
