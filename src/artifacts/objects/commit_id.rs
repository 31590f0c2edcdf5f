//! Commit identifier
//!
//! Commit ids are 40-character hexadecimal strings. They are opaque handles
//! allocated when a commit is created, not content addresses: the sandbox
//! derives them from an allocation serial plus the commit message, so two
//! commits never collide but identical content does not deduplicate.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: First 7 characters (e.g., "abc123")

use crate::artifacts::objects::COMMIT_ID_LENGTH;
use crate::errors::Error;
use sha1::{Digest, Sha1};

/// Opaque commit identifier
///
/// A 40-character hexadecimal string that uniquely identifies a commit in
/// the database and in the remote mirror.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit id from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated CommitId or a parse error if the length or characters are
    /// invalid
    pub fn try_parse(id: String) -> crate::errors::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            return Err(Error::Parse(format!("invalid commit id length: {}", id.len())));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::Parse(format!("invalid commit id characters: {id}")));
        }
        Ok(Self(id.to_lowercase()))
    }

    /// Allocate a fresh commit id
    ///
    /// The serial comes from the database's allocation counter, which makes
    /// the id unique; the message is mixed in so ids differ visibly between
    /// runs of the same lesson.
    pub(crate) fn generate(serial: u64, message: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(format!("commit {serial}\0").as_bytes());
        hasher.update(message.as_bytes());

        let digest = hasher.finalize();
        let hex = digest.iter().map(|byte| format!("{byte:02x}")).collect();
        Self(hex)
    }

    /// Get the abbreviated form of the commit id
    ///
    /// # Returns
    ///
    /// First 7 characters of the id (standard short-hash abbreviation)
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
