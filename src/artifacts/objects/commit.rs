//! Commit objects and committer identity
//!
//! Commits are immutable snapshots of the working set at a point in time.
//! They carry:
//! - A complete tree snapshot (never a delta)
//! - Parent commit id(s): none for the first commit, one for ordinary
//!   commits, two for merge commits
//! - Author information copied from the configured identity at commit time
//! - The commit message
//!
//! History is reconstructed by walking the first parent from any commit back
//! to a commit with no parents.

use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::Error;
use derive_new::new;

/// Author information stamped on a commit
///
/// Contains name, email, and the commit timestamp.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Author {
    /// Create a new author with the current timestamp
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Local::now().fixed_offset(),
        }
    }

    /// Create a new author with a specific timestamp
    pub fn new_with_timestamp(
        name: String,
        email: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Format author name and email for display
    ///
    /// # Returns
    ///
    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }
}

/// Configured committer identity
///
/// Pure value holder filled in by `config user.name` / `config user.email`.
/// Both fields must be non-empty before a commit can be created.
#[derive(Debug, Clone, Default, new)]
pub struct Identity {
    name: Option<String>,
    email: Option<String>,
}

impl Identity {
    pub fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    pub fn set_email(&mut self, email: String) {
        self.email = Some(email);
    }

    pub fn is_configured(&self) -> bool {
        let filled = |field: &Option<String>| {
            field.as_ref().is_some_and(|value| !value.trim().is_empty())
        };
        filled(&self.name) && filled(&self.email)
    }

    /// Produce an author stamped with the current time
    ///
    /// # Returns
    ///
    /// An `Author` for the next commit, or `IdentityMissing` unless both
    /// name and email are configured and non-empty
    pub fn author(&self) -> crate::errors::Result<Author> {
        if !self.is_configured() {
            return Err(Error::IdentityMissing);
        }

        Ok(Author::new(
            self.name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
        ))
    }
}

/// Immutable commit record
///
/// Created only by a successful `commit` or the automatic merge-commit step
/// of `merge`/`pull`. Never mutated or deleted once stored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Allocated at creation time, unique within database and mirror
    id: CommitId,
    /// Parent commit ids (empty for the first commit, two for merges)
    parents: Vec<CommitId>,
    /// Complete snapshot of the repository at this commit
    tree: Tree,
    /// Author copied from the identity at commit time
    author: Author,
    /// Commit message
    message: String,
}

impl Commit {
    pub fn new(
        id: CommitId,
        parents: Vec<CommitId>,
        tree: Tree,
        author: Author,
        message: String,
    ) -> Self {
        Commit {
            id,
            parents,
            tree,
            author,
            message,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn parents(&self) -> &[CommitId] {
        &self.parents
    }

    /// First parent, the one history traversal follows
    pub fn first_parent(&self) -> Option<&CommitId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Get the first line of the commit message
    ///
    /// Useful for short-form display (e.g., `log --oneline`)
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.author.timestamp()
    }
}
