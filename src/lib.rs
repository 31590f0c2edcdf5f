//! An in-memory version-control sandbox
//!
//! `gitling` simulates a distributed version-control workflow (commit graph,
//! branches, staging area, three-way merge, simulated remote) entirely in
//! memory, so version-control commands can be practiced against a safe
//! sandbox that behaves like the real thing for single-parent history,
//! fast-forward, and conflict-marked merges.
//!
//! The crate is organized into three layers:
//!
//! - `areas`: the repository components (commit database, index, workspace,
//!   refs, remote mirror) and the `Repository` aggregate that owns them
//! - `artifacts`: data types and algorithms (commits, trees, branch names,
//!   merge base finding, three-way merge, status classification, history
//!   traversal)
//! - `commands`: user-facing operations implemented on `Repository`, plus
//!   the line-oriented command parser and shell adapter

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::repository::Repository;
pub use commands::shell::Shell;
pub use errors::{Error, Result};
