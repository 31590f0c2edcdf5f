//! Data structures and algorithms
//!
//! This module contains the core types and algorithms of the sandbox:
//!
//! - `branch`: validated branch names
//! - `log`: first-parent commit history traversal
//! - `merge`: merge base finding and three-way tree merging
//! - `objects`: commits, commit ids, and trees
//! - `status`: working tree status classification

pub mod branch;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
