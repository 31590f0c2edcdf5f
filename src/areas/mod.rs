//! Core repository components
//!
//! This module contains the fundamental building blocks of the sandbox
//! repository:
//!
//! - `database`: append-only store of commit records
//! - `index`: staging area for the next commit
//! - `refs`: branch table and HEAD branch selection
//! - `remote`: the in-process remote mirror used by push/pull
//! - `repository`: the aggregate that owns all of the above
//! - `workspace`: the working set of editable files

pub mod database;
pub mod index;
pub mod refs;
pub mod remote;
pub mod repository;
pub mod workspace;
