//! Branch names

pub mod branch_name;

/// Branch selected by `init`
pub const DEFAULT_BRANCH: &str = "main";
