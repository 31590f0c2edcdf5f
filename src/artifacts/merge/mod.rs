//! Merge algorithms
//!
//! - `base_finder`: nearest common ancestor search over first-parent chains
//! - `three_way`: per-file base/ours/theirs tree merging with conflict
//!   markers

pub mod base_finder;
pub mod three_way;

/// Macro for debug logging, enabled with the debug_merge feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Processing commit {}", commit_id);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use debug_log;
