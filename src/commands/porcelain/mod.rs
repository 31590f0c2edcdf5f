//! Engine operations
//!
//! One file per user-facing command. Every operation checks its
//! preconditions before mutating anything, returns a typed value, and
//! leaves user-visible messaging to the shell adapter.

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod config;
pub mod init;
pub mod log;
pub mod merge;
pub mod remote;
pub mod status;

pub use add::AddTarget;
pub use config::ConfigKey;
pub use merge::MergeOutcome;
