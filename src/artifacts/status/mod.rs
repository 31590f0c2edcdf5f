//! Working tree status classification

pub mod status_info;
