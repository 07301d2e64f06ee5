//! Shared filesystem and path utilities

pub mod fs;
pub mod path;
