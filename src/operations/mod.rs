//! Operations module
//!
//! Coordinates the conversion pipeline: input enumeration and per-file
//! HTML rendering

pub mod convert;
pub mod enumerate;
pub mod render;

pub use convert::*;
pub use enumerate::*;
pub use render::*;
