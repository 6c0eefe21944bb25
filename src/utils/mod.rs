//! Utility modules for the report CLI.

pub mod colors;
pub mod format;

pub use colors::*;
pub use format::*;
