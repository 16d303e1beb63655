//! Utility functions

pub mod path;

pub use path::{normalize_path, relative_path};
