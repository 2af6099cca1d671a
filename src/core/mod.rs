//! Core data structures.

pub mod layout;
pub mod options;

pub use layout::Layout;
pub use options::Options;
