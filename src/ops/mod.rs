//! High-level operations.

pub mod configure;

pub use configure::{configure, generate, ConfigureResult};
