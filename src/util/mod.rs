//! Shared utilities

pub mod config;
pub mod errors;
pub mod fs;

pub use config::Config;
pub use errors::{Error, Result};
