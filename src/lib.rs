//! Bootstrap - ninja build graph generator for C++ projects
//!
//! This crate scans a project's source trees and writes a `build.ninja`
//! that compiles and links them with either a GCC-like or an MSVC
//! toolchain. Ninja itself does the building and decides what is stale.

pub mod builder;
pub mod core;
pub mod ninja;
pub mod ops;
pub mod util;

pub use builder::{BuildContext, BuildGraph, Toolchain, ToolchainFamily};
pub use crate::core::{Layout, Options};
pub use ops::{configure, generate, ConfigureResult};
pub use util::errors::{Error, Result};
