//! Toolchain abstraction for C++ compilers.
//!
//! This module provides a unified interface for rendering compiler and linker
//! flags across the two supported toolchain families (GCC-like and MSVC).
//! Everything downstream works with `&dyn Toolchain` and never inspects which
//! family it is talking to.
//!
//! Executable resolution priority:
//! 1. Explicit `--cxx` override (used for both compiling and linking)
//! 2. The family defaults (`g++`, or `cl` and `link`)

use std::path::Path;

use crate::builder::flags::FlagList;
use crate::util::errors::{Error, Result};

mod detect;
mod gcc;
mod msvc;

pub use detect::ResolvedTools;
pub use gcc::GccToolchain;
pub use msvc::MsvcToolchain;

/// The family of a toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolchainFamily {
    /// GCC and compatible drivers (the native family)
    #[default]
    Gcc,
    /// Microsoft Visual C++
    Msvc,
}

impl ToolchainFamily {
    /// Get the family name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolchainFamily::Gcc => "gcc",
            ToolchainFamily::Msvc => "msvc",
        }
    }

    /// Instantiate the provider for this family.
    pub fn toolchain(self) -> Box<dyn Toolchain> {
        match self {
            ToolchainFamily::Gcc => Box::new(GccToolchain::new()),
            ToolchainFamily::Msvc => Box::new(MsvcToolchain::new()),
        }
    }
}

/// Which phase a flag is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LtoPhase {
    Compile,
    Link,
}

/// Dependency file syntax understood by ninja's `deps` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepsStyle {
    /// Makefile-style depfiles (`-MMD -MF`)
    Gcc,
    /// `/showIncludes` output parsed from the compiler's stdout
    Msvc,
}

impl DepsStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepsStyle::Gcc => "gcc",
            DepsStyle::Msvc => "msvc",
        }
    }
}

/// Optional features a toolchain may or may not be able to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    LinkTimeOptimisation,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::LinkTimeOptimisation => "link-time optimisation",
        }
    }
}

/// Trait for toolchain implementations.
///
/// Each toolchain knows the flag vocabulary of its compiler and linker. All
/// methods are pure functions of their arguments.
pub trait Toolchain: Send + Sync {
    /// Get the toolchain family.
    fn family(&self) -> ToolchainFamily;

    /// Default compiler executable.
    fn compiler(&self) -> &str;

    /// Default linker executable.
    fn linker(&self) -> &str;

    /// Whether this toolchain can render flags for `capability`.
    fn supports(&self, capability: Capability) -> bool;

    /// Include flag for the project's own headers.
    fn include_flag(&self, dir: &Path) -> FlagList;

    /// Include flag for third-party headers.
    ///
    /// May differ from [`Toolchain::include_flag`] so warnings from outside
    /// code can be suppressed.
    fn dependency_include_flag(&self, dir: &Path) -> FlagList;

    /// Preprocessor define, `NAME` or `NAME=VALUE`.
    fn define_flag(&self, define: &str) -> FlagList;

    /// Library to link, without prefix or extension.
    fn library_flag(&self, lib: &str) -> FlagList;

    /// Flags passed to every compile.
    fn cxx_flags(&self) -> FlagList;

    /// Flags for debug builds.
    fn debug_flags(&self) -> FlagList;

    /// Flags for optimised builds.
    fn optimisation_flags(&self) -> FlagList;

    /// Flags enabling as many warnings as the compiler offers.
    fn max_warnings(&self) -> FlagList;

    /// Flags passed to every link.
    fn link_flags(&self) -> FlagList;

    /// Link-time optimisation flags for `phase`, without the capability check.
    fn render_lto_flags(&self, phase: LtoPhase) -> FlagList;

    /// Link-time optimisation flags for `phase`.
    ///
    /// Fails instead of returning nothing when the toolchain has no LTO
    /// support, so a requested optimised build is never silently degraded.
    fn lto_flags(&self, phase: LtoPhase) -> Result<FlagList> {
        let capability = Capability::LinkTimeOptimisation;
        if !self.supports(capability) {
            return Err(Error::Capability {
                toolchain: self.family().as_str(),
                feature: capability.as_str(),
            });
        }
        Ok(self.render_lto_flags(phase))
    }

    /// Flags making the compiler report header dependencies into `depfile`.
    fn dependencies_output(&self, depfile: &str) -> FlagList;

    /// Dependency syntax this toolchain produces.
    fn deps_style(&self) -> DepsStyle;

    /// Prefix of include notes in compiler output, if ninja needs to be told.
    fn deps_prefix(&self) -> Option<&'static str> {
        None
    }

    /// Output flag for a compile producing `obj`.
    fn compiler_output(&self, obj: &str) -> FlagList;

    /// Output flag for a link producing `bin`.
    fn linker_output(&self, bin: &str) -> FlagList;

    /// Get the object file extension.
    fn object_extension(&self) -> &str;

    /// Get the executable suffix, including the dot if any.
    fn executable_extension(&self) -> &str;
}
