//! C++ build graph generation.
//!
//! This module holds the toolchain abstraction, source discovery and the
//! assembly of ninja rules and edges.

pub mod context;
pub mod flags;
pub mod graph;
pub mod plan;
pub mod sources;
pub mod toolchain;

pub use context::BuildContext;
pub use flags::FlagList;
pub use graph::{BuildEdge, BuildGraph, Rule};
pub use plan::{assemble, ProjectSources, Regeneration};
pub use sources::{SourceFile, SourceSet};
pub use toolchain::{
    DepsStyle, GccToolchain, LtoPhase, MsvcToolchain, ResolvedTools, Toolchain, ToolchainFamily,
};
