//! MSVC toolchain implementation.

use std::path::Path;

use crate::builder::flags::FlagList;

use super::{Capability, DepsStyle, LtoPhase, Toolchain, ToolchainFamily};

/// Prefix `cl /showIncludes` puts in front of every included header.
const SHOW_INCLUDES_PREFIX: &str = "Note: including file:";

/// MSVC toolchain (Windows).
#[derive(Debug, Clone, Default)]
pub struct MsvcToolchain;

impl MsvcToolchain {
    /// Create a new MSVC toolchain.
    pub fn new() -> Self {
        MsvcToolchain
    }
}

impl Toolchain for MsvcToolchain {
    fn family(&self) -> ToolchainFamily {
        ToolchainFamily::Msvc
    }

    fn compiler(&self) -> &str {
        "cl"
    }

    fn linker(&self) -> &str {
        "link"
    }

    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::LinkTimeOptimisation => true,
        }
    }

    fn include_flag(&self, dir: &Path) -> FlagList {
        FlagList::new().arg(format!("/I{}", dir.display()))
    }

    fn dependency_include_flag(&self, dir: &Path) -> FlagList {
        self.include_flag(dir)
    }

    fn define_flag(&self, define: &str) -> FlagList {
        FlagList::new().arg(format!("/D{}", define))
    }

    fn library_flag(&self, lib: &str) -> FlagList {
        FlagList::new().arg(format!("{}.lib", lib))
    }

    fn cxx_flags(&self) -> FlagList {
        FlagList::new().args(["/nologo", "/EHsc", "/TP"])
    }

    fn debug_flags(&self) -> FlagList {
        FlagList::new().args(["/Od", "/Zi", "/MDd"])
    }

    fn optimisation_flags(&self) -> FlagList {
        FlagList::new().args(["/O2", "/MD", "/DNDEBUG"])
    }

    fn max_warnings(&self) -> FlagList {
        FlagList::new().args(["/W4", "/WX"])
    }

    fn link_flags(&self) -> FlagList {
        FlagList::new().arg("/nologo")
    }

    fn render_lto_flags(&self, phase: LtoPhase) -> FlagList {
        // Whole program optimisation is a codegen flag for cl and a separate
        // switch for link.exe
        match phase {
            LtoPhase::Compile => FlagList::new().arg("/GL"),
            LtoPhase::Link => FlagList::new().arg("/LTCG"),
        }
    }

    fn dependencies_output(&self, _depfile: &str) -> FlagList {
        FlagList::new().arg("/showIncludes")
    }

    fn deps_style(&self) -> DepsStyle {
        DepsStyle::Msvc
    }

    fn deps_prefix(&self) -> Option<&'static str> {
        Some(SHOW_INCLUDES_PREFIX)
    }

    fn compiler_output(&self, obj: &str) -> FlagList {
        FlagList::new().args(["/c".to_string(), format!("/Fo{}", obj)])
    }

    fn linker_output(&self, bin: &str) -> FlagList {
        FlagList::new().arg(format!("/OUT:{}", bin))
    }

    fn object_extension(&self) -> &str {
        "obj"
    }

    fn executable_extension(&self) -> &str {
        ".exe"
    }
}
