//! GCC/Clang toolchain implementation.

use std::path::Path;

use crate::builder::flags::FlagList;

use super::{Capability, DepsStyle, LtoPhase, Toolchain, ToolchainFamily};

/// GCC-like toolchain (Unix-like systems, MinGW, clang).
#[derive(Debug, Clone, Default)]
pub struct GccToolchain;

impl GccToolchain {
    /// Create a new GCC-style toolchain.
    pub fn new() -> Self {
        GccToolchain
    }
}

impl Toolchain for GccToolchain {
    fn family(&self) -> ToolchainFamily {
        ToolchainFamily::Gcc
    }

    fn compiler(&self) -> &str {
        "g++"
    }

    fn linker(&self) -> &str {
        // The driver links so it pulls in the C++ runtime
        "g++"
    }

    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::LinkTimeOptimisation => true,
        }
    }

    fn include_flag(&self, dir: &Path) -> FlagList {
        FlagList::new().arg(format!("-I{}", dir.display()))
    }

    fn dependency_include_flag(&self, dir: &Path) -> FlagList {
        // System headers do not trigger warnings
        FlagList::new().arg(format!("-isystem{}", dir.display()))
    }

    fn define_flag(&self, define: &str) -> FlagList {
        FlagList::new().arg(format!("-D{}", define))
    }

    fn library_flag(&self, lib: &str) -> FlagList {
        FlagList::new().arg(format!("-l{}", lib))
    }

    fn cxx_flags(&self) -> FlagList {
        FlagList::new().args(["-std=c++14", "-pthread"])
    }

    fn debug_flags(&self) -> FlagList {
        FlagList::new().arg("-g")
    }

    fn optimisation_flags(&self) -> FlagList {
        FlagList::new().args(["-O3", "-DNDEBUG"])
    }

    fn max_warnings(&self) -> FlagList {
        FlagList::new().args(["-Wall", "-Wextra", "-pedantic-errors", "-Werror"])
    }

    fn link_flags(&self) -> FlagList {
        FlagList::new().arg("-pthread")
    }

    fn render_lto_flags(&self, _phase: LtoPhase) -> FlagList {
        // Both the compile and the link need -flto
        FlagList::new().arg("-flto")
    }

    fn dependencies_output(&self, depfile: &str) -> FlagList {
        FlagList::new().args(["-MMD", "-MF", depfile])
    }

    fn deps_style(&self) -> DepsStyle {
        DepsStyle::Gcc
    }

    fn compiler_output(&self, obj: &str) -> FlagList {
        FlagList::new().args(["-c", "-o", obj])
    }

    fn linker_output(&self, bin: &str) -> FlagList {
        FlagList::new().args(["-o", bin])
    }

    fn object_extension(&self) -> &str {
        "o"
    }

    fn executable_extension(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_include_suppresses_warnings() {
        let tc = GccToolchain::new();
        assert_eq!(tc.include_flag(Path::new("include")).join(), "-Iinclude");
        assert_eq!(
            tc.dependency_include_flag(Path::new("/opt/boost")).join(),
            "-isystem/opt/boost"
        );
    }

    #[test]
    fn test_mode_flags_define_nothing_project_specific() {
        let tc = GccToolchain::new();
        assert_eq!(tc.debug_flags().join(), "-g");
        assert_eq!(tc.optimisation_flags().join(), "-O3 -DNDEBUG");
    }

    #[test]
    fn test_lto_same_flag_both_phases() {
        let tc = GccToolchain::new();
        assert_eq!(tc.lto_flags(LtoPhase::Compile).unwrap().join(), "-flto");
        assert_eq!(tc.lto_flags(LtoPhase::Link).unwrap().join(), "-flto");
    }

    #[test]
    fn test_output_flags() {
        let tc = GccToolchain::new();
        assert_eq!(tc.compiler_output("$out").join(), "-c -o $out");
        assert_eq!(tc.linker_output("bin/app").join(), "-o bin/app");
        assert_eq!(tc.dependencies_output("$out.d").join(), "-MMD -MF $out.d");
        assert_eq!(tc.deps_style().as_str(), "gcc");
        assert_eq!(tc.deps_prefix(), None);
    }

    #[test]
    fn test_platform_conventions() {
        let tc = GccToolchain::new();
        assert_eq!(tc.compiler(), "g++");
        assert_eq!(tc.linker(), "g++");
        assert_eq!(tc.object_extension(), "o");
        assert_eq!(tc.executable_extension(), "");
        assert_eq!(tc.library_flag("m").join(), "-lm");
        assert_eq!(tc.define_flag("FOO=1").join(), "-DFOO=1");
    }
}
