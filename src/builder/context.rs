//! Build context - toolchain, executables and assembled flag groups.

use std::fmt;
use std::sync::Arc;

use crate::builder::flags::FlagList;
use crate::builder::toolchain::{LtoPhase, ResolvedTools, Toolchain};
use crate::core::layout::Layout;
use crate::core::options::Options;
use crate::util::errors::Result;

/// Everything the graph assembler needs to know about the toolchain.
///
/// Flag groups are rendered once here; the assembler only places them into
/// rule commands.
#[derive(Clone)]
pub struct BuildContext {
    /// Toolchain implementation
    pub toolchain: Arc<dyn Toolchain>,

    /// Compiler and linker executables
    pub tools: ResolvedTools,

    /// Language, mode and LTO flags for compiling
    pub cxx_flags: FlagList,

    /// Warning flags for compiling
    pub warning_flags: FlagList,

    /// Project and third-party include roots
    pub include_flags: FlagList,

    /// Preprocessor defines
    pub define_flags: FlagList,

    /// Linker flags, including LTO when enabled
    pub ld_flags: FlagList,

    /// Libraries, placed after the objects
    pub lib_flags: FlagList,
}

impl fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildContext")
            .field("toolchain", &self.toolchain.family())
            .field("tools", &self.tools)
            .field("cxx_flags", &self.cxx_flags)
            .field("warning_flags", &self.warning_flags)
            .field("include_flags", &self.include_flags)
            .field("define_flags", &self.define_flags)
            .field("ld_flags", &self.ld_flags)
            .field("lib_flags", &self.lib_flags)
            .finish()
    }
}

impl BuildContext {
    /// Create a build context for the toolchain selected by `options`.
    pub fn new(options: &Options, layout: &Layout) -> Result<Self> {
        let toolchain: Arc<dyn Toolchain> = Arc::from(options.family.toolchain());
        Self::with_toolchain(toolchain, options, layout)
    }

    /// Create a build context for an explicit toolchain.
    pub fn with_toolchain(
        toolchain: Arc<dyn Toolchain>,
        options: &Options,
        layout: &Layout,
    ) -> Result<Self> {
        let tc = toolchain.as_ref();
        let tools = ResolvedTools::resolve(tc, options.cxx.as_deref());

        let mode_flags = if options.debug {
            tc.debug_flags()
        } else {
            tc.optimisation_flags()
        };
        let mut cxx_flags = tc.cxx_flags().extend(mode_flags);
        let mut ld_flags = tc.link_flags();
        if options.lto_enabled() {
            cxx_flags = cxx_flags.extend(tc.lto_flags(LtoPhase::Compile)?);
            ld_flags = ld_flags.extend(tc.lto_flags(LtoPhase::Link)?);
        }

        let warning_flags = tc.max_warnings();

        let mut include_flags = tc.include_flag(&layout.include_dir);
        for dir in &layout.dependency_includes {
            include_flags = include_flags.extend(tc.dependency_include_flag(dir));
        }
        if let Some(dir) = &options.boost_dir {
            include_flags = include_flags.extend(tc.dependency_include_flag(dir));
        }

        let define_flags = layout
            .defines
            .iter()
            .fold(FlagList::new(), |flags, d| flags.extend(tc.define_flag(d)));
        let lib_flags = layout
            .libs
            .iter()
            .fold(FlagList::new(), |flags, l| flags.extend(tc.library_flag(l)));

        tracing::debug!(
            "toolchain {}: compiler `{}`, linker `{}`",
            tc.family().as_str(),
            tools.compiler,
            tools.linker
        );

        Ok(BuildContext {
            toolchain,
            tools,
            cxx_flags,
            warning_flags,
            include_flags,
            define_flags,
            ld_flags,
            lib_flags,
        })
    }
}
