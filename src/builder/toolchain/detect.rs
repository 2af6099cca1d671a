//! Compiler and linker executable resolution.

use which::which;

use super::Toolchain;

/// The executables the generated rules invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTools {
    /// Executable for the compile rule
    pub compiler: String,
    /// Executable for the link rule
    pub linker: String,
}

impl ResolvedTools {
    /// Resolve the compiler and linker for `toolchain`.
    ///
    /// An explicit override replaces both executables. Executables are not
    /// required to exist: a missing one surfaces when ninja runs the build.
    pub fn resolve(toolchain: &dyn Toolchain, override_cxx: Option<&str>) -> Self {
        let tools = match override_cxx {
            Some(cxx) => ResolvedTools {
                compiler: cxx.to_string(),
                linker: cxx.to_string(),
            },
            None => ResolvedTools {
                compiler: toolchain.compiler().to_string(),
                linker: toolchain.linker().to_string(),
            },
        };

        for exe in [&tools.compiler, &tools.linker] {
            match which(exe) {
                Ok(path) => tracing::debug!("found `{}` at {}", exe, path.display()),
                Err(_) => tracing::warn!("`{}` not found in PATH", exe),
            }
        }

        tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::toolchain::{GccToolchain, MsvcToolchain};

    #[test]
    fn test_family_defaults() {
        let tools = ResolvedTools::resolve(&MsvcToolchain::new(), None);
        assert_eq!(tools.compiler, "cl");
        assert_eq!(tools.linker, "link");
    }

    #[test]
    fn test_override_applies_to_both_roles() {
        let tools = ResolvedTools::resolve(&MsvcToolchain::new(), Some("clang-cl"));
        assert_eq!(tools.compiler, "clang-cl");
        assert_eq!(tools.linker, "clang-cl");

        let tools = ResolvedTools::resolve(&GccToolchain::new(), Some("clang++"));
        assert_eq!(tools.compiler, "clang++");
        assert_eq!(tools.linker, "clang++");
    }
}
