//! Generation options.

use std::path::{Path, PathBuf};

use crate::builder::toolchain::ToolchainFamily;
use crate::util::errors::{Error, Result};

/// Options controlling the generated graph.
///
/// Built once at startup and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Compile with debug information instead of optimising
    pub debug: bool,

    /// Compiler executable to use for both compiling and linking
    pub cxx: Option<String>,

    /// Toolchain family
    pub family: ToolchainFamily,

    /// Third-party include root (the boost folder with `include/` inside)
    pub boost_dir: Option<PathBuf>,

    /// Do not perform link-time optimisation
    pub no_lto: bool,
}

impl Options {
    /// Whether link-time optimisation flags are part of this build.
    pub fn lto_enabled(&self) -> bool {
        !self.debug && !self.no_lto
    }

    /// Check the options against the project at `project_root`.
    pub fn validate(&self, project_root: &Path) -> Result<()> {
        if let Some(cxx) = &self.cxx {
            if cxx.trim().is_empty() {
                return Err(Error::config("--cxx", "compiler name must not be empty"));
            }
        }

        if let Some(dir) = &self.boost_dir {
            let full = project_root.join(dir);
            if !full.is_dir() {
                return Err(Error::config(
                    "--boost-dir",
                    format!("`{}` is not a directory", dir.display()),
                ));
            }
        }

        Ok(())
    }

    /// Command-line arguments that reproduce these options.
    ///
    /// Used by the regeneration rule, so the output does not depend on how
    /// the flags were spelled on the original command line.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.debug {
            args.push("--debug".to_string());
        }
        if let Some(cxx) = &self.cxx {
            args.push("--cxx".to_string());
            args.push(cxx.clone());
        }
        if self.family == ToolchainFamily::Msvc {
            args.push("--msvc".to_string());
        }
        if let Some(dir) = &self.boost_dir {
            args.push("--boost-dir".to_string());
            args.push(dir.display().to_string());
        }
        if self.no_lto {
            args.push("--no-lto".to_string());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lto_enabled() {
        let mut opts = Options::default();
        assert!(opts.lto_enabled());

        opts.no_lto = true;
        assert!(!opts.lto_enabled());

        opts.no_lto = false;
        opts.debug = true;
        assert!(!opts.lto_enabled());
    }

    #[test]
    fn test_empty_cxx_rejected() {
        let tmp = TempDir::new().unwrap();
        let opts = Options {
            cxx: Some("  ".to_string()),
            ..Default::default()
        };
        let err = opts.validate(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("--cxx"));
    }

    #[test]
    fn test_missing_boost_dir_rejected() {
        let tmp = TempDir::new().unwrap();
        let opts = Options {
            boost_dir: Some(PathBuf::from("boost_1_55")),
            ..Default::default()
        };
        let err = opts.validate(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("--boost-dir"));

        std::fs::create_dir(tmp.path().join("boost_1_55")).unwrap();
        opts.validate(tmp.path()).unwrap();
    }

    #[test]
    fn test_to_args() {
        let opts = Options {
            debug: true,
            cxx: Some("clang++".to_string()),
            family: ToolchainFamily::Msvc,
            boost_dir: Some(PathBuf::from("/opt/boost")),
            no_lto: true,
        };
        assert_eq!(
            opts.to_args(),
            vec![
                "--debug",
                "--cxx",
                "clang++",
                "--msvc",
                "--boost-dir",
                "/opt/boost",
                "--no-lto"
            ]
        );
        assert!(Options::default().to_args().is_empty());
    }
}
