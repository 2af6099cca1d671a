//! Configuration file support.
//!
//! A project may carry a `bootstrap.toml` next to its sources to override the
//! default layout. Every field is optional:
//!
//! ```toml
//! [project]
//! name = "yajna"
//! dependencies = ["catch"]
//!
//! [paths]
//! source = "src"
//! pattern = "*.c++"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::util::errors::{Error, Result};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "bootstrap.toml";

/// Project configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Naming and extra inputs
    pub project: ProjectConfig,

    /// Filesystem layout
    pub paths: PathsConfig,
}

/// Naming and extra build inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Program name (defaults to the project directory name)
    pub name: Option<String>,

    /// Name of the test runner binary and alias
    pub test_name: String,

    /// Target built when ninja is run without arguments
    /// (defaults to the program)
    pub default_target: Option<String>,

    /// Vendored dependencies, each with headers in `deps/<name>/include`
    pub dependencies: Vec<String>,

    /// Extra preprocessor defines (`NAME` or `NAME=VALUE`)
    pub defines: Vec<String>,

    /// Extra libraries to link
    pub libs: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            name: None,
            test_name: "test".to_string(),
            default_target: None,
            dependencies: Vec::new(),
            defines: Vec::new(),
            libs: Vec::new(),
        }
    }
}

/// Filesystem layout of the project.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project headers
    pub include: PathBuf,

    /// Project sources
    pub source: PathBuf,

    /// Test sources
    pub test: PathBuf,

    /// Object file output root
    pub objects: PathBuf,

    /// Binary output root
    pub binaries: PathBuf,

    /// File name pattern of compilable sources
    pub pattern: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            include: PathBuf::from("include"),
            source: PathBuf::from("src"),
            test: PathBuf::from("test"),
            objects: PathBuf::from("obj"),
            binaries: PathBuf::from("bin"),
            pattern: "*.c++".to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| Error::config(CONFIG_FILE, e.to_string().trim_end()))
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read config: {}", path.display()), e))?;
        Self::parse(&contents)
    }

    /// Load the project's configuration, falling back to defaults if the
    /// file doesn't exist.
    pub fn load_or_default(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!("loading {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
