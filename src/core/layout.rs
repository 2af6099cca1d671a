//! Project layout.
//!
//! Where headers, sources and tests live, where outputs go, and what the
//! binaries are called.

use std::path::{Component, Path, PathBuf};

use glob::Pattern;

use crate::util::config::Config;
use crate::util::errors::{Error, Result};

/// Fallback program name when the project directory has no usable name.
const FALLBACK_PROGRAM: &str = "main";

/// The validated project layout.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Project headers
    pub include_dir: PathBuf,
    /// Project sources
    pub source_dir: PathBuf,
    /// Test sources
    pub test_dir: PathBuf,
    /// Object output root
    pub object_dir: PathBuf,
    /// Binary output root
    pub binary_dir: PathBuf,
    /// Pattern selecting compilable sources by file name
    pub pattern: Pattern,
    /// Program binary and alias name
    pub program: String,
    /// Test runner binary and alias name
    pub test_program: String,
    /// Alias built by default
    pub default_target: String,
    /// Include roots of vendored dependencies
    pub dependency_includes: Vec<PathBuf>,
    /// Extra preprocessor defines
    pub defines: Vec<String>,
    /// Extra libraries to link
    pub libs: Vec<String>,
}

impl Layout {
    /// Build and validate the layout for the project at `project_root`.
    pub fn from_config(config: &Config, project_root: &Path) -> Result<Self> {
        let paths = &config.paths;
        let project = &config.project;

        let pattern = Pattern::new(&paths.pattern)
            .map_err(|e| Error::config("paths.pattern", e.to_string()))?;

        let source_dir = project_root_relative("paths.source", &paths.source)?;
        let test_dir = project_root_relative("paths.test", &paths.test)?;
        let object_dir = project_root_relative("paths.objects", &paths.objects)?;
        let binary_dir = project_root_relative("paths.binaries", &paths.binaries)?;

        if source_dir.starts_with(&test_dir) || test_dir.starts_with(&source_dir) {
            return Err(Error::config(
                "paths.test",
                format!(
                    "test sources (`{}`) must not overlap project sources (`{}`)",
                    paths.test.display(),
                    paths.source.display()
                ),
            ));
        }

        let program = match &project.name {
            Some(name) => name.clone(),
            None => default_program_name(project_root),
        };
        validate_alias("project.name", &program)?;
        validate_alias("project.test_name", &project.test_name)?;
        if program == project.test_name {
            return Err(Error::config(
                "project.test_name",
                format!("`{}` is already the program name", program),
            ));
        }

        let default_target = project
            .default_target
            .clone()
            .unwrap_or_else(|| program.clone());
        if default_target != program && default_target != project.test_name {
            return Err(Error::config(
                "project.default_target",
                format!(
                    "`{}` is not a known target (expected `{}` or `{}`)",
                    default_target, program, project.test_name
                ),
            ));
        }

        let dependency_includes = project
            .dependencies
            .iter()
            .map(|d| Path::new("deps").join(d).join("include"))
            .collect();

        Ok(Layout {
            include_dir: paths.include.clone(),
            source_dir,
            test_dir,
            object_dir,
            binary_dir,
            pattern,
            program,
            test_program: project.test_name.clone(),
            default_target,
            dependency_includes,
            defines: project.defines.clone(),
            libs: project.libs.clone(),
        })
    }
}

/// Normalise a source or output root, which must stay inside the project.
///
/// Object paths mirror source paths under the object root, so a root that is
/// absolute or climbs out with `..` would place objects outside it. `.`
/// components are dropped; the project root itself is not a valid root.
fn project_root_relative(option: &str, path: &Path) -> Result<PathBuf> {
    let mut normalised = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => normalised.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::config(
                    option,
                    format!(
                        "`{}` must be a relative path inside the project",
                        path.display()
                    ),
                ));
            }
        }
    }
    if normalised.as_os_str().is_empty() {
        return Err(Error::config(
            option,
            format!("`{}` must name a directory below the project root", path.display()),
        ));
    }
    Ok(normalised)
}

/// Name the program after the project directory.
fn default_program_name(project_root: &Path) -> String {
    project_root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| FALLBACK_PROGRAM.to_string())
}

/// Aliases become ninja targets and file names.
fn validate_alias(option: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::config(option, "name must not be empty"));
    }
    if name.contains(|c: char| c.is_whitespace() || matches!(c, '/' | '\\' | ':' | '$')) {
        return Err(Error::config(
            option,
            format!("`{}` contains characters not allowed in a target name", name),
        ));
    }
    Ok(())
}
