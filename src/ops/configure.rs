//! Implementation of `bootstrap`: generate `build.ninja` for a project.

use std::path::{Path, PathBuf};

use crate::builder::plan::{assemble, ProjectSources, Regeneration, GRAPH_FILE};
use crate::builder::sources::SourceSet;
use crate::builder::{BuildContext, BuildGraph};
use crate::core::layout::Layout;
use crate::core::options::Options;
use crate::ninja;
use crate::util::config::{Config, CONFIG_FILE};
use crate::util::errors::Result;
use crate::util::fs::write_atomically;

/// Result of a successful configuration.
#[derive(Debug)]
pub struct ConfigureResult {
    /// Where the graph was written
    pub graph_path: PathBuf,
    /// The graph that was written
    pub graph: BuildGraph,
}

/// Build the graph for the project at `project_root` without writing it.
///
/// `generator` is the executable the regeneration rule re-runs.
pub fn generate(project_root: &Path, options: &Options, generator: &Path) -> Result<BuildGraph> {
    options.validate(project_root)?;

    let config = Config::load_or_default(project_root)?;
    let layout = Layout::from_config(&config, project_root)?;

    let ctx = BuildContext::new(options, &layout)?;
    let object_ext = ctx.toolchain.object_extension().to_string();

    let discover = |root: &Path| {
        SourceSet::discover(
            project_root,
            root,
            &layout.pattern,
            &layout.object_dir,
            &object_ext,
        )
    };
    let sources = ProjectSources {
        program: discover(&layout.source_dir)?,
        tests: discover(&layout.test_dir)?,
    };

    let mut inputs = Vec::new();
    if project_root.join(CONFIG_FILE).exists() {
        inputs.push(PathBuf::from(CONFIG_FILE));
    }
    let regen = Regeneration {
        program: generator.to_path_buf(),
        args: options.to_args(),
        inputs,
    };

    assemble(&ctx, &layout, &regen, &sources)
}

/// Generate and write `build.ninja` for the project at `project_root`.
///
/// Nothing is written unless the whole graph could be built.
pub fn configure(
    project_root: &Path,
    options: &Options,
    generator: &Path,
) -> Result<ConfigureResult> {
    let graph = generate(project_root, options, generator)?;

    let graph_path = project_root.join(GRAPH_FILE);
    write_atomically(&graph_path, &ninja::to_string(&graph))?;

    tracing::info!(
        "wrote {} ({} edges)",
        graph_path.display(),
        graph.edges.len()
    );

    Ok(ConfigureResult { graph_path, graph })
}
