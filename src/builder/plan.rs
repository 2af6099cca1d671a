//! Build graph assembly.
//!
//! Turns a build context and the discovered source trees into the complete
//! list of ninja rules and edges. Assembly is pure: it performs no I/O and
//! the same inputs always give the same graph.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::builder::context::BuildContext;
use crate::builder::flags::{join_command, quote_arg};
use crate::builder::graph::{BuildEdge, BuildGraph, Rule, PHONY};
use crate::builder::sources::SourceSet;
use crate::core::layout::Layout;
use crate::ninja::escape;
use crate::util::errors::Result;

/// Path of the generated graph, relative to the project root.
pub const GRAPH_FILE: &str = "build.ninja";

/// Minimum ninja version understanding the generated syntax.
pub const NINJA_REQUIRED_VERSION: &str = "1.3";

/// Rule names.
pub const BOOTSTRAP_RULE: &str = "bootstrap";
pub const COMPILE_RULE: &str = "cxx";
pub const LINK_RULE: &str = "link";

/// How to re-run the generator when the graph is out of date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regeneration {
    /// The generator executable
    pub program: PathBuf,
    /// Arguments reproducing the current options
    pub args: Vec<String>,
    /// Files whose change must regenerate the graph, besides the generator
    pub inputs: Vec<PathBuf>,
}

/// The discovered sources of the project.
#[derive(Debug, Clone, Default)]
pub struct ProjectSources {
    /// Program sources
    pub program: SourceSet,
    /// Test runner sources
    pub tests: SourceSet,
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}

/// Assemble the complete build graph.
pub fn assemble(
    ctx: &BuildContext,
    layout: &Layout,
    regen: &Regeneration,
    sources: &ProjectSources,
) -> Result<BuildGraph> {
    let tc = ctx.toolchain.as_ref();

    let mut variables = vec![
        (
            "ninja_required_version".to_string(),
            NINJA_REQUIRED_VERSION.to_string(),
        ),
        ("builddir".to_string(), escape(&path_str(&layout.object_dir))),
    ];
    if let Some(prefix) = tc.deps_prefix() {
        variables.push(("msvc_deps_prefix".to_string(), prefix.to_string()));
    }

    let rules = vec![
        bootstrap_rule(regen),
        compile_rule(ctx),
        link_rule(ctx),
    ];

    let mut edges = Vec::new();

    // The graph regenerates itself when the generator or its config changes
    let regen_inputs = std::iter::once(&regen.program)
        .chain(regen.inputs.iter())
        .map(|p| path_str(p));
    edges.push(BuildEdge::new(GRAPH_FILE, BOOTSTRAP_RULE).implicit(regen_inputs));

    program_edges(
        &mut edges,
        &sources.program,
        &layout.binary_dir,
        &layout.program,
        tc.executable_extension(),
    );
    program_edges(
        &mut edges,
        &sources.tests,
        &layout.binary_dir,
        &layout.test_program,
        tc.executable_extension(),
    );

    let graph = BuildGraph {
        variables,
        rules,
        edges,
        defaults: vec![layout.default_target.clone()],
    };

    let known_sources: HashSet<String> = sources
        .program
        .iter()
        .chain(sources.tests.iter())
        .map(|f| path_str(&f.source))
        .collect();
    graph.validate(&known_sources)?;

    Ok(graph)
}

/// Compile every source, link the objects and alias the binary.
fn program_edges(
    edges: &mut Vec<BuildEdge>,
    sources: &SourceSet,
    binary_dir: &Path,
    name: &str,
    exe_ext: &str,
) {
    if sources.is_empty() {
        tracing::warn!("no sources for `{}`; its link step has no inputs", name);
    }

    for file in sources.iter() {
        edges.push(
            BuildEdge::new(path_str(&file.object), COMPILE_RULE).input(path_str(&file.source)),
        );
    }

    let binary = path_str(&binary_dir.join(format!("{}{}", name, exe_ext)));
    let objects = sources.iter().map(|f| path_str(&f.object));
    edges.push(BuildEdge::new(binary.clone(), LINK_RULE).inputs(objects));
    edges.push(BuildEdge::new(name, PHONY).input(binary));
}

fn bootstrap_rule(regen: &Regeneration) -> Rule {
    let program = quote_arg(&path_str(&regen.program));
    let args: Vec<String> = regen.args.iter().map(|a| quote_arg(a)).collect();
    let command = escape(&join_command(
        std::iter::once(program.as_str()).chain(args.iter().map(String::as_str)),
    ));
    Rule::new(BOOTSTRAP_RULE, command, "BOOTSTRAP").generator()
}

fn compile_rule(ctx: &BuildContext) -> Rule {
    let tc = ctx.toolchain.as_ref();
    let depfile = "$out.d";

    let compiler = escape(&quote_arg(&ctx.tools.compiler));
    let deps_output = tc.dependencies_output(depfile).join_quoted();
    let cxx_flags = escape(&ctx.cxx_flags.join_quoted());
    let warning_flags = escape(&ctx.warning_flags.join_quoted());
    let include_flags = escape(&ctx.include_flags.join_quoted());
    let define_flags = escape(&ctx.define_flags.join_quoted());
    let output = tc.compiler_output("$out").join_quoted();

    let command = join_command([
        compiler.as_str(),
        deps_output.as_str(),
        cxx_flags.as_str(),
        warning_flags.as_str(),
        include_flags.as_str(),
        define_flags.as_str(),
        "$in",
        output.as_str(),
    ]);

    Rule::new(COMPILE_RULE, command, "C++ $in").with_deps(depfile, tc.deps_style().as_str())
}

fn link_rule(ctx: &BuildContext) -> Rule {
    let tc = ctx.toolchain.as_ref();

    let linker = escape(&quote_arg(&ctx.tools.linker));
    let ld_flags = escape(&ctx.ld_flags.join_quoted());
    let output = tc.linker_output("$out").join_quoted();
    let lib_flags = escape(&ctx.lib_flags.join_quoted());

    let command = join_command([
        linker.as_str(),
        ld_flags.as_str(),
        "$in",
        output.as_str(),
        lib_flags.as_str(),
    ]);

    Rule::new(LINK_RULE, command, "LINK $out")
}
