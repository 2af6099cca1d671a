//! Build graph records.
//!
//! A [`BuildGraph`] is a plain value: rules, edges and default targets in the
//! order they will be written. It mirrors ninja's model without any of its
//! syntax, which lives in [`crate::ninja`].

use std::collections::HashSet;

use crate::util::errors::{Error, Result};

/// Name of ninja's built-in alias rule.
pub const PHONY: &str = "phony";

/// A parameterised command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Rule name referenced by edges
    pub name: String,
    /// Command line, may reference `$in` and `$out`
    pub command: String,
    /// Short status line shown while the rule runs
    pub description: String,
    /// Depfile the command writes, if any
    pub depfile: Option<String>,
    /// Dependency syntax ninja should expect (`gcc` or `msvc`)
    pub deps: Option<String>,
    /// Whether the rule regenerates the graph itself
    pub generator: bool,
}

impl Rule {
    /// Create a rule with a command and description.
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Rule {
            name: name.into(),
            command: command.into(),
            description: description.into(),
            depfile: None,
            deps: None,
            generator: false,
        }
    }

    /// Track header dependencies through `depfile` in the given syntax.
    pub fn with_deps(mut self, depfile: impl Into<String>, deps: impl Into<String>) -> Self {
        self.depfile = Some(depfile.into());
        self.deps = Some(deps.into());
        self
    }

    /// Mark as the graph's generator rule.
    pub fn generator(mut self) -> Self {
        self.generator = true;
        self
    }
}

/// A concrete instance of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEdge {
    /// Rule to run
    pub rule: String,
    /// Explicit inputs (`$in`)
    pub inputs: Vec<String>,
    /// Outputs (`$out`)
    pub outputs: Vec<String>,
    /// Inputs that trigger a rebuild but are not passed to the command
    pub implicit: Vec<String>,
}

impl BuildEdge {
    /// Create an edge producing `output` with `rule`.
    pub fn new(output: impl Into<String>, rule: impl Into<String>) -> Self {
        BuildEdge {
            rule: rule.into(),
            inputs: Vec::new(),
            outputs: vec![output.into()],
            implicit: Vec::new(),
        }
    }

    /// Add an explicit input.
    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }

    /// Add explicit inputs.
    pub fn inputs(mut self, inputs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.inputs.extend(inputs.into_iter().map(|i| i.into()));
        self
    }

    /// Add implicit inputs.
    pub fn implicit(mut self, inputs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.implicit.extend(inputs.into_iter().map(|i| i.into()));
        self
    }
}

/// The complete graph handed to the writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildGraph {
    /// Top-level variables, in order
    pub variables: Vec<(String, String)>,
    /// Rules, each declared once
    pub rules: Vec<Rule>,
    /// Build edges in emission order
    pub edges: Vec<BuildEdge>,
    /// Targets built when none are requested
    pub defaults: Vec<String>,
}

impl BuildGraph {
    /// Look up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// The edge declaring `output`, if any.
    pub fn producer(&self, output: &str) -> Option<&BuildEdge> {
        self.edges
            .iter()
            .find(|e| e.outputs.iter().any(|o| o == output))
    }

    /// Edges using `rule`, in order.
    pub fn edges_with_rule<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a BuildEdge> {
        self.edges.iter().filter(move |e| e.rule == rule)
    }

    /// Check the graph is self-consistent.
    ///
    /// Every output must have exactly one producing edge, every edge must use
    /// a declared rule, and every explicit input must be one of `sources` or
    /// the output of an earlier edge.
    pub fn validate(&self, sources: &HashSet<String>) -> Result<()> {
        let mut produced: HashSet<&str> = HashSet::new();

        for edge in &self.edges {
            if edge.rule != PHONY && self.rule(&edge.rule).is_none() {
                return Err(Error::InvalidGraph {
                    message: format!("edge uses undeclared rule `{}`", edge.rule),
                });
            }

            for input in &edge.inputs {
                if !sources.contains(input) && !produced.contains(input.as_str()) {
                    return Err(Error::InvalidGraph {
                        message: format!("`{}` is neither a source nor an earlier output", input),
                    });
                }
            }

            for output in &edge.outputs {
                if !produced.insert(output.as_str()) {
                    return Err(Error::DuplicateOutput {
                        output: output.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
