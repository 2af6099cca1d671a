//! Ninja file syntax.
//!
//! Serializes a [`BuildGraph`] into the text ninja reads. The format is
//! ninja's; nothing here makes decisions about the graph itself.

use std::fmt::Write;

use crate::builder::graph::{BuildEdge, BuildGraph, Rule};

/// Escape a literal string for use in a variable value or command.
pub fn escape(s: &str) -> String {
    s.replace('$', "$$")
}

/// Escape a path for use in a `build` line.
pub fn escape_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '$' => out.push_str("$$"),
            ' ' => out.push_str("$ "),
            ':' => out.push_str("$:"),
            _ => out.push(c),
        }
    }
    out
}

/// Incremental writer for ninja syntax.
#[derive(Debug, Default)]
pub struct Writer {
    out: String,
}

impl Writer {
    pub fn new() -> Self {
        Writer::default()
    }

    pub fn comment(&mut self, text: &str) {
        let _ = writeln!(self.out, "# {}", text);
    }

    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Write `key = value` at the given indentation level.
    pub fn variable(&mut self, key: &str, value: &str, indent: usize) {
        let _ = writeln!(self.out, "{}{} = {}", "  ".repeat(indent), key, value);
    }

    pub fn rule(&mut self, rule: &Rule) {
        let _ = writeln!(self.out, "rule {}", rule.name);
        self.variable("command", &rule.command, 1);
        self.variable("description", &rule.description, 1);
        if let Some(depfile) = &rule.depfile {
            self.variable("depfile", depfile, 1);
        }
        if let Some(deps) = &rule.deps {
            self.variable("deps", deps, 1);
        }
        if rule.generator {
            self.variable("generator", "1", 1);
        }
    }

    pub fn build(&mut self, edge: &BuildEdge) {
        let paths = |list: &[String]| {
            list.iter()
                .map(|p| escape_path(p))
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut line = format!("build {}: {}", paths(&edge.outputs), edge.rule);
        if !edge.inputs.is_empty() {
            line.push(' ');
            line.push_str(&paths(&edge.inputs));
        }
        if !edge.implicit.is_empty() {
            line.push_str(" | ");
            line.push_str(&paths(&edge.implicit));
        }
        let _ = writeln!(self.out, "{}", line);
    }

    pub fn defaults(&mut self, targets: &[String]) {
        let targets: Vec<_> = targets.iter().map(|t| escape_path(t)).collect();
        let _ = writeln!(self.out, "default {}", targets.join(" "));
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Render a whole graph.
pub fn to_string(graph: &BuildGraph) -> String {
    let mut w = Writer::new();
    w.comment("This file is generated by bootstrap. Do not edit.");
    w.newline();

    for (key, value) in &graph.variables {
        w.variable(key, value, 0);
    }
    w.newline();

    for rule in &graph.rules {
        w.rule(rule);
        w.newline();
    }

    for edge in &graph.edges {
        w.build(edge);
    }

    if !graph.defaults.is_empty() {
        w.newline();
        w.defaults(&graph.defaults);
    }

    w.finish()
}
