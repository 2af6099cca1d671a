//! CLI integration tests for bootstrap.
//!
//! These tests run the binary against small projects on disk and inspect the
//! generated build.ninja.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the bootstrap binary command.
fn bootstrap() -> Command {
    Command::cargo_bin("bootstrap").unwrap()
}

/// Create a small project with program and test sources.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("include/hlife")).unwrap();
    fs::create_dir_all(root.join("src/detail")).unwrap();
    fs::create_dir_all(root.join("test")).unwrap();
    fs::write(root.join("bootstrap.toml"), "[project]\nname = \"hlife\"\n").unwrap();
    fs::write(root.join("include/hlife/hlife.h++"), "#pragma once\n").unwrap();
    fs::write(root.join("src/main.c++"), "int main() {}\n").unwrap();
    fs::write(root.join("src/detail/world.c++"), "\n").unwrap();
    fs::write(root.join("test/main.c++"), "int main() {}\n").unwrap();
    tmp
}

fn graph(root: &Path) -> String {
    fs::read_to_string(root.join("build.ninja")).unwrap()
}

fn rule_command(graph: &str, rule: &str) -> String {
    let header = format!("rule {}\n", rule);
    let start = graph.find(&header).unwrap() + header.len();
    graph[start..]
        .lines()
        .next()
        .unwrap()
        .trim_start()
        .strip_prefix("command = ")
        .unwrap()
        .to_string()
}

// ============================================================================
// default toolchain
// ============================================================================

#[test]
fn test_generates_graph() {
    let tmp = project();

    bootstrap()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Generated"));

    let text = graph(tmp.path());
    assert!(text.contains("ninja_required_version = 1.3\n"));
    assert!(text.contains("build obj/src/detail/world.o: cxx src/detail/world.c++\n"));
    assert!(text.contains("build bin/hlife: link obj/src/detail/world.o obj/src/main.o\n"));
    assert!(text.contains("build hlife: phony bin/hlife\n"));
    assert!(text.contains("build obj/test/main.o: cxx test/main.c++\n"));
    assert!(text.contains("build test: phony bin/test\n"));
    assert!(text.contains("  generator = 1\n"));
    assert!(text.ends_with("default hlife\n"));
}

#[test]
fn test_release_build_uses_lto_in_both_phases() {
    let tmp = project();
    bootstrap().current_dir(tmp.path()).assert().success();

    let text = graph(tmp.path());
    assert!(rule_command(&text, "cxx").contains(" -O3 "));
    assert!(rule_command(&text, "cxx").contains(" -flto "));
    assert!(rule_command(&text, "link").contains(" -flto "));
}

#[test]
fn test_debug_build_has_no_lto() {
    let tmp = project();
    bootstrap()
        .arg("--debug")
        .current_dir(tmp.path())
        .assert()
        .success();

    let text = graph(tmp.path());
    let cxx = rule_command(&text, "cxx");
    assert!(cxx.contains(" -g "));
    assert!(!cxx.contains("-O3"));
    assert!(!cxx.contains("-flto"));
    assert!(!rule_command(&text, "link").contains("-flto"));
}

#[test]
fn test_no_lto() {
    let tmp = project();
    bootstrap()
        .arg("--no-lto")
        .current_dir(tmp.path())
        .assert()
        .success();

    let text = graph(tmp.path());
    assert!(!text.contains("-flto"));
    assert!(rule_command(&text, "bootstrap").ends_with(" --no-lto"));
}

#[test]
fn test_compiler_override() {
    let tmp = project();
    bootstrap()
        .args(["--cxx", "clang++"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let text = graph(tmp.path());
    assert!(rule_command(&text, "cxx").starts_with("clang++ "));
    assert!(rule_command(&text, "link").starts_with("clang++ "));
}

#[test]
fn test_boost_dir_is_a_dependency_include() {
    let tmp = project();
    fs::create_dir(tmp.path().join("boost")).unwrap();

    bootstrap()
        .args(["--boost-dir", "boost"])
        .current_dir(tmp.path())
        .assert()
        .success();

    assert!(rule_command(&graph(tmp.path()), "cxx").contains(" -isystemboost "));
}

// ============================================================================
// msvc toolchain
// ============================================================================

#[test]
fn test_msvc_toolchain() {
    let tmp = project();
    bootstrap()
        .arg("--msvc")
        .current_dir(tmp.path())
        .assert()
        .success();

    let text = graph(tmp.path());
    assert!(text.contains("msvc_deps_prefix = Note: including file:\n"));
    assert!(text.contains("  deps = msvc\n"));
    assert!(text.contains("build obj/src/main.obj: cxx src/main.c++\n"));
    assert!(text.contains("build hlife: phony bin/hlife.exe\n"));
    assert!(rule_command(&text, "cxx").contains(" /GL "));
    assert!(rule_command(&text, "link").contains(" /LTCG "));
}

// ============================================================================
// reproducibility and failures
// ============================================================================

#[test]
fn test_rerun_is_byte_identical() {
    let tmp = project();
    bootstrap().current_dir(tmp.path()).assert().success();
    let first = fs::read(tmp.path().join("build.ninja")).unwrap();

    bootstrap().current_dir(tmp.path()).assert().success();
    let second = fs::read(tmp.path().join("build.ninja")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_boost_dir_fails() {
    let tmp = project();

    bootstrap()
        .args(["--boost-dir", "nowhere"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--boost-dir"));

    assert!(!tmp.path().join("build.ninja").exists());
}

#[test]
fn test_invalid_config_fails() {
    let tmp = project();
    fs::write(
        tmp.path().join("bootstrap.toml"),
        "[project]\nname = \"hlife\"\ndefault_target = \"bench\"\n",
    )
    .unwrap();

    bootstrap()
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("project.default_target"));

    assert!(!tmp.path().join("build.ninja").exists());
}

#[test]
fn test_positional_arguments_rejected() {
    let tmp = project();

    bootstrap()
        .arg("build")
        .current_dir(tmp.path())
        .assert()
        .failure();
}
