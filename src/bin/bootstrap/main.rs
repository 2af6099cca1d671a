//! Bootstrap CLI - writes build.ninja for the project in the current directory

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("bootstrap=debug")
    } else {
        EnvFilter::new("bootstrap=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let project_root = std::env::current_dir().context("failed to read current directory")?;
    let generator = std::env::current_exe().context("failed to locate the bootstrap executable")?;

    let result = bootstrap::configure(&project_root, &cli.options(), &generator)?;

    eprintln!("    Generated {}", result.graph_path.display());

    Ok(())
}
