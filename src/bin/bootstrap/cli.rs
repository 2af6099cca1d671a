//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use bootstrap::{Options, ToolchainFamily};

/// Generate build.ninja for this project
#[derive(Parser)]
#[command(name = "bootstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Compile with debug information
    #[arg(long)]
    pub debug: bool,

    /// Compiler name to use (for both compiling and linking)
    #[arg(long, value_name = "executable")]
    pub cxx: Option<String>,

    /// Use the MSVC++ toolchain
    #[arg(long)]
    pub msvc: bool,

    /// Path of boost folder (i.e. the folder with include/ and lib/ subfolders)
    #[arg(long, value_name = "path")]
    pub boost_dir: Option<PathBuf>,

    /// Do not perform link-time optimisation
    #[arg(long)]
    pub no_lto: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The generation options these arguments describe.
    pub fn options(&self) -> Options {
        Options {
            debug: self.debug,
            cxx: self.cxx.clone(),
            family: if self.msvc {
                ToolchainFamily::Msvc
            } else {
                ToolchainFamily::Gcc
            },
            boost_dir: self.boost_dir.clone(),
            no_lto: self.no_lto,
        }
    }
}
