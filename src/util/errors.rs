//! Error types for graph generation.
//!
//! Every failure aborts generation; nothing here is retried or recovered.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error raised while configuring the build graph.
#[derive(Debug, Error)]
pub enum Error {
    /// An option (CLI or `bootstrap.toml`) is invalid or contradicts another.
    #[error("invalid option `{option}`: {message}")]
    Configuration { option: String, message: String },

    /// A source tree could not be walked.
    #[error("failed to scan `{}`", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Two sources in one tree derive the same object path.
    #[error("`{}` and `{}` both map to object `{}`\n\
             help: rename one of the sources",
             first.display(), second.display(), object.display())]
    ObjectCollision {
        first: PathBuf,
        second: PathBuf,
        object: PathBuf,
    },

    /// More than one edge declares the same output.
    #[error("output `{output}` is produced by more than one build edge")]
    DuplicateOutput { output: String },

    /// An edge refers to something the graph does not define.
    #[error("inconsistent build graph: {message}")]
    InvalidGraph { message: String },

    /// The toolchain cannot render flags for a requested feature.
    #[error("toolchain `{toolchain}` does not support {feature}")]
    Capability {
        toolchain: &'static str,
        feature: &'static str,
    },

    /// Reading configuration or writing the graph failed.
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Create a configuration error for `option`.
    pub fn config(option: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Configuration {
            option: option.into(),
            message: message.into(),
        }
    }

    /// Wrap an I/O error with a description of what was being attempted.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }
}
