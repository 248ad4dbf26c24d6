//! Errors surfaced to the user by the `tractorbeam` binary.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Anything that stops a command from completing.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// A location definition could not be read.
    #[error("cannot read {}", path.display())]
    #[diagnostic(code(tractorbeam::read))]
    Read {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },

    /// An export could not be written.
    #[error("cannot write {}", path.display())]
    #[diagnostic(code(tractorbeam::write))]
    Write {
        /// The output file.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },

    /// The location definition has errors; they were already printed.
    #[error("the location definition has {count} error(s)")]
    #[diagnostic(
        code(tractorbeam::locations),
        help("fix the problems reported above and run `tractorbeam check` again")
    )]
    InvalidLocations {
        /// Number of error diagnostics.
        count: usize,
    },

    /// The game engine refused to continue.
    #[error(transparent)]
    Fiction(#[from] tb_fiction::FictionError),

    /// The graph could not be serialized.
    #[error("cannot serialize the location graph")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed mid-game.
    #[error("terminal I/O failed")]
    Terminal(#[from] io::Error),
}
