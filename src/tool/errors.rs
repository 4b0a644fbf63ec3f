/// Errors from running the wrapped command-line tools.
use std::io;

use thiserror::Error;

/// Typed errors from the subprocess layer.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The executable could not be started (missing, not executable, ...).
    #[error("cannot run '{program}': {source}")]
    Spawn {
        /// Program as given on the command line.
        program: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The tool ran and exited unsuccessfully.
    #[error("'{program}' exited with status {code}")]
    Exit {
        /// Program as given on the command line.
        program: String,
        /// Exit status, or `128 + signal` when killed by a signal.
        code: i32,
    },

    /// Feeding standard input or collecting the child failed mid-run.
    #[error("I/O error while running '{program}': {source}")]
    Io {
        /// Program as given on the command line.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ToolError {
    /// Exit code the wrapper should terminate with for this failure.
    ///
    /// A spawn failure maps to its `errno` (2 for a missing executable),
    /// an unsuccessful run to the tool's own status.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Spawn { source, .. } => source.raw_os_error().filter(|c| *c != 0).unwrap_or(1),
            Self::Exit { code, .. } => *code,
            Self::Io { .. } => 1,
        }
    }

    /// Whether the tool itself ran and already reported the problem on its own stderr.
    #[must_use]
    pub fn tool_reported(&self) -> bool {
        matches!(self, Self::Exit { .. })
    }
}
