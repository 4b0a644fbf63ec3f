/// Top-level errors and their exit codes.
use std::path::PathBuf;

use thiserror::Error;

use crate::flags::Tool;
use crate::tool::ToolError;

/// Exit code when the kubeconform binary is not installed.
pub const VALIDATOR_MISSING_EXIT: i32 = 127;

/// Everything that can end a run unsuccessfully.
#[derive(Debug, Error)]
pub enum WrapperError {
    /// The caller's arguments were rejected; carries clap's rendered message.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// A help query failed, so no flag set could be built.
    #[error("cannot read {tool} options: {source}")]
    Discovery {
        /// Tool that was queried.
        tool: Tool,
        /// Underlying failure.
        #[source]
        source: ToolError,
    },

    /// A pipeline step failed.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// One target of a multi-target run failed.
    #[error("{target} validation failed")]
    Target {
        /// Description of the failed target.
        target: String,
        /// Underlying failure.
        #[source]
        source: ToolError,
    },

    /// kubeconform is not where the plugin expects it.
    #[error("kubeconform not found at {}", path.display())]
    ValidatorMissing {
        /// Expected location.
        path: PathBuf,
    },

    /// The kubeconform installation script failed.
    #[error("kubeconform installation failed: {source}")]
    Install {
        /// Underlying failure.
        #[source]
        source: ToolError,
    },
}

impl WrapperError {
    /// Return the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(err) => err.exit_code(),
            Self::Discovery { source, .. }
            | Self::Tool(source)
            | Self::Target { source, .. }
            | Self::Install { source } => source.exit_code(),
            Self::ValidatorMissing { .. } => VALIDATOR_MISSING_EXIT,
        }
    }

    /// Whether the message still has to be written by the entry point.
    ///
    /// Tools print their own diagnostics and failed targets are logged
    /// where they fail.
    #[must_use]
    pub fn needs_report(&self) -> bool {
        match self {
            Self::Usage(_) | Self::Target { .. } => false,
            Self::Tool(source) | Self::Discovery { source, .. } | Self::Install { source } => {
                !source.tool_reported()
            }
            Self::ValidatorMissing { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn exited(code: i32) -> ToolError {
        ToolError::Exit {
            program: "helm".to_owned(),
            code,
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(WrapperError::Tool(exited(3)).exit_code(), 3);
        assert_eq!(
            WrapperError::Discovery {
                tool: Tool::Helm,
                source: exited(1),
            }
            .exit_code(),
            1
        );
        assert_eq!(
            WrapperError::Discovery {
                tool: Tool::Kubeconform,
                source: ToolError::Spawn {
                    program: "kubeconform".to_owned(),
                    source: io::Error::from_raw_os_error(2),
                },
            }
            .exit_code(),
            2
        );
        assert_eq!(
            WrapperError::ValidatorMissing {
                path: PathBuf::from("/plugins/kubeconform")
            }
            .exit_code(),
            VALIDATOR_MISSING_EXIT
        );
    }

    #[test]
    fn test_target_message() {
        let err = WrapperError::Target {
            target: "Helm chart charts/web".to_owned(),
            source: exited(2),
        };
        assert_eq!(err.to_string(), "Helm chart charts/web validation failed");
        assert_eq!(err.exit_code(), 2);
        assert!(!err.needs_report());
    }

    #[test]
    fn test_tool_exit_not_reported_twice() {
        assert!(!WrapperError::Tool(exited(1)).needs_report());
        assert!(
            WrapperError::Tool(ToolError::Spawn {
                program: "helm".to_owned(),
                source: io::Error::from_raw_os_error(2),
            })
            .needs_report()
        );
    }
}
