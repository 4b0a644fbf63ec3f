/// Subprocess execution for the wrapped tools.
///
/// Every call blocks until the child exits. Standard error of the child is
/// always inherited so the tools report their own diagnostics.
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use super::errors::ToolError;

/// The seam between the wrapper and the operating system.
///
/// `argv[0]` is the program; the rest are its arguments.
pub trait ToolRunner {
    /// Run a command and return its captured standard output.
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the program cannot start or exits non-zero.
    fn capture(&self, argv: &[OsString]) -> Result<Vec<u8>, ToolError>;

    /// Run a command with `input` on its standard input and its standard
    /// output redirected to the wrapper's standard error.
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the program cannot start or exits non-zero.
    fn feed(&self, argv: &[OsString], input: &[u8]) -> Result<(), ToolError>;

    /// Run a command with extra environment variables, standard output
    /// redirected to the wrapper's standard error.
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the program cannot start or exits non-zero.
    fn relay(&self, argv: &[OsString], envs: &[(String, String)]) -> Result<(), ToolError>;
}

/// `ToolRunner` backed by `std::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn capture(&self, argv: &[OsString]) -> Result<Vec<u8>, ToolError> {
        let (mut command, program) = command_for(argv)?;
        let output = command
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| ToolError::Spawn {
                program: program.clone(),
                source,
            })?;
        check_status(output.status, program)?;
        Ok(output.stdout)
    }

    fn feed(&self, argv: &[OsString], input: &[u8]) -> Result<(), ToolError> {
        let (mut command, program) = command_for(argv)?;
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ToolError::Spawn {
                program: program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A validator may exit before draining its input; its status decides.
            match stdin.write_all(input) {
                Err(source) if source.kind() != io::ErrorKind::BrokenPipe => {
                    let _ = child.wait();
                    return Err(ToolError::Io { program, source });
                }
                _ => {}
            }
        }

        let status = child.wait().map_err(|source| ToolError::Io {
            program: program.clone(),
            source,
        })?;
        check_status(status, program)
    }

    fn relay(&self, argv: &[OsString], envs: &[(String, String)]) -> Result<(), ToolError> {
        let (mut command, program) = command_for(argv)?;
        let status = command
            .envs(envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ToolError::Spawn {
                program: program.clone(),
                source,
            })?;
        check_status(status, program)
    }
}

/// Render an argv for log messages, space-separated.
#[must_use]
pub fn command_line(argv: &[OsString]) -> String {
    argv.iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

fn command_for(argv: &[OsString]) -> Result<(Command, String), ToolError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(ToolError::Spawn {
            program: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty command line"),
        });
    };
    let mut command = Command::new(program);
    command.args(args);
    Ok((command, program.to_string_lossy().into_owned()))
}

fn check_status(status: ExitStatus, program: String) -> Result<(), ToolError> {
    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Exit {
            program,
            code: status_code(status),
        })
    }
}

/// Exit code of a finished child; `128 + signal` when it was killed.
fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
