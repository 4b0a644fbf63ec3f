/// CLI argument definitions.
///
/// The plugin parser is assembled at runtime from the discovered flag set;
/// the pre-commit front end is a fixed clap derive.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, Parser, ValueEnum};

use crate::flags::{FlagDescriptor, FlagSet, ValueKind};

/// Positional id: chart reference.
pub const CHART: &str = "chart";
/// Positional id: values files.
pub const VALUES: &str = "values";
/// Positional id: files belonging to charts.
pub const CHART_FILES: &str = "chart_files";

/// Which positional arguments the plugin parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One chart.
    Chart,
    /// One chart validated once per values file.
    ValuesFiles,
    /// Files whose enclosing charts are validated.
    ChartFiles,
}

/// Build the plugin argument parser for `mode` from the discovered flags.
#[must_use]
pub fn build_command(program: &str, flags: &FlagSet, mode: Mode) -> Command {
    let mut command = Command::new(program.to_owned())
        .bin_name(program.to_owned())
        .about(format!(
            "{program} validates Helm charts against the Kubernetes schemas, using Kubeconform."
        ))
        .args_override_self(true);

    command = match mode {
        Mode::ChartFiles => command.arg(
            Arg::new(CHART_FILES)
                .help("files belonging to a chart to validate")
                .value_name("CHART_FILE")
                .num_args(1..)
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        ),
        Mode::Chart | Mode::ValuesFiles => {
            let command = command.arg(
                Arg::new(CHART)
                    .help("chart")
                    .required(true)
                    .value_parser(clap::value_parser!(OsString)),
            );
            if mode == Mode::ValuesFiles {
                command.arg(
                    Arg::new(VALUES)
                        .help("values files; the chart is validated against each of them")
                        .num_args(1..)
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
            } else {
                command
            }
        }
    };

    command.args(flags.iter().map(flag_arg))
}

fn flag_arg(flag: &FlagDescriptor) -> Arg {
    let mut arg = Arg::new(flag.id())
        .help(flag.help.clone())
        .help_heading(flag.origin.help_heading());
    if let Some(long) = &flag.long {
        arg = arg.long(long.clone());
    }
    if let Some(short) = flag.short {
        arg = arg.short(short);
    }
    if let Some(value_name) = &flag.value_name {
        arg = arg.value_name(value_name.clone());
    }

    match flag.kind {
        ValueKind::None => arg.action(ArgAction::SetTrue),
        ValueKind::String => arg.action(ArgAction::Append).num_args(1),
        ValueKind::Integer => arg
            .action(ArgAction::Append)
            .num_args(1)
            .allow_negative_numbers(true)
            .value_parser(integer_token),
    }
}

/// Accept a base-10 integer but keep the caller's token for forwarding.
fn integer_token(value: &str) -> Result<String, std::num::ParseIntError> {
    value.parse::<i64>().map(|_| value.to_owned())
}

/// `helm-kubeconform-pre-commit` task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Task {
    /// Validate the charts the given files belong to.
    ValidateCharts,
    /// Validate a chart once per given values file.
    ValidateValues,
}

impl Task {
    /// Plugin parser mode for this task.
    #[must_use]
    pub fn mode(self) -> Mode {
        match self {
            Self::ValidateCharts => Mode::ChartFiles,
            Self::ValidateValues => Mode::ValuesFiles,
        }
    }
}

/// Pre-commit wrapper for the helm kubeconform plugin.
#[derive(Debug, Parser)]
#[command(name = "helm-kubeconform-pre-commit", disable_help_flag = true)]
pub struct PreCommitCli {
    /// Validation task.
    pub task: Task,

    /// Arguments for the plugin.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}
