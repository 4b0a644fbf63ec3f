/// Command composition: turn parsed caller arguments into the helm and
/// kubeconform command lines.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::ArgMatches;
use clap::parser::ValueSource;

use super::args::{CHART, CHART_FILES, Mode, VALUES};
use crate::chart::locate_all;
use crate::config::Config;
use crate::flags::{FlagDescriptor, FlagSet, Forward, ValueKind};

/// Flag arguments for each tool, in the order the caller gave them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedArguments {
    /// Arguments after `helm template`.
    pub template: Vec<OsString>,
    /// Arguments after `kubeconform`.
    pub validator: Vec<OsString>,
}

impl ResolvedArguments {
    /// Replay every recognised flag occurrence through its forwarding rule.
    ///
    /// With `helm_debug`, both tools' debug flags are appended.
    #[must_use]
    pub fn from_matches(flags: &FlagSet, matches: &ArgMatches, helm_debug: bool) -> Self {
        let mut occurrences = occurrences(flags, matches);
        occurrences.sort_by_key(|(index, _, _)| *index);

        let mut resolved = Self::default();
        for (_, flag, value) in occurrences {
            match &flag.forward {
                Forward::Template => push(&mut resolved.template, &flag.name, value),
                Forward::Validator => push(&mut resolved.validator, &flag.name, value),
                Forward::Both { validator_flag } => {
                    push(&mut resolved.template, &flag.name, value.clone());
                    push(&mut resolved.validator, validator_flag, value);
                }
            }
        }

        if helm_debug {
            resolved.template.push("--debug".into());
            resolved.validator.push("-debug".into());
        }
        resolved
    }

    /// Whether either tool was asked for debug output.
    #[must_use]
    pub fn debug_requested(&self) -> bool {
        self.template.iter().any(|a| a == "--debug") || self.validator.iter().any(|a| a == "-debug")
    }
}

fn occurrences<'a>(
    flags: &'a FlagSet,
    matches: &ArgMatches,
) -> Vec<(usize, &'a FlagDescriptor, Option<String>)> {
    let mut found = Vec::new();
    for flag in flags.iter() {
        let id = flag.id();
        if matches.value_source(&id) != Some(ValueSource::CommandLine) {
            continue;
        }
        match flag.kind {
            ValueKind::None => {
                if let Some(index) = matches.index_of(&id).filter(|_| matches.get_flag(&id)) {
                    found.push((index, flag, None));
                }
            }
            ValueKind::String | ValueKind::Integer => {
                let (Some(indices), Some(values)) =
                    (matches.indices_of(&id), matches.get_many::<String>(&id))
                else {
                    continue;
                };
                found.extend(indices.zip(values).map(|(i, v)| (i, flag, Some(v.clone()))));
            }
        }
    }
    found
}

fn push(args: &mut Vec<OsString>, flag: &str, value: Option<String>) {
    args.push(flag.into());
    if let Some(value) = value {
        args.push(value.into());
    }
}

/// What one pipeline renders and validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A chart reference as given by the caller.
    Chart(OsString),
    /// A chart directory found from a chart file.
    ChartDirectory(PathBuf),
    /// A chart rendered with one values file.
    ValuesFile {
        /// Chart reference.
        chart: OsString,
        /// Values file.
        values: PathBuf,
    },
}

impl Target {
    /// Trailing `helm template` arguments selecting this target.
    #[must_use]
    pub fn template_args(&self) -> Vec<OsString> {
        match self {
            Self::Chart(chart) => vec![chart.clone()],
            Self::ChartDirectory(dir) => vec![dir.clone().into_os_string()],
            Self::ValuesFile { chart, values } => vec![
                chart.clone(),
                "--values".into(),
                values.clone().into_os_string(),
            ],
        }
    }

    /// Name used when reporting a failure; `None` for a lone chart.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Chart(_) => None,
            Self::ChartDirectory(dir) => Some(format!("Helm chart {}", dir.display())),
            Self::ValuesFile { values, .. } => {
                Some(format!("Helm values file {}", values.display()))
            }
        }
    }
}

/// Derive the targets of this run from the positional arguments.
///
/// In chart-file mode the files are collapsed into the distinct charts they
/// belong to; files outside any chart are skipped.
#[must_use]
pub fn targets(matches: &ArgMatches, mode: Mode) -> Vec<Target> {
    let chart = || matches.get_one::<OsString>(CHART).cloned().unwrap_or_default();

    match mode {
        Mode::Chart => vec![Target::Chart(chart())],
        Mode::ValuesFiles => matches
            .get_many::<PathBuf>(VALUES)
            .into_iter()
            .flatten()
            .map(|values| Target::ValuesFile {
                chart: chart(),
                values: values.clone(),
            })
            .collect(),
        Mode::ChartFiles => {
            let files: Vec<PathBuf> = matches
                .get_many::<PathBuf>(CHART_FILES)
                .into_iter()
                .flatten()
                .cloned()
                .collect();
            locate_all(&files)
                .into_iter()
                .map(Target::ChartDirectory)
                .collect()
        }
    }
}

/// Full `helm template` and `kubeconform` command lines for `target`.
#[must_use]
pub fn compose(
    config: &Config,
    resolved: &ResolvedArguments,
    target: &Target,
) -> (Vec<OsString>, Vec<OsString>) {
    let mut template: Vec<OsString> = vec![config.helm_bin.clone().into(), "template".into()];
    template.extend(resolved.template.iter().cloned());
    template.extend(target.template_args());

    let mut validator: Vec<OsString> = vec![config.kubeconform_bin().into()];
    validator.extend(resolved.validator.iter().cloned());

    (template, validator)
}
