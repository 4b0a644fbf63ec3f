/// Turn parsed help entries into the flag set the wrapper exposes.
use std::collections::HashSet;
use std::fmt;

use super::help::{HelpEntry, parse_helm_help, parse_kubeconform_help};
use super::policy::FlagPolicy;

/// A wrapped tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// `helm template`, renders the chart.
    Helm,
    /// `kubeconform`, validates the rendered manifests.
    Kubeconform,
}

impl Tool {
    /// Heading used for this tool's flags in `--help`.
    #[must_use]
    pub fn help_heading(self) -> &'static str {
        match self {
            Self::Helm => "Helm template options",
            Self::Kubeconform => "Kubeconform options",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Helm => "helm template",
            Self::Kubeconform => "kubeconform",
        })
    }
}

/// What a flag consumes from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Boolean switch, no value.
    None,
    /// Opaque string token.
    String,
    /// Base-10 integer, checked before anything runs.
    Integer,
}

impl ValueKind {
    fn from_type_token(token: Option<&str>) -> Self {
        match token {
            None => Self::None,
            Some("int") => Self::Integer,
            Some(_) => Self::String,
        }
    }
}

/// Which command lines receive a flag when the caller supplies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Forward {
    /// Only `helm template`.
    Template,
    /// Only `kubeconform`.
    Validator,
    /// `helm template` as named, and kubeconform under `validator_flag`.
    Both {
        /// kubeconform spelling of the same option.
        validator_flag: String,
    },
}

/// One flag of a wrapped tool, as exposed by the wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDescriptor {
    /// Spelling understood by the owning tool (`--kube-version`, `-n`).
    pub name: String,
    /// Exposed long name without dashes.
    pub long: Option<String>,
    /// Exposed short alias.
    pub short: Option<char>,
    /// Value the flag consumes.
    pub kind: ValueKind,
    /// Type token from the help text, shown as the value name.
    pub value_name: Option<String>,
    /// Description from the help text.
    pub help: String,
    /// Tool whose help text declared the flag.
    pub origin: Tool,
    /// Forwarding rule.
    pub forward: Forward,
}

impl FlagDescriptor {
    /// Identifier unique within a [`FlagSet`].
    #[must_use]
    pub fn id(&self) -> String {
        let prefix = match self.origin {
            Tool::Helm => "helm",
            Tool::Kubeconform => "kubeconform",
        };
        format!("{prefix}:{}", self.name)
    }

    /// The flag as the caller types it, preferring the long form.
    #[must_use]
    pub fn exposed(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => self.name.clone(),
        }
    }
}

/// Parse `help_text` with the grammar of `tool` and apply `policy`.
#[must_use]
pub fn translate(help_text: &str, tool: Tool, policy: &FlagPolicy) -> Vec<FlagDescriptor> {
    let entries = match tool {
        Tool::Helm => parse_helm_help(help_text),
        Tool::Kubeconform => parse_kubeconform_help(help_text),
    };

    entries
        .into_iter()
        .filter(|e| !policy.is_ignored(tool, &e.flag))
        .map(|e| match tool {
            Tool::Helm => helm_descriptor(e, policy),
            Tool::Kubeconform => kubeconform_descriptor(e, policy),
        })
        .collect()
}

fn helm_descriptor(entry: HelpEntry, policy: &FlagPolicy) -> FlagDescriptor {
    let forward = match policy.common_target(&entry.flag) {
        Some(validator_flag) => Forward::Both {
            validator_flag: validator_flag.to_owned(),
        },
        None => Forward::Template,
    };
    FlagDescriptor {
        long: Some(entry.flag.trim_start_matches('-').to_owned()),
        short: entry.short.as_deref().and_then(short_char),
        kind: ValueKind::from_type_token(entry.value_type.as_deref()),
        value_name: entry.value_type,
        help: entry.description,
        origin: Tool::Helm,
        forward,
        name: entry.flag,
    }
}

/// kubeconform long flags take a single dash; the wrapper exposes them with two.
fn kubeconform_descriptor(entry: HelpEntry, policy: &FlagPolicy) -> FlagDescriptor {
    let exposed = policy
        .rename(&entry.flag)
        .map_or_else(|| entry.flag.clone(), str::to_owned);
    let bare = exposed.trim_start_matches('-');

    let (long, short) = if bare.chars().count() > 1 {
        (Some(bare.to_owned()), None)
    } else {
        (None, bare.chars().next())
    };

    FlagDescriptor {
        long,
        short,
        kind: ValueKind::from_type_token(entry.value_type.as_deref()),
        value_name: entry.value_type,
        help: entry.description,
        origin: Tool::Kubeconform,
        forward: Forward::Validator,
        name: entry.flag,
    }
}

/// `-f` → `f`.
fn short_char(flag: &str) -> Option<char> {
    let mut chars = flag.trim_start_matches('-').chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// The merged, deduplicated flags of both tools.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    flags: Vec<FlagDescriptor>,
}

impl FlagSet {
    /// Merge both tools' descriptors, helm first.
    ///
    /// A flag whose exposed long or short name is already taken, including
    /// by the wrapper's own `-h/--help`, is dropped with a warning.
    #[must_use]
    pub fn merge(helm: Vec<FlagDescriptor>, kubeconform: Vec<FlagDescriptor>) -> Self {
        let mut longs: HashSet<String> = HashSet::from(["help".to_owned()]);
        let mut shorts: HashSet<char> = HashSet::from(['h']);
        let mut flags = Vec::with_capacity(helm.len() + kubeconform.len());

        for flag in helm.into_iter().chain(kubeconform) {
            let long_taken = flag.long.as_ref().is_some_and(|l| longs.contains(l));
            let short_taken = flag.short.is_some_and(|s| shorts.contains(&s));
            if long_taken || short_taken {
                log::warn!(
                    "{} flag {} collides with an existing option and is not exposed",
                    flag.origin,
                    flag.name
                );
                continue;
            }
            if let Some(long) = &flag.long {
                longs.insert(long.clone());
            }
            if let Some(short) = flag.short {
                shorts.insert(short);
            }
            flags.push(flag);
        }

        Self { flags }
    }

    /// Look a descriptor up by [`FlagDescriptor::id`].
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FlagDescriptor> {
        self.flags.iter().find(|f| f.id() == id)
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &FlagDescriptor> {
        self.flags.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
