/// Help-text grammars for the two wrapped tools.
///
/// Each tool lays out its option list differently, so each gets its own
/// parser. Both are pinned against fixture samples; a reformat upstream
/// shows up here first.
use std::sync::LazyLock;

use regex::Regex;

/// `[-x, ]--long[ type]  description`, one option per line (`helm template --help`).
static HELM_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(-\w),\s*)?(--\w[\w-]*)(?:\s(\w+))?\s+(.+?)\s*$")
        .expect("helm option pattern is valid")
});

/// `-flag[ type]` or `-flag  description` (`kubeconform -h`).
static KUBECONFORM_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(--?\w[\w-]*)(?:[ \t]+(.*?))?\s*$")
        .expect("kubeconform option pattern is valid")
});

static SINGLE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("word pattern is valid"));

/// One option line as printed by a tool, before any policy is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    /// Short alias as printed (`-f`), if any.
    pub short: Option<String>,
    /// Flag as printed (`--values`, `-strict`).
    pub flag: String,
    /// Argument type token (`string`, `int`, ...); `None` for boolean flags.
    pub value_type: Option<String>,
    /// Description text.
    pub description: String,
}

/// Parse `helm template --help`.
#[must_use]
pub fn parse_helm_help(text: &str) -> Vec<HelpEntry> {
    text.lines()
        .filter_map(|line| HELM_OPTION.captures(line))
        .map(|caps| HelpEntry {
            short: caps.get(1).map(|m| m.as_str().to_owned()),
            flag: caps[2].to_owned(),
            value_type: caps.get(3).map(|m| m.as_str().to_owned()),
            description: caps[4].to_owned(),
        })
        .collect()
}

/// Parse `kubeconform -h`.
///
/// A single word after the flag is its type token and the description sits
/// on the next indented line; anything longer is an inline description.
#[must_use]
pub fn parse_kubeconform_help(text: &str) -> Vec<HelpEntry> {
    let lines: Vec<&str> = text.lines().collect();
    let mut entries = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = KUBECONFORM_OPTION.captures(line) else {
            continue;
        };
        let flag = caps[1].to_owned();
        let rest = caps.get(2).map_or("", |m| m.as_str());

        let (value_type, inline) = if SINGLE_WORD.is_match(rest) {
            (Some(rest.to_owned()), None)
        } else if rest.is_empty() || rest.starts_with('-') {
            (None, None)
        } else {
            (None, Some(rest.to_owned()))
        };

        let description = inline
            .or_else(|| lines.get(i + 1).and_then(|next| continuation(next)))
            .unwrap_or_default();

        entries.push(HelpEntry {
            short: None,
            flag,
            value_type,
            description,
        });
    }

    entries
}

/// An indented line that does not start a new option.
fn continuation(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let indented = line.starts_with([' ', '\t']);
    (indented && !trimmed.is_empty() && !trimmed.starts_with('-')).then(|| trimmed.to_owned())
}
