/// Fixed rules deciding which tool flags the wrapper exposes and how.
use super::translate::Tool;

/// Static ignore, common and rename tables.
#[derive(Debug, Clone, Copy)]
pub struct FlagPolicy {
    /// `helm template` flags never exposed.
    pub helm_ignored: &'static [&'static str],
    /// `helm template` flag → kubeconform flag with the same purpose.
    pub common: &'static [(&'static str, &'static str)],
    /// kubeconform flags never exposed.
    pub kubeconform_ignored: &'static [&'static str],
    /// kubeconform flag → name exposed by the wrapper.
    pub renamed: &'static [(&'static str, &'static str)],
}

/// The rules for wrapping `helm template` and `kubeconform`.
pub const HELM_KUBECONFORM: FlagPolicy = FlagPolicy {
    helm_ignored: &[
        // Provided by the wrapper's own parser
        "--help",
        // Output goes to stdout for kubeconform to read
        "--output-dir",
        "--release-name",
        // Rejected by Helm >= 3.10 when running a plugin
        "--insecure-skip-tls-verify",
    ],
    common: &[("--debug", "-debug"), ("--kube-version", "-kubernetes-version")],
    kubeconform_ignored: &[
        // Provided by the wrapper's own parser
        "-h",
        // Input always comes from stdin
        "-ignore-filename-pattern",
        "-v",
    ],
    renamed: &[
        // helm -n/--namespace
        ("-n", "--goroutines"),
        // helm --insecure-skip-tls-verify
        ("-insecure-skip-tls-verify", "--skip-tls-verify"),
    ],
};

impl Default for FlagPolicy {
    fn default() -> Self {
        HELM_KUBECONFORM
    }
}

impl FlagPolicy {
    /// Whether `flag` of `tool` must never be exposed.
    ///
    /// kubeconform flags reached through a common helm flag count as ignored.
    #[must_use]
    pub fn is_ignored(&self, tool: Tool, flag: &str) -> bool {
        match tool {
            Tool::Helm => self.helm_ignored.contains(&flag),
            Tool::Kubeconform => {
                self.kubeconform_ignored.contains(&flag)
                    || self.common.iter().any(|(_, k)| *k == flag)
            }
        }
    }

    /// The kubeconform spelling of a common helm flag.
    #[must_use]
    pub fn common_target(&self, helm_flag: &str) -> Option<&'static str> {
        lookup(self.common, helm_flag)
    }

    /// The exposed replacement for a kubeconform flag.
    #[must_use]
    pub fn rename(&self, kubeconform_flag: &str) -> Option<&'static str> {
        lookup(self.renamed, kubeconform_flag)
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
