/// Runtime configuration, read once from the environment Helm sets for plugins.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Value of `HELM_DEBUG` meaning `helm --debug` was given.
const DEBUG_SENTINEL: &str = "true";

/// Network settings handed to the kubeconform installation script.
const PROXY_VARS: [&str; 6] = [
    "http_proxy",
    "https_proxy",
    "no_proxy",
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "NO_PROXY",
];

/// Settings shared by every stage of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `helm` executable (`HELM_BIN`).
    pub helm_bin: PathBuf,
    /// Plugin installation directory (`HELM_PLUGIN_DIR`).
    pub plugin_dir: PathBuf,
    /// Name Helm runs the plugin under (`HELM_PLUGIN_NAME`).
    pub plugin_name: String,
    /// Forward each tool's debug flag (`HELM_DEBUG=true`).
    pub helm_debug: bool,
    /// Proxy variables, empty when unset.
    pub proxies: Vec<(String, String)>,
}

impl Config {
    /// Read the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let plugin_dir = lookup("HELM_PLUGIN_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(executable_dir);

        Self {
            helm_bin: lookup("HELM_BIN").map_or_else(|| PathBuf::from("helm"), PathBuf::from),
            plugin_dir,
            plugin_name: lookup("HELM_PLUGIN_NAME")
                .map_or_else(|| "kubeconform".to_owned(), |n| n.to_string_lossy().into_owned()),
            helm_debug: lookup("HELM_DEBUG").is_some_and(|v| v == DEBUG_SENTINEL),
            proxies: PROXY_VARS
                .iter()
                .map(|name| {
                    let value = lookup(name).map(|v| v.to_string_lossy().into_owned());
                    ((*name).to_owned(), value.unwrap_or_default())
                })
                .collect(),
        }
    }

    /// The kubeconform binary shipped inside the plugin directory.
    #[must_use]
    pub fn kubeconform_bin(&self) -> PathBuf {
        self.plugin_dir
            .join("kubeconform")
            .with_extension(std::env::consts::EXE_EXTENSION)
    }

    /// The script that downloads kubeconform into the plugin directory.
    #[must_use]
    pub fn install_script(&self) -> PathBuf {
        self.plugin_dir.join("install.sh")
    }

    /// Program name shown in usage messages.
    #[must_use]
    pub fn program_name(&self) -> String {
        format!("helm {}", self.plugin_name)
    }
}

fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
