#![deny(clippy::all, clippy::pedantic)]
//! helm-kubeconform-pre-commit: pre-commit hook running the Helm plugin.

use helm_kubeconform::commands::{pre_commit, report};
use helm_kubeconform::config::Config;
use helm_kubeconform::logging;
use helm_kubeconform::tool::SystemRunner;

fn main() {
    let config = Config::from_env();
    logging::init(&config.plugin_name);

    if let Err(err) = pre_commit::run(&config, &SystemRunner, std::env::args_os()) {
        report(&err);
        std::process::exit(err.exit_code());
    }
}
