#![deny(clippy::all, clippy::pedantic)]
//! helm kubeconform: the Helm plugin entry point.

use helm_kubeconform::cli::Mode;
use helm_kubeconform::commands::{report, validate};
use helm_kubeconform::config::Config;
use helm_kubeconform::logging;
use helm_kubeconform::tool::SystemRunner;

fn main() {
    let config = Config::from_env();
    logging::init(&config.plugin_name);

    let result = validate::ensure_validator(&config)
        .and_then(|()| validate::run(&config, &SystemRunner, Mode::Chart, std::env::args_os()));

    if let Err(err) = result {
        report(&err);
        std::process::exit(err.exit_code());
    }
}
