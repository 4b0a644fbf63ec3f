/// Plugin command: discover flags, parse the caller's arguments, validate.
use std::ffi::OsString;

use crate::cli::{Mode, ResolvedArguments, build_command, targets};
use crate::config::Config;
use crate::errors::WrapperError;
use crate::flags::{FlagPolicy, discover};
use crate::logging;
use crate::pipeline::run_targets;
use crate::tool::ToolRunner;

/// Run the plugin in `mode` over `argv` (program name first).
///
/// # Errors
///
/// Returns `WrapperError::Discovery` if a help query fails,
/// `WrapperError::Usage` for rejected arguments (before anything runs), and
/// the pipeline's error otherwise.
pub fn run<I>(
    config: &Config,
    runner: &dyn ToolRunner,
    mode: Mode,
    argv: I,
) -> Result<(), WrapperError>
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    let flags = discover(runner, config, &FlagPolicy::default())?;
    let matches =
        build_command(&config.program_name(), &flags, mode).try_get_matches_from(argv)?;

    let resolved = ResolvedArguments::from_matches(&flags, &matches, config.helm_debug);
    if resolved.debug_requested() {
        logging::enable_debug();
    }

    run_targets(runner, config, &resolved, &targets(&matches, mode))
}

/// Fail early when kubeconform is not installed in the plugin directory.
///
/// # Errors
///
/// Returns `WrapperError::ValidatorMissing` if the binary is absent.
pub fn ensure_validator(config: &Config) -> Result<(), WrapperError> {
    let path = config.kubeconform_bin();
    if path.is_file() {
        Ok(())
    } else {
        Err(WrapperError::ValidatorMissing { path })
    }
}
