/// Query the wrapped tools for their option lists.
use std::ffi::OsString;

use super::policy::FlagPolicy;
use super::translate::{FlagSet, Tool, translate};
use crate::config::Config;
use crate::errors::WrapperError;
use crate::tool::{ToolRunner, command_line};

/// Ask both tools for their help text and build the exposed flag set.
///
/// # Errors
///
/// Returns `WrapperError::Discovery` if either help query fails; the
/// wrapper must not continue with a partial flag set.
pub fn discover(
    runner: &dyn ToolRunner,
    config: &Config,
    policy: &FlagPolicy,
) -> Result<FlagSet, WrapperError> {
    let helm = help_text(
        runner,
        Tool::Helm,
        vec![config.helm_bin.clone().into(), "template".into(), "--help".into()],
    )?;
    let kubeconform = help_text(
        runner,
        Tool::Kubeconform,
        vec![config.kubeconform_bin().into(), "-h".into()],
    )?;

    Ok(FlagSet::merge(
        translate(&helm, Tool::Helm, policy),
        translate(&kubeconform, Tool::Kubeconform, policy),
    ))
}

fn help_text(
    runner: &dyn ToolRunner,
    tool: Tool,
    argv: Vec<OsString>,
) -> Result<String, WrapperError> {
    log::debug!("Running {}", command_line(&argv));
    let output = runner
        .capture(&argv)
        .map_err(|source| WrapperError::Discovery { tool, source })?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
