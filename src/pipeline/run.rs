/// Template-then-validate pipeline.
///
/// 1. **Template**: `helm template` runs with its output captured in memory.
///    A failure ends the pipeline; kubeconform never starts.
/// 2. **Validate**: kubeconform reads the rendered manifests on stdin and
///    writes its findings to the wrapper's stderr.
///
/// Multi-target runs stop at the first failing target.
use std::ffi::OsString;

use crate::cli::{ResolvedArguments, Target, compose};
use crate::config::Config;
use crate::errors::WrapperError;
use crate::tool::{ToolError, ToolRunner, command_line};

/// Run one pipeline.
///
/// # Errors
///
/// Returns the first `ToolError`; its exit code is the pipeline's result.
pub fn run(
    runner: &dyn ToolRunner,
    template_argv: &[OsString],
    validator_argv: &[OsString],
) -> Result<(), ToolError> {
    log::debug!("Running {}", command_line(template_argv));
    let rendered = runner.capture(template_argv)?;

    log::debug!("Running {}", command_line(validator_argv));
    runner.feed(validator_argv, &rendered)
}

/// Run the pipeline for every target in order, stopping at the first failure.
///
/// An empty target list runs nothing and succeeds.
///
/// # Errors
///
/// Returns `WrapperError::Target` naming the failed target, or
/// `WrapperError::Tool` for a lone chart.
pub fn run_targets(
    runner: &dyn ToolRunner,
    config: &Config,
    resolved: &ResolvedArguments,
    targets: &[Target],
) -> Result<(), WrapperError> {
    if targets.is_empty() {
        log::warn!("No Helm chart to validate");
        return Ok(());
    }

    for target in targets {
        let (template, validator) = compose(config, resolved, target);
        if let Err(source) = run(runner, &template, &validator) {
            return Err(match target.label() {
                Some(label) => {
                    log::error!("{label} validation failed");
                    WrapperError::Target {
                        target: label,
                        source,
                    }
                }
                None => WrapperError::Tool(source),
            });
        }
    }

    Ok(())
}
