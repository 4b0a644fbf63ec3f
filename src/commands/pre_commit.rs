/// pre-commit hook: install kubeconform if needed, then run the plugin in
/// the mode selected by the task.
use std::ffi::OsString;

use clap::Parser;

use super::validate;
use crate::cli::PreCommitCli;
use crate::config::Config;
use crate::errors::WrapperError;
use crate::tool::ToolRunner;

/// Version announced to the installation script.
const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the hook over `argv` (program name first).
///
/// # Errors
///
/// Returns `WrapperError::Usage` for a missing or unknown task, an
/// installation error, or whatever the plugin run returns.
pub fn run<I>(config: &Config, runner: &dyn ToolRunner, argv: I) -> Result<(), WrapperError>
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    let cli = PreCommitCli::try_parse_from(argv)?;
    install_validator(config, runner)?;

    let plugin_argv = std::iter::once(OsString::from(config.program_name())).chain(cli.args);
    validate::run(config, runner, cli.task.mode(), plugin_argv)
}

/// Make sure kubeconform is installed in the plugin directory, running the
/// bundled installation script when it is not.
///
/// # Errors
///
/// Returns `WrapperError::Install` if the script fails and
/// `WrapperError::ValidatorMissing` if no binary exists afterwards.
pub fn install_validator(config: &Config, runner: &dyn ToolRunner) -> Result<(), WrapperError> {
    if validate::ensure_validator(config).is_ok() {
        return Ok(());
    }

    let script = config.install_script();
    if !script.is_file() {
        return validate::ensure_validator(config);
    }

    log::warn!("Installing kubeconform into {}", config.plugin_dir.display());
    let argv = [OsString::from("sh"), script.into_os_string()];
    runner
        .relay(&argv, &install_env(config))
        .map_err(|source| WrapperError::Install { source })?;

    validate::ensure_validator(config)
}

fn install_env(config: &Config) -> Vec<(String, String)> {
    let mut env = vec![
        (
            "HELM_PLUGIN_DIR".to_owned(),
            config.plugin_dir.to_string_lossy().into_owned(),
        ),
        ("HELM_PLUGIN_VERSION".to_owned(), PLUGIN_VERSION.to_owned()),
    ];
    env.extend(config.proxies.iter().cloned());
    if cfg!(windows) {
        // Cygwin bash: tolerate CRLF line endings in the script
        env.push(("SHELLOPTS".to_owned(), "igncr".to_owned()));
    }
    env
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::tool::fake::{Call, FakeRunner};

    fn config(dir: &TempDir) -> Config {
        Config::from_lookup(|key| match key {
            "HELM_BIN" => Some("helm".into()),
            "HELM_PLUGIN_DIR" => Some(dir.path().into()),
            _ => None,
        })
    }

    fn installed(dir: &TempDir) -> Config {
        let cfg = config(dir);
        fs::write(cfg.kubeconform_bin(), "").unwrap();
        cfg
    }

    #[test]
    fn test_installed_validator_skips_script() {
        let tmp = TempDir::new().unwrap();
        let cfg = installed(&tmp);
        fs::write(cfg.install_script(), "").unwrap();

        let runner = FakeRunner::default();
        install_validator(&cfg, &runner).unwrap();
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_install_script_environment() {
        let tmp = TempDir::new().unwrap();
        let cfg = config(&tmp);
        fs::write(cfg.install_script(), "").unwrap();

        let runner = FakeRunner::default();
        let err = install_validator(&cfg, &runner).unwrap_err();
        // The fake does not produce a binary.
        assert!(matches!(err, WrapperError::ValidatorMissing { .. }));

        let calls = runner.calls();
        let [Call::Relay(argv, env)] = calls.as_slice() else {
            panic!("expected one relay call, got {calls:?}");
        };
        assert_eq!(
            argv,
            &vec!["sh".to_owned(), cfg.install_script().to_string_lossy().into_owned()]
        );
        assert!(env.contains(&(
            "HELM_PLUGIN_DIR".to_owned(),
            tmp.path().to_string_lossy().into_owned()
        )));
        assert!(env.contains(&("HELM_PLUGIN_VERSION".to_owned(), PLUGIN_VERSION.to_owned())));
        assert!(env.iter().any(|(k, _)| k == "https_proxy"));
    }

    #[test]
    fn test_install_script_failure() {
        let tmp = TempDir::new().unwrap();
        let cfg = config(&tmp);
        fs::write(cfg.install_script(), "").unwrap();

        let runner = FakeRunner::default().relay_exits(&[4]);
        let err = install_validator(&cfg, &runner).unwrap_err();
        assert!(matches!(err, WrapperError::Install { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_missing_script_and_validator() {
        let tmp = TempDir::new().unwrap();
        let runner = FakeRunner::default();
        let err = install_validator(&config(&tmp), &runner).unwrap_err();
        assert!(matches!(err, WrapperError::ValidatorMissing { .. }));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_validate_values_task() {
        let tmp = TempDir::new().unwrap();
        let cfg = installed(&tmp);
        let runner = FakeRunner::default();
        run(
            &cfg,
            &runner,
            [
                "helm-kubeconform-pre-commit",
                "validate-values",
                "--strict",
                "chart",
                "values1.yml",
                "values2.yml",
            ],
        )
        .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(
            calls[0],
            Call::Template(
                ["helm", "template", "chart", "--values", "values1.yml"]
                    .map(str::to_owned)
                    .to_vec()
            )
        );
        let kubeconform = cfg.kubeconform_bin().to_string_lossy().into_owned();
        let expected = vec![kubeconform, "-strict".to_owned()];
        assert!(matches!(&calls[1], Call::Validate(args, _) if *args == expected));
    }

    #[test]
    fn test_validate_charts_task() {
        let tmp = TempDir::new().unwrap();
        let cfg = installed(&tmp);
        let chart = tmp.path().join("charts").join("web");
        fs::create_dir_all(chart.join("templates")).unwrap();
        fs::write(chart.join("Chart.yaml"), "").unwrap();
        let file = chart.join("templates").join("deployment.yaml");

        let runner = FakeRunner::default();
        run(
            &cfg,
            &runner,
            [
                OsString::from("helm-kubeconform-pre-commit"),
                OsString::from("validate-charts"),
                file.into_os_string(),
            ],
        )
        .unwrap();

        assert_eq!(
            runner.calls()[0],
            Call::Template(vec![
                "helm".to_owned(),
                "template".to_owned(),
                chart.to_string_lossy().into_owned()
            ])
        );
    }

    #[test]
    fn test_unknown_task() {
        let tmp = TempDir::new().unwrap();
        let runner = FakeRunner::default();
        let err =
            run(&installed(&tmp), &runner, ["helm-kubeconform-pre-commit", "lint"]).unwrap_err();
        assert!(matches!(err, WrapperError::Usage(_)));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(runner.queries(), 0);
    }
}
