/// Logging setup: `env_logger` behind the `log` facade.
///
/// Records are prefixed with the plugin name. Only warnings and errors show
/// until a run asks for debug output.
use std::io::Write;

use log::{Level, LevelFilter};

/// Install the logger. Safe to call more than once.
pub fn init(plugin_name: &str) {
    let prefix = plugin_name.to_owned();
    let _ = env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Debug)
        .format(move |buf, record| {
            writeln!(buf, "{prefix}: [{}] {}", level_name(record.level()), record.args())
        })
        .try_init();
    log::set_max_level(LevelFilter::Warn);
}

/// Show debug records from now on.
pub fn enable_debug() {
    log::set_max_level(LevelFilter::Debug);
}

/// Level label as Helm plugins print it.
fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
