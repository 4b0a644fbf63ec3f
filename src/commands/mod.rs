/// Entry-point commands: the Helm plugin and its pre-commit front end.
pub mod pre_commit;
pub mod validate;

use crate::errors::WrapperError;

/// Write `err` to the user unless it was already reported.
///
/// Usage errors go through clap so help and version output keep their
/// formatting and stream.
pub fn report(err: &WrapperError) {
    match err {
        WrapperError::Usage(usage) => {
            let _ = usage.print();
        }
        err if err.needs_report() => log::error!("{err}"),
        _ => {}
    }
}
