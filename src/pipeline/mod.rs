/// Pipeline layer: running helm template into kubeconform.
pub mod run;

pub use run::{run, run_targets};
