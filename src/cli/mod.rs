/// CLI layer: argument parsing and command composition.
pub mod args;
pub mod compose;

pub use args::{Mode, PreCommitCli, Task, build_command};
pub use compose::{ResolvedArguments, Target, compose, targets};
