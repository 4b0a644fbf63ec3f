/// Subprocess layer: running helm and kubeconform.
pub mod errors;
pub mod runner;

#[cfg(test)]
pub mod fake;

pub use errors::ToolError;
pub use runner::{SystemRunner, ToolRunner, command_line};
