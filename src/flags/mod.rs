/// Flag discovery: help-text grammars, policy and translation.
pub mod discover;
pub mod help;
pub mod policy;
pub mod translate;

#[cfg(test)]
pub mod fixtures;

pub use discover::discover;
pub use policy::{FlagPolicy, HELM_KUBECONFORM};
pub use translate::{FlagDescriptor, FlagSet, Forward, Tool, ValueKind, translate};
