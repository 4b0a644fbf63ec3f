#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! helm-kubeconform: validate Helm charts against Kubernetes schemas by
//! piping `helm template` into kubeconform.

pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod flags;
pub mod logging;
pub mod pipeline;
pub mod tool;
