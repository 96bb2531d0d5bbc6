//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod measure;
pub mod sweep;
