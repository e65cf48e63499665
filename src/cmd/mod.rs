//! Command handlers for smart-conserve CLI
//!
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod init;
pub mod run;

pub use completions::cmd_completions;
pub use init::cmd_init;
pub use run::{cmd_run, RunArgs};
