//! Common test utilities and helpers
//!
//! Shared functionality for integration tests:
//! - Binary invocation in an isolated working directory
//! - Config fixture creation
//! - Floating-point assertion helpers

pub mod assertions;
pub mod fixtures;

use assert_cmd::Command;

/// The smart-conserve binary with `RUST_LOG` cleared
#[allow(dead_code)]
pub fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_smart-conserve"));
    cmd.env_remove("RUST_LOG");
    cmd
}
