//! Completions command implementation
//!
//! Handles the `smart-conserve completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion scripts
///
/// Users can redirect the output to their shell's completion directory.
///
/// ```bash
/// smart-conserve completions bash > /etc/bash_completion.d/smart-conserve
/// smart-conserve completions zsh > ~/.zfunc/_smart-conserve
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}

/// Write completions for `cmd` into `out`
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
