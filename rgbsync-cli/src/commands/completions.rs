//! Shell completion generation.

use clap_complete::{Shell, generate};
use std::io;

use crate::help::build_command;

/// Generate shell completions to stdout.
pub(crate) fn cmd_completions(shell: Shell) {
    let mut cmd = build_command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
