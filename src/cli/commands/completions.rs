//! Completions command - print a shell completion script

use crate::cli::Cli;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the completions command, writing to stdout
pub fn execute(args: CompletionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    write_completions(args.shell, &mut io::stdout().lock())
}

/// Render the completion script for `shell` into `out`
pub fn write_completions(
    shell: Shell,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
    out.flush()?;
    Ok(())
}
