use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

#[derive(Debug, Args)]
pub struct CompletionCommand {
  #[clap(value_enum, help = "Shell to generate the completion script for")]
  shell: Shell,
}

impl CompletionCommand {
  pub fn run(self) -> Result<()> {
    let mut command = crate::cli::Args::command();
    let bin_name = command.get_name().to_string();
    let mut stdout = io::stdout().lock();

    generate(self.shell, &mut command, bin_name, &mut stdout);
    stdout.flush()?;

    Ok(())
  }
}
