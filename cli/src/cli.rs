use clap::Parser;
use std::path::PathBuf;

use crate::commands::MainCommand;

#[derive(Debug, Parser)]
#[clap(name = "authenticator", about = "Shows one-time passwords", version = clap::crate_version!())]
pub struct Args {
  #[clap(short, long, help = "Enable debug logs")]
  pub debug: bool,

  #[clap(short, long, help = "Configuration file to use")]
  pub config: Option<PathBuf>,

  #[clap(short, long, help = "Token file to use (overrides configuration)")]
  pub tokens: Option<PathBuf>,

  #[clap(subcommand)]
  pub sub_command: MainCommand,
}
