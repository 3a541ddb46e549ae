use crate::commands::AppContext;
use crate::config::{config_file, read_config};
use crate::error::ExtResult;
use authenticator_lib::clock::SystemClock;
use authenticator_lib::token_store::LocalFileTokenStore;
use clap::Parser;
use log::debug;
use std::sync::Arc;

mod cli;
mod commands;
mod config;
mod error;
mod handler;
mod view;

fn main() {
  let args = cli::Args::parse();

  let mut log_builder = env_logger::Builder::from_default_env();

  if args.debug {
    log_builder.filter(None, log::LevelFilter::Debug);
  } else {
    log_builder.filter(None, log::LevelFilter::Error);
  }
  log_builder.target(env_logger::Target::Stderr);
  log_builder.init();

  let config_file = args.config.unwrap_or_else(config_file);
  let mut config = read_config(&config_file).ok_or_exit("Failed reading configuration: ");

  if let Some(tokens_file) = args.tokens {
    config.tokens_file = tokens_file;
  }
  debug!("Using tokens from {}", config.tokens_file.to_string_lossy());

  let mut context = AppContext {
    store: Arc::new(LocalFileTokenStore::new(&config.tokens_file)),
    clock: Arc::new(SystemClock),
    config,
    config_file,
  };

  args.sub_command.run(&mut context).ok_or_exit("Error: ");
}
