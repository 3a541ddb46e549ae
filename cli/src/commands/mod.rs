mod add;
mod completions;
mod copy;
mod delete;
mod edit;
mod list;
mod menu;
mod move_token;
mod next;

use crate::config::Config;
use anyhow::{bail, Result};
use authenticator_lib::clock::{Clock, DisplayTime};
use authenticator_lib::token_store::TokenStore;
use authenticator_lib::view::{RowOptions, TokenList, TokenListViewModel, TokenRowModel};
use chrono::Local;
use clap::Subcommand;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a command needs to do its work.
pub struct AppContext {
  pub store: Arc<dyn TokenStore>,
  pub clock: Arc<dyn Clock<Tz = Local>>,
  pub config: Config,
  pub config_file: PathBuf,
}

impl AppContext {
  pub fn row_options(&self, can_reorder: bool) -> RowOptions {
    RowOptions::new(self.config.display_options.digit_group_size)
      .reorderable(can_reorder)
      .with_schedule(self.config.schedule)
  }

  pub fn token_list(&self, filter: Option<String>) -> Result<TokenList> {
    Ok(TokenList::new(self.store.list()?).with_filter(filter))
  }

  pub fn list_view_model(&self, filter: Option<String>) -> Result<TokenListViewModel> {
    let token_list = self.token_list(filter)?;
    let display_time = DisplayTime::now(self.clock.as_ref());

    Ok(token_list.view_model(display_time, &self.row_options(true), self.clock.as_ref()))
  }
}

/// Find a row either by its (1 based) position in the list or by its name.
pub fn select_row<'a>(rows: &'a [TokenRowModel], selector: &str) -> Result<&'a TokenRowModel> {
  if let Ok(index) = selector.parse::<usize>() {
    return match index.checked_sub(1).and_then(|index| rows.get(index)) {
      Some(row) => Ok(row),
      None => bail!("No token at position {}", index),
    };
  }
  let mut candidates = rows.iter().filter(|row| row.name.eq_ignore_ascii_case(selector));

  match (candidates.next(), candidates.next()) {
    (Some(row), None) => Ok(row),
    (Some(_), Some(_)) => bail!("Token name '{}' is ambiguous, use its position instead", selector),
    (None, _) => bail!("No token named '{}'", selector),
  }
}

#[derive(Debug, Subcommand)]
pub enum MainCommand {
  #[clap(about = "List tokens with their current passwords", alias = "ls")]
  List(list::ListCommand),
  #[clap(about = "Add a token from an otpauth:// url")]
  Add(add::AddCommand),
  #[clap(about = "Copy the current password of a token")]
  Copy(copy::CopyCommand),
  #[clap(about = "Advance a counter based token to its next password")]
  Next(next::NextCommand),
  #[clap(about = "Change name or issuer of a token")]
  Edit(edit::EditCommand),
  #[clap(about = "Delete a token", alias = "rm")]
  Delete(delete::DeleteCommand),
  #[clap(about = "Move a token to another position")]
  Move(move_token::MoveCommand),
  #[clap(about = "Show the info menu")]
  Menu(menu::MenuCommand),
  #[clap(about = "Generate shell completions")]
  Completions(completions::CompletionCommand),
}

impl MainCommand {
  pub fn run(self, context: &mut AppContext) -> Result<()> {
    match self {
      MainCommand::List(cmd) => cmd.run(context),
      MainCommand::Add(cmd) => cmd.run(context),
      MainCommand::Copy(cmd) => cmd.run(context),
      MainCommand::Next(cmd) => cmd.run(context),
      MainCommand::Edit(cmd) => cmd.run(context),
      MainCommand::Delete(cmd) => cmd.run(context),
      MainCommand::Move(cmd) => cmd.run(context),
      MainCommand::Menu(cmd) => cmd.run(context),
      MainCommand::Completions(cmd) => cmd.run(),
    }
  }
}
