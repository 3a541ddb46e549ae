use super::{select_row, AppContext};
use crate::handler::{CliActionHandler, ClipboardSink};
use anyhow::Result;
use authenticator_lib::api::ActionHandler;
use clap::Args;

#[derive(Debug, Args)]
pub struct CopyCommand {
  #[clap(help = "Position or name of the token")]
  token: String,
}

impl CopyCommand {
  pub fn run(self, context: &mut AppContext) -> Result<()> {
    let view_model = context.list_view_model(None)?;
    let row = select_row(&view_model.rows, &self.token)?;

    if row.select_action.is_no_action() {
      println!("Password not available: {}", row.password);
      return Ok(());
    }

    CliActionHandler::new(context.store.clone(), ClipboardSink).handle(row.select_action.clone())
  }
}
