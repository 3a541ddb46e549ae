use super::{select_row, AppContext};
use crate::handler::{CliActionHandler, ClipboardSink};
use anyhow::Result;
use authenticator_lib::api::ActionHandler;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteCommand {
  #[clap(help = "Position or name of the token")]
  token: String,
}

impl DeleteCommand {
  pub fn run(self, context: &mut AppContext) -> Result<()> {
    let view_model = context.list_view_model(None)?;
    let row = select_row(&view_model.rows, &self.token)?;

    CliActionHandler::new(context.store.clone(), ClipboardSink).handle(row.delete_action.clone())?;
    println!("Deleted {}", row.name);

    Ok(())
  }
}
