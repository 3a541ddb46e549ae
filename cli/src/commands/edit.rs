use super::{select_row, AppContext};
use crate::handler::{CliActionHandler, ClipboardSink, TokenEdit};
use anyhow::{bail, Result};
use authenticator_lib::api::ActionHandler;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditCommand {
  #[clap(help = "Position or name of the token")]
  token: String,
  #[clap(short, long, help = "New name")]
  name: Option<String>,
  #[clap(short, long, help = "New issuer")]
  issuer: Option<String>,
}

impl EditCommand {
  pub fn run(self, context: &mut AppContext) -> Result<()> {
    if self.name.is_none() && self.issuer.is_none() {
      bail!("Nothing to change, use --name and/or --issuer");
    }
    let view_model = context.list_view_model(None)?;
    let row = select_row(&view_model.rows, &self.token)?;
    let edit = TokenEdit {
      name: self.name,
      issuer: self.issuer,
    };

    CliActionHandler::new(context.store.clone(), ClipboardSink)
      .with_edit(edit)
      .handle(row.edit_action.clone())
  }
}
