use super::{select_row, AppContext};
use crate::handler::{CliActionHandler, ClipboardSink};
use anyhow::{bail, Result};
use authenticator_lib::api::ActionHandler;
use clap::Args;

#[derive(Debug, Args)]
pub struct NextCommand {
  #[clap(help = "Position or name of the token")]
  token: String,
}

impl NextCommand {
  pub fn run(self, context: &mut AppContext) -> Result<()> {
    let view_model = context.list_view_model(None)?;
    let row = select_row(&view_model.rows, &self.token)?;

    if !row.shows_button {
      bail!("'{}' is time based, its password changes on its own", row.name);
    }

    CliActionHandler::new(context.store.clone(), ClipboardSink).handle(row.button_action.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::NextCommand;
  use crate::commands::tests::context_with_tokens;
  use authenticator_lib::otp::Factor;
  use spectral::prelude::*;

  #[test]
  fn test_next() {
    let mut context = context_with_tokens(&[
      "otpauth://totp/ACME:alice?secret=JBSWY3DPEHPK3PXP",
      "otpauth://hotp/bob?secret=JBSWY3DPEHPK3PXP&counter=5",
    ]);

    assert_that(&NextCommand { token: "1".to_string() }.run(&mut context).is_err()).is_true();
    assert_that(&NextCommand { token: "bob".to_string() }.run(&mut context).is_ok()).is_true();

    assert_that(&context.store.list().unwrap()[1].token.generator.factor).is_equal_to(Factor::Counter(6));
  }
}
