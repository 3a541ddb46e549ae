use super::AppContext;
use crate::handler::{CliActionHandler, ClipboardSink};
use anyhow::{bail, Result};
use authenticator_lib::api::ActionHandler;
use clap::Args;

#[derive(Debug, Args)]
pub struct MoveCommand {
  #[clap(help = "Current position of the token")]
  from: usize,
  #[clap(help = "New position of the token")]
  to: usize,
}

impl MoveCommand {
  pub fn run(self, context: &mut AppContext) -> Result<()> {
    let view_model = context.list_view_model(None)?;
    let action = match (self.from.checked_sub(1), self.to.checked_sub(1)) {
      (Some(from), Some(to)) => view_model.move_action(from, to),
      _ => bail!("Positions start at 1"),
    };

    if action.is_no_action() {
      bail!("Unable to move token {} to {}", self.from, self.to);
    }

    CliActionHandler::new(context.store.clone(), ClipboardSink).handle(action)
  }
}

#[cfg(test)]
mod tests {
  use super::MoveCommand;
  use crate::commands::tests::context_with_tokens;
  use spectral::prelude::*;

  #[test]
  fn test_move() {
    let mut context = context_with_tokens(&[
      "otpauth://totp/a?secret=JBSWY3DPEHPK3PXP",
      "otpauth://totp/b?secret=JBSWY3DPEHPK3PXP",
      "otpauth://totp/c?secret=JBSWY3DPEHPK3PXP",
    ]);

    assert_that(&MoveCommand { from: 3, to: 1 }.run(&mut context).is_ok()).is_true();
    assert_that(&MoveCommand { from: 0, to: 1 }.run(&mut context).is_err()).is_true();
    assert_that(&MoveCommand { from: 2, to: 2 }.run(&mut context).is_err()).is_true();
    assert_that(&MoveCommand { from: 1, to: 4 }.run(&mut context).is_err()).is_true();

    let names = context
      .store
      .list()
      .unwrap()
      .into_iter()
      .map(|persistent_token| persistent_token.token.name)
      .collect::<Vec<_>>();

    assert_that(&names).is_equal_to(vec!["c".to_string(), "a".to_string(), "b".to_string()]);
  }
}
