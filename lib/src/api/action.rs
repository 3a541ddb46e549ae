use super::PersistentToken;

/// Follow-up commands exposed by the token list.
///
/// View models only describe these, the host dispatches them to an [`ActionHandler`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenAction {
  NoAction,
  CopyPassword(String),
  UpdatePersistentToken(PersistentToken),
  EditPersistentToken(PersistentToken),
  DeletePersistentToken(PersistentToken),
  MoveToken { from: usize, to: usize },
}

impl TokenAction {
  pub fn is_no_action(&self) -> bool {
    matches!(self, TokenAction::NoAction)
  }
}

/// Performs the side effects of a [`TokenAction`].
pub trait ActionHandler {
  type Error;

  fn handle(&mut self, action: TokenAction) -> Result<(), Self::Error>;
}
