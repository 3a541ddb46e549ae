use anyhow::{anyhow, Result};
use authenticator_lib::api::{ActionHandler, TokenAction};
use authenticator_lib::token_store::TokenStore;
use log::{debug, info, warn};
use std::sync::Arc;

/// Changes to apply when an edit action is dispatched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenEdit {
  pub name: Option<String>,
  pub issuer: Option<String>,
}

/// Where copied passwords end up.
pub trait PasswordSink {
  fn put(&mut self, password: &str) -> Result<()>;
}

/// System clipboard, falls back to stdout if there is none.
pub struct ClipboardSink;

impl PasswordSink for ClipboardSink {
  fn put(&mut self, password: &str) -> Result<()> {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(password.to_string())) {
      Ok(()) => {
        info!("Password copied to clipboard");
        println!("Password copied to clipboard");
      }
      Err(error) => {
        warn!("Clipboard not available: {}", error);
        println!("{}", password);
      }
    }
    Ok(())
  }
}

/// Dispatches token actions against a token store.
pub struct CliActionHandler<P: PasswordSink> {
  store: Arc<dyn TokenStore>,
  sink: P,
  edit: Option<TokenEdit>,
}

impl<P: PasswordSink> CliActionHandler<P> {
  pub fn new(store: Arc<dyn TokenStore>, sink: P) -> Self {
    CliActionHandler { store, sink, edit: None }
  }

  pub fn with_edit(self, edit: TokenEdit) -> Self {
    CliActionHandler {
      edit: Some(edit),
      ..self
    }
  }
}

impl<P: PasswordSink> ActionHandler for CliActionHandler<P> {
  type Error = anyhow::Error;

  fn handle(&mut self, action: TokenAction) -> Result<()> {
    debug!("Handle action {:?}", action);
    match action {
      TokenAction::NoAction => (),
      TokenAction::CopyPassword(password) => self.sink.put(&password)?,
      TokenAction::UpdatePersistentToken(persistent_token) => {
        self
          .store
          .update(&persistent_token.identifier, persistent_token.token.successor())?;
      }
      TokenAction::EditPersistentToken(persistent_token) => {
        let edit = self.edit.take().ok_or_else(|| anyhow!("Nothing to change"))?;
        let mut token = persistent_token.token.clone();

        if let Some(name) = edit.name {
          token.name = name;
        }
        if let Some(issuer) = edit.issuer {
          token.issuer = issuer;
        }
        self.store.update(&persistent_token.identifier, token)?;
      }
      TokenAction::DeletePersistentToken(persistent_token) => self.store.delete(&persistent_token.identifier)?,
      TokenAction::MoveToken { from, to } => self.store.move_token(from, to)?,
    }
    Ok(())
  }
}
