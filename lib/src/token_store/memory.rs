use super::{move_in_place, TokenStore, TokenStoreError, TokenStoreResult};
use crate::api::{PersistentToken, TokenIdentifier};
use crate::otp::Token;
use chrono::{DateTime, Utc};
use std::sync::RwLock;

/// Memory based token store.
///
/// Mostly useful for unit-testing.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
  tokens: RwLock<Vec<PersistentToken>>,
}

impl MemoryTokenStore {
  pub fn new() -> MemoryTokenStore {
    Default::default()
  }
}

impl TokenStore for MemoryTokenStore {
  fn list(&self) -> TokenStoreResult<Vec<PersistentToken>> {
    Ok(self.tokens.read()?.clone())
  }

  fn add(&self, token: Token, creation_time: DateTime<Utc>) -> TokenStoreResult<PersistentToken> {
    let persistent_token = PersistentToken::new(TokenIdentifier::generate(), token, creation_time);

    self.tokens.write()?.push(persistent_token.clone());

    Ok(persistent_token)
  }

  fn update(&self, identifier: &TokenIdentifier, token: Token) -> TokenStoreResult<PersistentToken> {
    let mut tokens = self.tokens.write()?;
    let existing = tokens
      .iter_mut()
      .find(|persistent_token| &persistent_token.identifier == identifier)
      .ok_or_else(|| TokenStoreError::NotFound(identifier.to_hex()))?;

    *existing = existing.with_token(token);

    Ok(existing.clone())
  }

  fn delete(&self, identifier: &TokenIdentifier) -> TokenStoreResult<()> {
    let mut tokens = self.tokens.write()?;
    let before = tokens.len();

    tokens.retain(|persistent_token| &persistent_token.identifier != identifier);

    if tokens.len() == before {
      return Err(TokenStoreError::NotFound(identifier.to_hex()));
    }
    Ok(())
  }

  fn move_token(&self, from: usize, to: usize) -> TokenStoreResult<()> {
    move_in_place(&mut *self.tokens.write()?, from, to)
  }
}
