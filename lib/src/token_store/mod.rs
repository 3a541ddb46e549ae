use crate::api::{PersistentToken, TokenIdentifier};
use crate::otp::Token;
use chrono::{DateTime, Utc};

mod error;
mod local_file;
mod memory;


pub use self::error::*;
pub use self::local_file::LocalFileTokenStore;
pub use self::memory::MemoryTokenStore;

/// Common interface of all token stores.
///
/// A token store keeps the ordered list of persistent tokens. Identifiers are assigned by the
/// store when a token is added and never change afterwards.
///
/// All implementations are supposed to be thread-safe.
pub trait TokenStore: std::fmt::Debug + Send + Sync {
  /// All tokens in display order.
  fn list(&self) -> TokenStoreResult<Vec<PersistentToken>>;

  /// Add a token to the end of the list.
  fn add(&self, token: Token, creation_time: DateTime<Utc>) -> TokenStoreResult<PersistentToken>;

  /// Replace the content of an existing token, keeping its identity.
  fn update(&self, identifier: &TokenIdentifier, token: Token) -> TokenStoreResult<PersistentToken>;

  fn delete(&self, identifier: &TokenIdentifier) -> TokenStoreResult<()>;

  /// Move the token at position `from` to position `to`.
  fn move_token(&self, from: usize, to: usize) -> TokenStoreResult<()>;
}

fn move_in_place<T>(items: &mut Vec<T>, from: usize, to: usize) -> TokenStoreResult<()> {
  if from >= items.len() {
    return Err(TokenStoreError::IndexOutOfRange(from));
  }
  if to >= items.len() {
    return Err(TokenStoreError::IndexOutOfRange(to));
  }
  let item = items.remove(from);
  items.insert(to, item);
  Ok(())
}
