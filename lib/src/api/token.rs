use crate::otp::Token;
use chrono::{DateTime, Utc};
use data_encoding::HEXLOWER;
use rand::{thread_rng, RngCore};
use std::fmt;

pub const IDENTIFIER_LENGTH: usize = 16;

/// Opaque identifier of a persisted token.
///
/// Stays the same when the token is edited or its counter incremented.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenIdentifier(Vec<u8>);

impl TokenIdentifier {
  pub fn new(raw: Vec<u8>) -> TokenIdentifier {
    TokenIdentifier(raw)
  }

  pub fn generate() -> TokenIdentifier {
    let mut raw = vec![0u8; IDENTIFIER_LENGTH];

    thread_rng().fill_bytes(&mut raw);

    TokenIdentifier(raw)
  }

  pub fn from_hex(hex: &str) -> Option<TokenIdentifier> {
    HEXLOWER.decode(hex.to_lowercase().as_bytes()).ok().map(TokenIdentifier)
  }

  pub fn to_hex(&self) -> String {
    HEXLOWER.encode(&self.0)
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }
}

impl fmt::Display for TokenIdentifier {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.to_hex())
  }
}

impl fmt::Debug for TokenIdentifier {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "TokenIdentifier({})", self.to_hex())
  }
}

/// A token as it is kept in a token store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistentToken {
  pub identifier: TokenIdentifier,
  pub token: Token,
  pub creation_time: DateTime<Utc>,
}

impl PersistentToken {
  pub fn new(identifier: TokenIdentifier, token: Token, creation_time: DateTime<Utc>) -> PersistentToken {
    PersistentToken {
      identifier,
      token,
      creation_time,
    }
  }

  /// Same identity and creation time, different token content.
  pub fn with_token(&self, token: Token) -> PersistentToken {
    PersistentToken {
      identifier: self.identifier.clone(),
      token,
      creation_time: self.creation_time,
    }
  }
}
