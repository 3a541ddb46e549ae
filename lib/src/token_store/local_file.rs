use super::{move_in_place, TokenStore, TokenStoreError, TokenStoreResult};
use crate::api::{PersistentToken, TokenIdentifier};
use crate::otp::Token;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// On-disk form of a persistent token.
///
/// The token itself is kept as `otpauth://` url, which includes the secret.
#[derive(Clone, Debug, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
struct TokenRecord {
  id: String,
  url: String,
  #[zeroize(skip)]
  created_at: DateTime<Utc>,
}

impl TokenRecord {
  fn from_persistent_token(persistent_token: &PersistentToken) -> TokenRecord {
    TokenRecord {
      id: persistent_token.identifier.to_hex(),
      url: persistent_token.token.to_url(),
      created_at: persistent_token.creation_time,
    }
  }

  fn to_persistent_token(&self) -> TokenStoreResult<PersistentToken> {
    let identifier = TokenIdentifier::from_hex(&self.id)
      .ok_or_else(|| TokenStoreError::InvalidRecord(format!("{}: identifier is not hex", self.id)))?;
    let token =
      Token::from_url(&self.url).map_err(|error| TokenStoreError::InvalidRecord(format!("{}: {}", self.id, error)))?;

    Ok(PersistentToken::new(identifier, token, self.created_at))
  }
}

/// Token store keeping all tokens in a single JSON file of the local file-system.
///
/// The previous content is kept as backup next to the file on every write.
#[derive(Debug)]
pub struct LocalFileTokenStore {
  path: RwLock<PathBuf>,
}

impl LocalFileTokenStore {
  pub fn new<P: Into<PathBuf>>(path: P) -> LocalFileTokenStore {
    LocalFileTokenStore {
      path: RwLock::new(path.into()),
    }
  }

  fn read_records(path: &Path) -> TokenStoreResult<Vec<TokenRecord>> {
    match File::open(path) {
      Ok(mut file) => {
        let mut content = vec![];

        file.read_to_end(&mut content)?;
        let records = serde_json::from_slice::<Vec<TokenRecord>>(&content);
        content.zeroize();

        Ok(records?)
      }
      Err(ref err) if err.kind() == io::ErrorKind::NotFound => Ok(vec![]),
      Err(err) => Err(err.into()),
    }
  }

  fn write_records(path: &Path, records: &[TokenRecord]) -> TokenStoreResult<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    if path.exists() {
      fs::copy(path, path.with_extension("bak"))?;
    }

    let mut content = serde_json::to_vec_pretty(records)?;
    let mut file = File::create(path)?;

    file.write_all(&content)?;
    file.flush()?;
    file.sync_all()?;
    content.zeroize();

    debug!("Wrote {} tokens to {}", records.len(), path.to_string_lossy());

    Ok(())
  }

  fn modify<F, T>(&self, f: F) -> TokenStoreResult<T>
  where
    F: FnOnce(&mut Vec<TokenRecord>) -> TokenStoreResult<T>,
  {
    let path = self.path.write()?;
    let mut records = Self::read_records(&path)?;
    let result = f(&mut records)?;

    Self::write_records(&path, &records)?;

    Ok(result)
  }
}

impl TokenStore for LocalFileTokenStore {
  fn list(&self) -> TokenStoreResult<Vec<PersistentToken>> {
    let path = self.path.read()?;

    Self::read_records(&path)?
      .iter()
      .map(TokenRecord::to_persistent_token)
      .collect()
  }

  fn add(&self, token: Token, creation_time: DateTime<Utc>) -> TokenStoreResult<PersistentToken> {
    let persistent_token = PersistentToken::new(TokenIdentifier::generate(), token, creation_time);

    self.modify(|records| {
      records.push(TokenRecord::from_persistent_token(&persistent_token));
      Ok(())
    })?;

    Ok(persistent_token)
  }

  fn update(&self, identifier: &TokenIdentifier, token: Token) -> TokenStoreResult<PersistentToken> {
    let id = identifier.to_hex();

    self.modify(|records| {
      let record = records
        .iter_mut()
        .find(|record| record.id == id)
        .ok_or_else(|| TokenStoreError::NotFound(id.clone()))?;
      let updated = record.to_persistent_token()?.with_token(token);

      *record = TokenRecord::from_persistent_token(&updated);

      Ok(updated)
    })
  }

  fn delete(&self, identifier: &TokenIdentifier) -> TokenStoreResult<()> {
    let id = identifier.to_hex();

    self.modify(|records| {
      let before = records.len();

      records.retain(|record| record.id != id);

      if records.len() == before {
        return Err(TokenStoreError::NotFound(id.clone()));
      }
      Ok(())
    })
  }

  fn move_token(&self, from: usize, to: usize) -> TokenStoreResult<()> {
    self.modify(|records| move_in_place(records, from, to))
  }
}
