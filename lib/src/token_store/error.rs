use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TokenStoreError {
  #[error("Token not found: {0}")]
  NotFound(String),
  #[error("Invalid token record: {0}")]
  InvalidRecord(String),
  #[error("Index out of range: {0}")]
  IndexOutOfRange(usize),
  #[error("IO: {0}")]
  IO(String),
  #[error("Internal locking problem: {0}")]
  Mutex(String),
}

pub type TokenStoreResult<T> = Result<T, TokenStoreError>;

error_convert_from!(std::io::Error, TokenStoreError, IO(display));
error_convert_from!(serde_json::Error, TokenStoreError, IO(display));

impl<T> From<std::sync::PoisonError<T>> for TokenStoreError {
  fn from(error: std::sync::PoisonError<T>) -> Self {
    TokenStoreError::Mutex(format!("{}", error))
  }
}
