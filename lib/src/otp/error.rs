use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OTPError {
  #[error("Invalid url: {0}")]
  InvalidUrl(String),
  #[error("Invalid url scheme. Expected otpauth")]
  InvalidScheme,
  #[error("Invalid OTP type. Only totp and hotp are supported")]
  InvalidType,
  #[error("Invalid OTP algorithm. Only SHA1, SHA256, SHA512 are supported")]
  InvalidAlgorithm,
  #[error("Invalid secret")]
  InvalidSecret,
  #[error("Invalid number of digits: {0}. Expected 6 to 8")]
  InvalidDigits(u8),
  #[error("Invalid period: {0}")]
  InvalidPeriod(u32),
  #[error("Invalid time: {0}. Time must not be before the unix epoch")]
  InvalidTime(i64),
  #[error("Missing required parameter: {0}")]
  MissingParameter(String),
}

pub type OTPResult<T> = Result<T, OTPError>;

error_convert_from!(url::ParseError, OTPError, InvalidUrl(display));
