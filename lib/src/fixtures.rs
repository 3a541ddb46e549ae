use crate::api::{PersistentToken, TokenIdentifier};
use crate::otp::{Factor, Generator, OTPAlgorithm, OTPSecret, Token};
use chrono::{DateTime, TimeZone, Utc};

pub const RFC_SECRET: &[u8] = b"12345678901234567890";

pub fn token(name: &str, issuer: &str, factor: Factor) -> Token {
  Token::new(
    name,
    issuer,
    Generator::new(factor, OTPSecret::new(RFC_SECRET.to_vec()), OTPAlgorithm::SHA1, 6).unwrap(),
  )
}

pub fn persistent_token(id: u8, name: &str, factor: Factor, creation_time: DateTime<Utc>) -> PersistentToken {
  PersistentToken::new(
    TokenIdentifier::new(vec![id; 4]),
    token(name, "Issuer", factor),
    creation_time,
  )
}

pub fn long_ago() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
}
