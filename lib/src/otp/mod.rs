use chrono::{DateTime, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

mod error;
mod hotp;
mod totp;
mod auth_url;


pub use self::error::*;
use self::hotp::HOTPGenerator;
use self::totp::TOTPGenerator;

pub const DEFAULT_PERIOD: u32 = 30;
pub const DEFAULT_DIGITS: u8 = 6;

/// What triggers the generation of a new password.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Factor {
  /// Counter based (HOTP). A new password requires an explicit increment.
  Counter(u64),
  /// Time based (TOTP). A new password every `period` seconds.
  Timer { period: u32 },
}

impl fmt::Display for Factor {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Factor::Counter(_) => write!(f, "hotp")?,
      Factor::Timer { .. } => write!(f, "totp")?,
    }
    Ok(())
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OTPAlgorithm {
  SHA1,
  SHA256,
  SHA512,
}

impl fmt::Display for OTPAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      OTPAlgorithm::SHA1 => write!(f, "SHA1")?,
      OTPAlgorithm::SHA256 => write!(f, "SHA256")?,
      OTPAlgorithm::SHA512 => write!(f, "SHA512")?,
    }
    Ok(())
  }
}

impl FromStr for OTPAlgorithm {
  type Err = OTPError;

  fn from_str(s: &str) -> OTPResult<Self> {
    match s.to_uppercase().as_str() {
      "SHA1" => Ok(OTPAlgorithm::SHA1),
      "SHA256" => Ok(OTPAlgorithm::SHA256),
      "SHA512" => Ok(OTPAlgorithm::SHA512),
      _ => Err(OTPError::InvalidAlgorithm),
    }
  }
}

#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct OTPSecret(Vec<u8>);

impl OTPSecret {
  pub fn new(raw: Vec<u8>) -> OTPSecret {
    OTPSecret(raw)
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  pub fn to_base32(&self) -> String {
    data_encoding::BASE32_NOPAD.encode(&self.0)
  }
}

impl fmt::Debug for OTPSecret {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "OTPSecret(<{} bytes>)", self.0.len())
  }
}

impl FromStr for OTPSecret {
  type Err = OTPError;

  fn from_str(s: &str) -> OTPResult<Self> {
    let normalized = s
      .chars()
      .filter(|c| !c.is_whitespace() && *c != '=')
      .collect::<String>()
      .to_uppercase();
    match data_encoding::BASE32_NOPAD.decode(normalized.as_bytes()) {
      Ok(bytes) if !bytes.is_empty() => Ok(OTPSecret(bytes)),
      _ => Err(OTPError::InvalidSecret),
    }
  }
}

/// Password generator of a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
  pub factor: Factor,
  pub secret: OTPSecret,
  pub algorithm: OTPAlgorithm,
  pub digits: u8,
}

impl Generator {
  pub fn new(factor: Factor, secret: OTPSecret, algorithm: OTPAlgorithm, digits: u8) -> OTPResult<Generator> {
    let generator = Generator {
      factor,
      secret,
      algorithm,
      digits,
    };
    generator.validate()?;
    Ok(generator)
  }

  /// Generate the password that is valid at a given time.
  ///
  /// Counter based generators ignore the time.
  pub fn password(&self, at: DateTime<Utc>) -> OTPResult<String> {
    self.validate()?;
    match self.factor {
      Factor::Counter(counter) => HOTPGenerator {
        algorithm: self.algorithm,
        counter,
        digits: self.digits,
        secret: self.secret.as_bytes(),
      }
      .generate(),
      Factor::Timer { period } => {
        let (password, _) = TOTPGenerator {
          algorithm: self.algorithm,
          digits: self.digits,
          period,
          secret: self.secret.as_bytes(),
        }
        .generate(Self::timestamp(at)?)?;
        Ok(password)
      }
    }
  }

  /// Time at which the password generated at `at` is replaced by the next one.
  ///
  /// `None` for counter based generators.
  pub fn valid_until(&self, at: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match self.factor {
      Factor::Timer { period } if period > 0 => {
        let timestamp = Self::timestamp(at).ok()?;
        let period = u64::from(period);
        let next = (timestamp / period + 1) * period;
        Utc.timestamp_opt(i64::try_from(next).ok()?, 0).single()
      }
      _ => None,
    }
  }

  /// The generator that follows this one.
  ///
  /// Increments the counter of counter based generators, time based generators are returned as is.
  pub fn successor(&self) -> Generator {
    let factor = match self.factor {
      Factor::Counter(counter) => Factor::Counter(counter.wrapping_add(1)),
      timer => timer,
    };
    Generator {
      factor,
      ..self.clone()
    }
  }

  fn validate(&self) -> OTPResult<()> {
    if !(6..=8).contains(&self.digits) {
      return Err(OTPError::InvalidDigits(self.digits));
    }
    if let Factor::Timer { period: 0 } = self.factor {
      return Err(OTPError::InvalidPeriod(0));
    }
    if self.secret.as_bytes().is_empty() {
      return Err(OTPError::InvalidSecret);
    }
    Ok(())
  }

  fn timestamp(at: DateTime<Utc>) -> OTPResult<u64> {
    let timestamp = at.timestamp();
    u64::try_from(timestamp).map_err(|_| OTPError::InvalidTime(timestamp))
  }
}

/// A named password generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
  pub name: String,
  pub issuer: String,
  pub generator: Generator,
}

impl Token {
  pub fn new<N: Into<String>, I: Into<String>>(name: N, issuer: I, generator: Generator) -> Token {
    Token {
      name: name.into(),
      issuer: issuer.into(),
      generator,
    }
  }

  pub fn successor(&self) -> Token {
    Token {
      generator: self.generator.successor(),
      ..self.clone()
    }
  }
}
