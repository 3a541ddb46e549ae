use super::hotp::HOTPGenerator;
use super::{OTPAlgorithm, OTPResult};

#[derive(Debug)]
pub struct TOTPGenerator<'a> {
  pub algorithm: OTPAlgorithm,
  pub digits: u8,
  pub period: u32,
  pub secret: &'a [u8],
}

impl TOTPGenerator<'_> {
  /// Generate the password valid at `timestamp` (seconds since epoch).
  ///
  /// Also returns the timestamp at which the password expires.
  pub fn generate(&self, timestamp: u64) -> OTPResult<(String, u64)> {
    let period = u64::from(self.period);
    let hotp_gen = HOTPGenerator {
      algorithm: self.algorithm,
      counter: timestamp / period,
      digits: self.digits,
      secret: self.secret,
    };
    Ok((hotp_gen.generate()?, (timestamp / period + 1) * period))
  }
}
