use super::{OTPAlgorithm, OTPError, OTPResult};
use byteorder::{BigEndian, ByteOrder};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

#[derive(Debug)]
pub struct HOTPGenerator<'a> {
  pub algorithm: OTPAlgorithm,
  pub counter: u64,
  pub digits: u8,
  pub secret: &'a [u8],
}

impl HOTPGenerator<'_> {
  fn calculate<M>(&self) -> OTPResult<String>
  where
    M: Mac + KeyInit,
  {
    let mut mac = <M as KeyInit>::new_from_slice(self.secret).map_err(|_| OTPError::InvalidSecret)?;
    mac.update(&self.counter.to_be_bytes());

    let digest = mac.finalize().into_bytes();

    let offset: usize = (digest[digest.len() - 1] & 0xf) as usize;

    let base = BigEndian::read_u32(&digest[offset..offset + 4]) & 0x7fff_ffff;

    Ok(format!(
      "{:01$}",
      base % (10_u32).pow(u32::from(self.digits)),
      self.digits as usize
    ))
  }

  pub fn generate(&self) -> OTPResult<String> {
    match self.algorithm {
      OTPAlgorithm::SHA1 => self.calculate::<Hmac<Sha1>>(),
      OTPAlgorithm::SHA256 => self.calculate::<Hmac<Sha256>>(),
      OTPAlgorithm::SHA512 => self.calculate::<Hmac<Sha512>>(),
    }
  }
}
