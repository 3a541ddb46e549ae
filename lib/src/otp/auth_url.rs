use super::{Factor, Generator, OTPAlgorithm, OTPError, OTPResult, OTPSecret, Token, DEFAULT_DIGITS, DEFAULT_PERIOD};
use std::str::FromStr;
use url::{form_urlencoded, Url};

const OTP_URL_SCHEME: &str = "otpauth";

impl Token {
  /// Parse a token from an `otpauth://` url (as usually provided by QR codes).
  pub fn from_url<S: AsRef<str>>(url_str: S) -> OTPResult<Token> {
    let url = Url::parse(url_str.as_ref())?;
    if url.scheme() != OTP_URL_SCHEME {
      return Err(OTPError::InvalidScheme);
    }
    let factor = match url.host_str() {
      Some("totp") => {
        let period = find_parameter(&url, "period")?.unwrap_or(DEFAULT_PERIOD);
        Factor::Timer { period }
      }
      Some("hotp") => {
        let counter = find_required_parameter(&url, "counter")?;
        Factor::Counter(counter)
      }
      _ => return Err(OTPError::InvalidType),
    };
    let label = url.path().trim_start_matches('/');
    let (label_issuer, name) = match label.split_once(':') {
      Some((issuer, name)) => (Some(decode_label(issuer)), decode_label(name)),
      None => (None, decode_label(label)),
    };
    let issuer = find_parameter::<String>(&url, "issuer")?
      .or(label_issuer)
      .unwrap_or_default();
    let algorithm = match find_parameter::<String>(&url, "algorithm")? {
      Some(algorithm) => algorithm.parse::<OTPAlgorithm>()?,
      None => OTPAlgorithm::SHA1,
    };
    let digits = find_parameter(&url, "digits")?.unwrap_or(DEFAULT_DIGITS);
    let secret: OTPSecret = find_required_parameter(&url, "secret")?;

    Ok(Token {
      name,
      issuer,
      generator: Generator::new(factor, secret, algorithm, digits)?,
    })
  }

  pub fn to_url(&self) -> String {
    let mut result = format!("{}://{}/", OTP_URL_SCHEME, self.generator.factor);

    if !self.issuer.is_empty() {
      result.extend(form_urlencoded::byte_serialize(self.issuer.as_bytes()));
      result += ":"
    }
    result.extend(form_urlencoded::byte_serialize(self.name.as_bytes()));
    result += "?secret=";
    result += &self.generator.secret.to_base32();
    match self.generator.factor {
      Factor::Timer { period } if period != DEFAULT_PERIOD => result += &format!("&period={}", period),
      Factor::Timer { .. } => (),
      Factor::Counter(counter) => result += &format!("&counter={}", counter),
    }
    if self.generator.digits != DEFAULT_DIGITS {
      result += &format!("&digits={}", self.generator.digits);
    }
    if !self.issuer.is_empty() {
      result += "&issuer=";
      result.extend(form_urlencoded::byte_serialize(self.issuer.as_bytes()));
    }
    if self.generator.algorithm != OTPAlgorithm::SHA1 {
      result += &format!("&algorithm={}", self.generator.algorithm);
    }

    result
  }
}

/// Percent-decode one part of the label, separators inside names or issuers stay encoded
/// until the label has been split.
fn decode_label(raw: &str) -> String {
  form_urlencoded::parse(format!("label={}", raw.replace('&', "%26")).as_bytes())
    .map(|(_, value)| value.trim().to_string())
    .next()
    .unwrap_or_default()
}

fn find_parameter<T: FromStr>(url: &Url, name: &str) -> OTPResult<Option<T>> {
  match url.query_pairs().find(|(key, _)| key == name) {
    Some((_, value)) => {
      let t = value
        .parse::<T>()
        .map_err(|_| OTPError::MissingParameter(name.to_string()))?;
      Ok(Some(t))
    }
    None => Ok(None),
  }
}

fn find_required_parameter<T: FromStr>(url: &Url, name: &str) -> OTPResult<T> {
  find_parameter(url, name)?.ok_or_else(|| OTPError::MissingParameter(name.to_string()))
}
