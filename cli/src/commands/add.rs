use super::AppContext;
use anyhow::{Context, Result};
use authenticator_lib::otp::Token;
use chrono::Utc;
use clap::Args;
use log::info;

#[derive(Debug, Args)]
pub struct AddCommand {
  #[clap(help = "otpauth:// url of the token (as encoded in the QR code)")]
  url: String,
}

impl AddCommand {
  pub fn run(self, context: &mut AppContext) -> Result<()> {
    let token = Token::from_url(&self.url).context("Invalid token url")?;
    let persistent_token = context
      .store
      .add(token, context.clock.now().with_timezone(&Utc))?;

    info!("Added token {}", persistent_token.identifier);
    println!("Added {}", persistent_token.token.name);

    Ok(())
  }
}
