use super::{AccessSchedule, Identifiable};
use crate::api::{PersistentToken, TokenAction, TokenIdentifier};
use crate::clock::{Clock, DisplayTime};
use crate::otp::Factor;
use log::debug;

/// Display configuration of a token row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowOptions {
  pub digit_group_size: usize,
  pub can_reorder: bool,
  pub schedule: AccessSchedule,
}

impl RowOptions {
  pub fn new(digit_group_size: usize) -> RowOptions {
    RowOptions {
      digit_group_size,
      can_reorder: true,
      schedule: AccessSchedule::default(),
    }
  }

  pub fn reorderable(self, can_reorder: bool) -> RowOptions {
    RowOptions { can_reorder, ..self }
  }

  pub fn with_schedule(self, schedule: AccessSchedule) -> RowOptions {
    RowOptions { schedule, ..self }
  }
}

/// Display state of a single token in the token list.
///
/// Rebuilt on every refresh. Two models are equal only if every displayed field and action
/// matches, use [`Identifiable::has_same_identity`] to find the same token across refreshes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRowModel {
  pub name: String,
  pub issuer: String,
  /// The grouped password or a countdown to the next access window.
  pub password: String,
  pub shows_button: bool,
  pub can_reorder: bool,
  pub button_action: TokenAction,
  pub select_action: TokenAction,
  pub edit_action: TokenAction,
  pub delete_action: TokenAction,
  identifier: TokenIdentifier,
}

impl TokenRowModel {
  pub fn new<C: Clock + ?Sized>(
    persistent_token: &PersistentToken,
    display_time: DisplayTime,
    digit_group_size: usize,
    clock: &C,
  ) -> TokenRowModel {
    Self::with_options(persistent_token, display_time, &RowOptions::new(digit_group_size), clock)
  }

  pub fn with_options<C: Clock + ?Sized>(
    persistent_token: &PersistentToken,
    display_time: DisplayTime,
    options: &RowOptions,
    clock: &C,
  ) -> TokenRowModel {
    let token = &persistent_token.token;
    let raw_password = match token.generator.password(display_time.date()) {
      Ok(password) => password,
      Err(error) => {
        debug!(
          "Password generation failed for token {}: {}",
          persistent_token.identifier, error
        );
        String::new()
      }
    };

    let (password, select_action) = match options.schedule.countdown(clock.now(), persistent_token.creation_time) {
      Some(countdown) => (countdown.to_string(), TokenAction::NoAction),
      None => (
        chunk_password(&raw_password, options.digit_group_size),
        TokenAction::CopyPassword(raw_password),
      ),
    };

    TokenRowModel {
      name: token.name.clone(),
      issuer: token.issuer.clone(),
      password,
      shows_button: matches!(token.generator.factor, Factor::Counter(_)),
      can_reorder: options.can_reorder,
      button_action: TokenAction::UpdatePersistentToken(persistent_token.clone()),
      select_action,
      edit_action: TokenAction::EditPersistentToken(persistent_token.clone()),
      delete_action: TokenAction::DeletePersistentToken(persistent_token.clone()),
      identifier: persistent_token.identifier.clone(),
    }
  }

  pub fn identifier(&self) -> &TokenIdentifier {
    &self.identifier
  }
}

impl Identifiable for TokenRowModel {
  fn has_same_identity(&self, other: &Self) -> bool {
    self.identifier == other.identifier
  }
}

/// Group a password into chunks of `chunk_size` characters, separated by spaces.
///
/// A `chunk_size` of 0 leaves the password as is.
pub fn chunk_password(password: &str, chunk_size: usize) -> String {
  if chunk_size == 0 {
    return password.to_string();
  }
  let mut chunked = String::with_capacity(password.len() + password.len() / chunk_size);

  for (i, c) in password.chars().enumerate() {
    if i > 0 && i % chunk_size == 0 {
      chunked.push(' ');
    }
    chunked.push(c);
  }

  chunked
}
