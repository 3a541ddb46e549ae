use super::{RowOptions, TokenRowModel};
use crate::api::{PersistentToken, TokenAction};
use crate::clock::{Clock, DisplayTime};
use crate::otp::Factor;
use chrono::{DateTime, Utc};

/// The persisted tokens together with the current search filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
  pub persistent_tokens: Vec<PersistentToken>,
  pub filter: Option<String>,
}

impl TokenList {
  pub fn new(persistent_tokens: Vec<PersistentToken>) -> TokenList {
    TokenList {
      persistent_tokens,
      filter: None,
    }
  }

  pub fn with_filter<S: Into<String>>(self, filter: Option<S>) -> TokenList {
    TokenList {
      filter: filter.map(Into::into),
      ..self
    }
  }

  pub fn is_filtering(&self) -> bool {
    self.filter.as_ref().map(|filter| !filter.trim().is_empty()).unwrap_or(false)
  }

  /// Tokens matching the filter by name or issuer (case-insensitive).
  pub fn filtered_tokens(&self) -> Vec<&PersistentToken> {
    match self.filter.as_ref().map(|filter| filter.trim().to_lowercase()) {
      Some(filter) if !filter.is_empty() => self
        .persistent_tokens
        .iter()
        .filter(|persistent_token| {
          persistent_token.token.name.to_lowercase().contains(&filter)
            || persistent_token.token.issuer.to_lowercase().contains(&filter)
        })
        .collect(),
      _ => self.persistent_tokens.iter().collect(),
    }
  }

  /// Build the rows for a refresh at `display_time`.
  ///
  /// Reordering is only offered while the list is not filtered.
  pub fn view_model<C: Clock + ?Sized>(
    &self,
    display_time: DisplayTime,
    options: &RowOptions,
    clock: &C,
  ) -> TokenListViewModel {
    let is_filtering = self.is_filtering();
    let row_options = options.reorderable(options.can_reorder && !is_filtering);

    TokenListViewModel {
      rows: self
        .filtered_tokens()
        .into_iter()
        .map(|persistent_token| TokenRowModel::with_options(persistent_token, display_time, &row_options, clock))
        .collect(),
      ring_period: self.ring_period(),
      next_refresh_time: self.next_refresh_time(display_time),
      total_tokens: self.persistent_tokens.len(),
      is_filtering,
    }
  }

  /// Shortest period of all time based tokens.
  pub fn ring_period(&self) -> Option<u32> {
    self
      .persistent_tokens
      .iter()
      .filter_map(|persistent_token| match persistent_token.token.generator.factor {
        Factor::Timer { period } => Some(period),
        Factor::Counter(_) => None,
      })
      .min()
  }

  /// Earliest time any of the time based passwords changes after `display_time`.
  pub fn next_refresh_time(&self, display_time: DisplayTime) -> Option<DateTime<Utc>> {
    self
      .persistent_tokens
      .iter()
      .filter_map(|persistent_token| persistent_token.token.generator.valid_until(display_time.date()))
      .min()
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenListViewModel {
  pub rows: Vec<TokenRowModel>,
  pub ring_period: Option<u32>,
  pub next_refresh_time: Option<DateTime<Utc>>,
  pub total_tokens: usize,
  pub is_filtering: bool,
}

impl TokenListViewModel {
  /// Action for dragging the row at `from` to `to`, `NoAction` if the rows may not be reordered.
  pub fn move_action(&self, from: usize, to: usize) -> TokenAction {
    let reorderable = |index: usize| self.rows.get(index).map(|row| row.can_reorder).unwrap_or(false);

    if from != to && reorderable(from) && reorderable(to) {
      TokenAction::MoveToken { from, to }
    } else {
      TokenAction::NoAction
    }
  }
}
