use super::chunk_password;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DIGIT_GROUP_SIZE: usize = 2;
pub const DIGIT_GROUP_SIZES: [usize; 2] = [2, 3];

const EXAMPLE_PASSWORD: &str = "123456";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayOptionsAction {
  SetDigitGroupSize(usize),
}

/// User adjustable display settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
  pub digit_group_size: usize,
}

impl Default for DisplayOptions {
  fn default() -> Self {
    DisplayOptions {
      digit_group_size: DEFAULT_DIGIT_GROUP_SIZE,
    }
  }
}

impl DisplayOptions {
  pub fn update(&self, action: DisplayOptionsAction) -> DisplayOptions {
    match action {
      DisplayOptionsAction::SetDigitGroupSize(digit_group_size) => DisplayOptions { digit_group_size },
    }
  }

  pub fn view_model(&self) -> DisplayOptionsViewModel {
    DisplayOptionsViewModel {
      title: "Display Options".to_string(),
      digit_group_size: self.digit_group_size,
      choices: DIGIT_GROUP_SIZES
        .iter()
        .map(|size| DigitGroupChoice {
          size: *size,
          example: chunk_password(EXAMPLE_PASSWORD, *size),
          selected: *size == self.digit_group_size,
          action: DisplayOptionsAction::SetDigitGroupSize(*size),
        })
        .collect(),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitGroupChoice {
  pub size: usize,
  pub example: String,
  pub selected: bool,
  pub action: DisplayOptionsAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayOptionsViewModel {
  pub title: String,
  pub digit_group_size: usize,
  pub choices: Vec<DigitGroupChoice>,
}
