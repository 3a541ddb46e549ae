mod menu_view;
mod token_list_view;

pub use self::menu_view::*;
pub use self::token_list_view::*;

use atty::Stream;
use crossterm_style::{style, Color};
use std::fmt::Display;

/// Colors are only used when talking to a terminal.
pub fn colored<D: Display + Clone>(text: D, color: Color) -> String {
  if atty::is(Stream::Stdout) {
    style(text).with(color).to_string()
  } else {
    text.to_string()
  }
}
