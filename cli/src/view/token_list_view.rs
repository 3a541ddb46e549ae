use super::colored;
use authenticator_lib::view::{TokenListViewModel, TokenRowModel};
use crossterm_style::Color;

pub fn render_token_list(view_model: &TokenListViewModel) -> String {
  if view_model.rows.is_empty() {
    return if view_model.is_filtering {
      format!("No matches among {} tokens", view_model.total_tokens)
    } else {
      "No tokens yet, add one with 'authenticator add <otpauth-url>'".to_string()
    };
  }
  let name_width = view_model.rows.iter().map(row_title_len).max().unwrap_or(0);
  let mut lines = Vec::with_capacity(view_model.rows.len() + 1);

  for (index, row) in view_model.rows.iter().enumerate() {
    lines.push(render_row(index + 1, row, name_width));
  }
  if let Some(ring_period) = view_model.ring_period {
    lines.push(colored(format!("(refreshes every {}s)", ring_period), Color::DarkGrey));
  }

  lines.join("\n")
}

fn row_title(row: &TokenRowModel) -> String {
  if row.issuer.is_empty() {
    row.name.clone()
  } else {
    format!("{} ({})", row.name, row.issuer)
  }
}

fn row_title_len(row: &TokenRowModel) -> usize {
  row_title(row).chars().count()
}

fn render_row(position: usize, row: &TokenRowModel, name_width: usize) -> String {
  let title = row_title(row);
  let padding = " ".repeat(name_width.saturating_sub(title.chars().count()));
  let password = if row.select_action.is_no_action() {
    colored(&row.password, Color::Yellow)
  } else {
    colored(&row.password, Color::Green)
  };
  let button = if row.shows_button {
    colored("  [next]", Color::Cyan)
  } else {
    String::new()
  };

  format!("{:>3}  {}{}  {}{}", position, title, padding, password, button)
}

#[cfg(test)]
mod tests {
  use super::render_token_list;
  use crate::commands::tests::context_with_tokens;
  use spectral::prelude::*;

  #[test]
  fn test_render_empty() {
    let context = context_with_tokens(&[]);

    assert_that(&render_token_list(&context.list_view_model(None).unwrap()))
      .starts_with("No tokens yet");
    assert_that(&render_token_list(&context.list_view_model(Some("x".to_string())).unwrap()))
      .is_equal_to("No matches among 0 tokens".to_string());
  }

  #[test]
  fn test_render_rows() {
    let context = context_with_tokens(&[
      "otpauth://totp/ACME:alice?secret=JBSWY3DPEHPK3PXP",
      "otpauth://hotp/bob?secret=JBSWY3DPEHPK3PXP&counter=0",
    ]);
    let rendered = render_token_list(&context.list_view_model(None).unwrap());
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_that(&lines).has_length(3);
    assert_that(&lines[0]).starts_with("  1  alice (ACME)  ");
    assert_that(&lines[1]).starts_with("  2  bob           ");
    assert_that(&lines[1]).ends_with("[next]");
    assert_that(&lines[2]).contains("30s");
  }
}
