use super::colored;
use authenticator_lib::view::{DisplayOptionsViewModel, InfoListViewModel, InfoViewModel, MenuChildViewModel, MenuViewModel};
use crossterm_style::Color;

pub fn render_menu(view_model: &MenuViewModel) -> String {
  match &view_model.child {
    MenuChildViewModel::None => render_info_list(&view_model.info_list),
    MenuChildViewModel::Info(info) => render_info(info),
    MenuChildViewModel::DisplayOptions(display_options) => render_display_options(display_options),
  }
}

fn render_info_list(info_list: &InfoListViewModel) -> String {
  let mut lines = vec![colored(&info_list.title, Color::Cyan), String::new()];

  for (index, row) in info_list.rows.iter().enumerate() {
    lines.push(format!("{:>3}  {}", index + 1, colored(&row.title, Color::White)));
    lines.push(format!("     {}", row.description));
    lines.push(format!("     {} -> authenticator menu info {}", row.call_to_action, index + 1));
  }

  lines.join("\n")
}

fn render_info(info: &InfoViewModel) -> String {
  format!("{}\n\n{}", colored(&info.title, Color::Cyan), info.content)
}

fn render_display_options(display_options: &DisplayOptionsViewModel) -> String {
  let mut lines = vec![colored(&display_options.title, Color::Cyan), String::new()];

  for choice in &display_options.choices {
    let marker = if choice.selected { "*" } else { " " };
    lines.push(format!(" {} groups of {}: {}", marker, choice.size, choice.example));
  }

  lines.join("\n")
}
