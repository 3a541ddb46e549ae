use super::AppContext;
use crate::config::write_config;
use crate::view::render_menu;
use anyhow::{bail, Result};
use authenticator_lib::view::{InfoList, Menu, MenuAction, MenuChild};
use clap::{Args, Subcommand};
use log::info;

#[derive(Debug, Subcommand)]
pub enum MenuSubCommand {
  #[clap(about = "Show an entry of the info list")]
  Info {
    #[clap(help = "Position of the entry")]
    entry: usize,
  },
  #[clap(about = "Show or change display options")]
  DisplayOptions {
    #[clap(long, help = "Number of digits per group")]
    digit_group_size: Option<usize>,
  },
}

#[derive(Debug, Args)]
pub struct MenuCommand {
  #[clap(subcommand)]
  subcommand: Option<MenuSubCommand>,
}

impl MenuCommand {
  pub fn run(self, context: &mut AppContext) -> Result<()> {
    let info_list = InfoList::default();
    let child = match self.subcommand {
      None => MenuChild::None,
      Some(MenuSubCommand::Info { entry }) => {
        let action = match entry.checked_sub(1).and_then(|index| info_list.entries.get(index)) {
          Some(entry) => entry.action.clone(),
          None => bail!("No info entry at position {}", entry),
        };
        match action {
          MenuAction::ShowInfo(info) => MenuChild::Info(info),
          MenuAction::ShowDisplayOptions => MenuChild::DisplayOptions(context.config.display_options),
          MenuAction::Dismiss => MenuChild::None,
        }
      }
      Some(MenuSubCommand::DisplayOptions { digit_group_size }) => {
        if let Some(digit_group_size) = digit_group_size {
          change_digit_group_size(context, digit_group_size)?;
        }
        MenuChild::DisplayOptions(context.config.display_options)
      }
    };

    println!("{}", render_menu(&Menu::new(info_list, child).view_model()));

    Ok(())
  }
}

fn change_digit_group_size(context: &mut AppContext, digit_group_size: usize) -> Result<()> {
  let view_model = context.config.display_options.view_model();
  let choice = match view_model.choices.iter().find(|choice| choice.size == digit_group_size) {
    Some(choice) => choice,
    None => bail!(
      "Unsupported digit group size {}, choose one of {:?}",
      digit_group_size,
      view_model.choices.iter().map(|choice| choice.size).collect::<Vec<_>>()
    ),
  };

  context.config.display_options = context.config.display_options.update(choice.action);
  write_config(&context.config_file, &context.config)?;
  info!("Digit group size changed to {}", digit_group_size);

  Ok(())
}
