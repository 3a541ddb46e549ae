use super::AppContext;
use crate::view::render_token_list;
use anyhow::Result;
use authenticator_lib::view::{changes_between, TokenRowModel};
use clap::Args;
use log::debug;
use std::thread;
use std::time::Duration;

const WATCH_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Args)]
pub struct ListCommand {
  #[clap(short, long, help = "Only show tokens whose name or issuer contains this")]
  filter: Option<String>,
  #[clap(short, long, help = "Keep refreshing the passwords")]
  watch: bool,
}

impl ListCommand {
  pub fn run(self, context: &mut AppContext) -> Result<()> {
    let mut previous: Option<Vec<TokenRowModel>> = None;

    loop {
      let view_model = context.list_view_model(self.filter.clone())?;
      let changed = match &previous {
        Some(previous_rows) => {
          let changes = changes_between(previous_rows, &view_model.rows);
          debug!("Row changes: {:?}", changes);
          !changes.is_empty()
        }
        None => true,
      };

      if changed {
        if self.watch {
          print!("\x1b[2J\x1b[H");
        }
        println!("{}", render_token_list(&view_model));
      }
      if !self.watch {
        return Ok(());
      }
      previous = Some(view_model.rows);
      thread::sleep(WATCH_INTERVAL);
    }
  }
}
