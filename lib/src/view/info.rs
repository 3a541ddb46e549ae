use super::MenuAction;

const BACKUP_GUIDE: &str = "Tokens are stored only on this device. They are not synchronized or backed up \
anywhere else. Keep the original setup codes (or the otpauth urls) of your accounts in a safe place, \
otherwise losing this device means losing access to your accounts.";

const LICENSES: &str = "This software is released under the MIT license. It makes use of several open \
source libraries, each distributed under its own license terms.";

/// A page of static information.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Info {
  pub title: String,
  pub content: String,
}

impl Info {
  pub fn new<T: Into<String>, C: Into<String>>(title: T, content: C) -> Info {
    Info {
      title: title.into(),
      content: content.into(),
    }
  }

  pub fn backup_guide() -> Info {
    Info::new("Backups", BACKUP_GUIDE)
  }

  pub fn licenses() -> Info {
    Info::new("Acknowledgements", LICENSES)
  }

  pub fn view_model(&self) -> InfoViewModel {
    InfoViewModel {
      title: self.title.clone(),
      content: self.content.clone(),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoViewModel {
  pub title: String,
  pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoListEntry {
  pub title: String,
  pub description: String,
  pub call_to_action: String,
  pub action: MenuAction,
}

/// Root screen of the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoList {
  pub entries: Vec<InfoListEntry>,
}

impl Default for InfoList {
  fn default() -> Self {
    InfoList {
      entries: vec![
        InfoListEntry {
          title: "Backups".to_string(),
          description: "For security reasons, tokens are stored only on this device.".to_string(),
          call_to_action: "Learn more".to_string(),
          action: MenuAction::ShowInfo(Info::backup_guide()),
        },
        InfoListEntry {
          title: "Display Options".to_string(),
          description: "Change how passwords are displayed.".to_string(),
          call_to_action: "Change options".to_string(),
          action: MenuAction::ShowDisplayOptions,
        },
        InfoListEntry {
          title: "Open Source".to_string(),
          description: "This software is free and open source.".to_string(),
          call_to_action: "View acknowledgements".to_string(),
          action: MenuAction::ShowInfo(Info::licenses()),
        },
      ],
    }
  }
}

impl InfoList {
  pub fn view_model(&self) -> InfoListViewModel {
    InfoListViewModel {
      title: "Info".to_string(),
      rows: self
        .entries
        .iter()
        .map(|entry| InfoListRowModel {
          title: entry.title.clone(),
          description: entry.description.clone(),
          call_to_action: entry.call_to_action.clone(),
          action: entry.action.clone(),
        })
        .collect(),
      done_action: MenuAction::Dismiss,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoListRowModel {
  pub title: String,
  pub description: String,
  pub call_to_action: String,
  pub action: MenuAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoListViewModel {
  pub title: String,
  pub rows: Vec<InfoListRowModel>,
  pub done_action: MenuAction,
}
