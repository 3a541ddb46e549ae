use super::{DisplayOptions, DisplayOptionsViewModel, Info, InfoList, InfoListViewModel, InfoViewModel};

/// Navigation requests exposed by the menu screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
  ShowInfo(Info),
  ShowDisplayOptions,
  Dismiss,
}

/// The menu: its root info list and the screen stacked on top of it, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
  pub info_list: InfoList,
  pub child: MenuChild,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuChild {
  None,
  Info(Info),
  DisplayOptions(DisplayOptions),
}

impl MenuChild {
  pub fn view_model(&self) -> MenuChildViewModel {
    match self {
      MenuChild::None => MenuChildViewModel::None,
      MenuChild::Info(info) => MenuChildViewModel::Info(info.view_model()),
      MenuChild::DisplayOptions(display_options) => MenuChildViewModel::DisplayOptions(display_options.view_model()),
    }
  }
}

impl Menu {
  pub fn new(info_list: InfoList, child: MenuChild) -> Menu {
    Menu { info_list, child }
  }

  pub fn view_model(&self) -> MenuViewModel {
    MenuViewModel {
      info_list: self.info_list.view_model(),
      child: self.child.view_model(),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuViewModel {
  pub info_list: InfoListViewModel,
  pub child: MenuChildViewModel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuChildViewModel {
  None,
  Info(InfoViewModel),
  DisplayOptions(DisplayOptionsViewModel),
}
