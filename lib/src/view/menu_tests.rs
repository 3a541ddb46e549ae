use super::{
  DisplayOptions, DisplayOptionsAction, Info, InfoList, Menu, MenuAction, MenuChild, MenuChildViewModel,
  DEFAULT_DIGIT_GROUP_SIZE,
};
use spectral::prelude::*;

#[test]
fn test_menu_without_child() {
  let menu = Menu::new(InfoList::default(), MenuChild::None);
  let view_model = menu.view_model();

  assert_that(&view_model.child).is_equal_to(MenuChildViewModel::None);
  assert_that(&view_model.info_list).is_equal_to(InfoList::default().view_model());
}

#[test]
fn test_menu_with_info() {
  let info = Info::new("Title", "Some content");
  let view_model = Menu::new(InfoList::default(), MenuChild::Info(info.clone())).view_model();

  match view_model.child {
    MenuChildViewModel::Info(info_view_model) => {
      assert_that(&info_view_model).is_equal_to(info.view_model());
      assert_that(&info_view_model.title).is_equal_to("Title".to_string());
      assert_that(&info_view_model.content).is_equal_to("Some content".to_string());
    }
    other => panic!("Expected info view model, got {:?}", other),
  }
}

#[test]
fn test_menu_with_display_options() {
  let display_options = DisplayOptions { digit_group_size: 3 };
  let view_model = Menu::new(InfoList::default(), MenuChild::DisplayOptions(display_options)).view_model();

  match view_model.child {
    MenuChildViewModel::DisplayOptions(options_view_model) => {
      assert_that(&options_view_model).is_equal_to(display_options.view_model());
      assert_that(&options_view_model.digit_group_size).is_equal_to(3);
    }
    other => panic!("Expected display options view model, got {:?}", other),
  }
}

#[test]
fn test_info_list_view_model() {
  let view_model = InfoList::default().view_model();

  assert_that(&view_model.rows).has_length(3);
  assert_that(&view_model.rows[0].action).is_equal_to(MenuAction::ShowInfo(Info::backup_guide()));
  assert_that(&view_model.rows[1].action).is_equal_to(MenuAction::ShowDisplayOptions);
  assert_that(&view_model.rows[2].action).is_equal_to(MenuAction::ShowInfo(Info::licenses()));
  assert_that(&view_model.done_action).is_equal_to(MenuAction::Dismiss);
}

#[test]
fn test_display_options() {
  let display_options = DisplayOptions::default();
  let view_model = display_options.view_model();

  assert_that(&display_options.digit_group_size).is_equal_to(DEFAULT_DIGIT_GROUP_SIZE);
  assert_that(&view_model.choices).has_length(2);
  assert_that(&view_model.choices[0].example).is_equal_to("12 34 56".to_string());
  assert_that(&view_model.choices[0].selected).is_true();
  assert_that(&view_model.choices[1].example).is_equal_to("123 456".to_string());
  assert_that(&view_model.choices[1].selected).is_false();

  let updated = display_options.update(view_model.choices[1].action);

  assert_that(&updated.digit_group_size).is_equal_to(3);
  assert_that(&updated.view_model().choices[1].selected).is_true();
  assert_that(&updated.update(DisplayOptionsAction::SetDigitGroupSize(4)).digit_group_size).is_equal_to(4);
}
