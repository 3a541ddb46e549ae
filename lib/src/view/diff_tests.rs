use super::{changes_between, Change, Identifiable};
use spectral::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Item {
  id: u32,
  text: &'static str,
}

impl Identifiable for Item {
  fn has_same_identity(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

fn item(id: u32, text: &'static str) -> Item {
  Item { id, text }
}

#[test]
fn test_no_changes() {
  let items = vec![item(1, "a"), item(2, "b")];

  assert_that(&changes_between(&items, &items)).is_equal_to(Vec::<Change>::new());
  assert_that(&changes_between::<Item>(&[], &[])).is_equal_to(Vec::<Change>::new());
}

#[test]
fn test_content_change_is_update() {
  let old = vec![item(1, "a"), item(2, "b")];
  let new = vec![item(1, "a"), item(2, "c")];

  assert_that(&changes_between(&old, &new)).is_equal_to(vec![Change::Update { from: 1, to: 1 }]);
}

#[test]
fn test_insert_and_delete() {
  let old = vec![item(1, "a"), item(2, "b"), item(3, "c")];
  let new = vec![item(1, "a"), item(3, "c"), item(4, "d")];

  assert_that(&changes_between(&old, &new))
    .is_equal_to(vec![Change::Delete { index: 1 }, Change::Insert { index: 2 }]);
}

#[test]
fn test_move() {
  let old = vec![item(1, "a"), item(2, "b"), item(3, "c")];
  let new = vec![item(2, "b"), item(1, "a"), item(3, "c")];

  assert_that(&changes_between(&old, &new)).is_equal_to(vec![
    Change::Move { from: 1, to: 0 },
    Change::Move { from: 0, to: 1 },
  ]);
}

#[test]
fn test_shift_after_delete_is_not_a_move() {
  let old = vec![item(1, "a"), item(2, "b"), item(3, "c")];
  let new = vec![item(2, "b"), item(3, "x")];

  assert_that(&changes_between(&old, &new))
    .is_equal_to(vec![Change::Delete { index: 0 }, Change::Update { from: 2, to: 1 }]);
}

#[test]
fn test_moved_and_changed_reports_both() {
  let old = vec![item(1, "a"), item(2, "b")];
  let new = vec![item(2, "x"), item(1, "a")];

  assert_that(&changes_between(&old, &new)).is_equal_to(vec![
    Change::Move { from: 1, to: 0 },
    Change::Update { from: 1, to: 0 },
    Change::Move { from: 0, to: 1 },
  ]);
}
