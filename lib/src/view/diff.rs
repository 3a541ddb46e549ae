/// Identity of list items across refreshes.
///
/// Separate from `PartialEq`: two items may be the same entity while showing different
/// content (e.g. a new password).
pub trait Identifiable {
  fn has_same_identity(&self, other: &Self) -> bool;
}

/// A change required to turn one list into another.
///
/// `Delete` indices refer to the old list, `Insert` indices to the new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
  Insert { index: usize },
  Delete { index: usize },
  Update { from: usize, to: usize },
  Move { from: usize, to: usize },
}

/// Compute the changes between two refreshes of a list.
///
/// Items are matched by identity. A matched item whose position relative to the other
/// surviving items changed is reported as `Move`. If its value differs as well, an `Update`
/// with the same indices follows.
pub fn changes_between<T: Identifiable + PartialEq>(old: &[T], new: &[T]) -> Vec<Change> {
  let matches = new
    .iter()
    .map(|item| old.iter().position(|candidate| candidate.has_same_identity(item)))
    .collect::<Vec<Option<usize>>>();
  let mut changes = Vec::new();

  let mut surviving = matches.iter().flatten().copied().collect::<Vec<usize>>();
  surviving.sort_unstable();

  for index in 0..old.len() {
    if surviving.binary_search(&index).is_err() {
      changes.push(Change::Delete { index });
    }
  }
  for (index, matched) in matches.iter().enumerate() {
    if matched.is_none() {
      changes.push(Change::Insert { index });
    }
  }

  let mut new_rank = 0usize;
  for (to, matched) in matches.iter().enumerate() {
    let from = match matched {
      Some(from) => *from,
      None => continue,
    };
    let old_rank = surviving.binary_search(&from).unwrap_or(new_rank);

    if old_rank != new_rank {
      changes.push(Change::Move { from, to });
    }
    if old[from] != new[to] {
      changes.push(Change::Update { from, to });
    }
    new_rank += 1;
  }

  changes
}
