//! View models of the main screen.
//!
//! Everything in here is a pure function of its inputs (and the injected [`Clock`](crate::clock::Clock)).
//! Rendering and navigation are left to the host.

mod diff;
mod display_options;
mod info;
mod menu;
mod schedule;
mod token_list;
mod token_row;

#[cfg(test)]
mod diff_tests;
#[cfg(test)]
mod menu_tests;
#[cfg(test)]
mod schedule_tests;

pub use self::diff::*;
pub use self::display_options::*;
pub use self::info::*;
pub use self::menu::*;
pub use self::schedule::*;
pub use self::token_list::*;
pub use self::token_row::*;
