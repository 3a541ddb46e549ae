use atty::Stream;
use crossterm_style::{style, Color};
use log::error;
use std::fmt;
use std::process;

const EXIT_FAILURE: i32 = 1;

/// Report a failure on stderr and terminate.
///
/// The error chain is printed in its alternate form, i.e. anyhow contexts are joined with ": ".
pub fn exit_with_error<S: AsRef<str>, E>(prefix: S, error: E) -> !
where
  E: fmt::Display,
{
  let message = format!("{}{:#}", prefix.as_ref(), error);

  error!("{}", message);
  if atty::is(Stream::Stderr) {
    eprintln!("{}", style(&message).with(Color::Red));
  } else {
    eprintln!("{}", message);
  }

  process::exit(EXIT_FAILURE)
}

pub trait ExtResult<T, E> {
  fn ok_or_exit<S: AsRef<str>>(self, prefix: S) -> T;
}

impl<T, E> ExtResult<T, E> for Result<T, E>
where
  E: fmt::Display,
{
  fn ok_or_exit<S: AsRef<str>>(self, prefix: S) -> T {
    self.unwrap_or_else(|error| exit_with_error(prefix, error))
  }
}
