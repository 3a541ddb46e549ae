use chrono::{DateTime, Local, TimeZone, Utc};
use std::sync::RwLock;


/// Source of the current wall clock time.
///
/// The time carries the user's time zone, since all daily boundaries are anchored in its
/// calendar (including its daylight saving rules).
pub trait Clock: Send + Sync {
  type Tz: TimeZone;

  fn now(&self) -> DateTime<Self::Tz>;
}

/// The system clock in the local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  type Tz = Local;

  fn now(&self) -> DateTime<Local> {
    Local::now()
  }
}

/// A clock that only moves when told so.
///
/// Mostly useful for unit-testing and for replaying a specific moment.
#[derive(Debug)]
pub struct FixedClock<Tz: TimeZone> {
  now: RwLock<DateTime<Tz>>,
}

impl<Tz: TimeZone> FixedClock<Tz>
where
  Tz::Offset: Send + Sync,
{
  pub fn new(now: DateTime<Tz>) -> FixedClock<Tz> {
    FixedClock { now: RwLock::new(now) }
  }

  pub fn set(&self, now: DateTime<Tz>) {
    match self.now.write() {
      Ok(mut current) => *current = now,
      Err(poisoned) => *poisoned.into_inner() = now,
    }
  }

  pub fn advance(&self, duration: chrono::Duration) {
    let next = self.now() + duration;
    self.set(next);
  }
}

impl<Tz: TimeZone> Clock for FixedClock<Tz>
where
  Tz::Offset: Send + Sync,
{
  type Tz = Tz;

  fn now(&self) -> DateTime<Tz> {
    match self.now.read() {
      Ok(now) => now.clone(),
      Err(poisoned) => poisoned.into_inner().clone(),
    }
  }
}

/// The point in time a screen refresh is rendered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayTime(DateTime<Utc>);

impl DisplayTime {
  pub fn now<C: Clock + ?Sized>(clock: &C) -> DisplayTime {
    DisplayTime(clock.now().with_timezone(&Utc))
  }

  pub fn date(&self) -> DateTime<Utc> {
    self.0
  }
}

impl<Tz: chrono::TimeZone> From<DateTime<Tz>> for DisplayTime {
  fn from(date: DateTime<Tz>) -> Self {
    DisplayTime(date.with_timezone(&Utc))
  }
}
