use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time a freshly created token shows its password regardless of the schedule.
pub const SETUP_GRACE_PERIOD_SECS: i64 = 60;

/// A range of the day, `start` inclusive, `end` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWindow {
  pub start: NaiveTime,
  pub end: NaiveTime,
}

impl DailyWindow {
  pub fn new(start: NaiveTime, end: NaiveTime) -> DailyWindow {
    DailyWindow { start, end }
  }
}

/// The two daily windows in which passwords are shown.
///
/// Outside of these a countdown to the next window replaces the password.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessSchedule {
  pub first: DailyWindow,
  pub second: DailyWindow,
}

impl Default for AccessSchedule {
  fn default() -> Self {
    AccessSchedule {
      first: DailyWindow::new(hm(13, 0), hm(14, 0)),
      second: DailyWindow::new(hm(17, 30), hm(19, 0)),
    }
  }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
  NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Remaining time until the next window opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
  pub target: DateTime<FixedOffset>,
  pub remaining: Duration,
}

impl Countdown {
  fn until<Tz: TimeZone>(now: &DateTime<Tz>, target: DateTime<Tz>) -> Countdown {
    Countdown {
      remaining: target.with_timezone(&Utc) - now.with_timezone(&Utc),
      target: target.fixed_offset(),
    }
  }
}

impl fmt::Display for Countdown {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let minutes = self.remaining.num_minutes();

    write!(f, "{}:{} left", minutes / 60, minutes % 60)
  }
}

impl AccessSchedule {
  /// Countdown to show instead of a password, `None` if the password may be shown.
  ///
  /// Window boundaries are anchored to the calendar day of `now` in its time zone. Tokens created
  /// less than [`SETUP_GRACE_PERIOD_SECS`] ago always show their password.
  pub fn countdown<Tz: TimeZone>(&self, now: DateTime<Tz>, creation_time: DateTime<Utc>) -> Option<Countdown> {
    let setup_done = creation_time + Duration::seconds(SETUP_GRACE_PERIOD_SECS) < now.with_timezone(&Utc);
    if !setup_done {
      return None;
    }
    let time_zone = now.timezone();
    let today = now.date_naive();

    let first_start = anchor(&time_zone, today, self.first.start)?;
    let first_end = anchor(&time_zone, today, self.first.end)?;
    let second_start = anchor(&time_zone, today, self.second.start)?;
    let second_end = anchor(&time_zone, today, self.second.end)?;

    if now < first_start {
      Some(Countdown::until(&now, first_start))
    } else if now > first_end && now < second_start {
      Some(Countdown::until(&now, second_start))
    } else if now > second_end {
      let tomorrow = today.succ_opt()?;
      Some(Countdown::until(&now, anchor(&time_zone, tomorrow, self.first.start)?))
    } else {
      None
    }
  }
}

/// `time` on `date` in `time_zone`.
///
/// Ambiguous times (clock turned back) resolve to the earlier instant, times skipped by a
/// clock turned forward move to the first valid time after the gap.
fn anchor<Tz: TimeZone>(time_zone: &Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
  let local = date.and_time(time);

  time_zone.from_local_datetime(&local).earliest().or_else(|| {
    (1..=4)
      .map(|quarters| local + Duration::minutes(15 * quarters))
      .find_map(|shifted| time_zone.from_local_datetime(&shifted).earliest())
  })
}
