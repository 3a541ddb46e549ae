use super::{AccessSchedule, DailyWindow};
use crate::fixtures::long_ago;
use chrono::{DateTime, Duration, FixedOffset, NaiveTime, TimeZone, Utc};
use chrono_tz::Europe::Berlin;
use spectral::prelude::*;

fn local(hour: u32, minute: u32, second: u32) -> DateTime<FixedOffset> {
  FixedOffset::east_opt(2 * 3600)
    .unwrap()
    .with_ymd_and_hms(2024, 6, 15, hour, minute, second)
    .unwrap()
}

fn countdown_text(now: DateTime<FixedOffset>) -> Option<String> {
  AccessSchedule::default()
    .countdown(now, long_ago())
    .map(|countdown| countdown.to_string())
}

#[test]
fn test_countdown_before_first_window() {
  let countdown = AccessSchedule::default().countdown(local(12, 0, 0), long_ago()).unwrap();

  assert_that(&countdown.target).is_equal_to(local(13, 0, 0));
  assert_that(&countdown.remaining).is_equal_to(Duration::hours(1));
  assert_that(&countdown.to_string()).is_equal_to("1:0 left".to_string());
  assert_that(&countdown_text(local(0, 0, 0))).is_equal_to(Some("13:0 left".to_string()));
  assert_that(&countdown_text(local(12, 54, 0))).is_equal_to(Some("0:6 left".to_string()));
  assert_that(&countdown_text(local(12, 59, 30))).is_equal_to(Some("0:0 left".to_string()));
}

#[test]
fn test_no_countdown_inside_windows() {
  assert_that(&countdown_text(local(13, 0, 0))).is_none();
  assert_that(&countdown_text(local(13, 30, 0))).is_none();
  assert_that(&countdown_text(local(13, 59, 59))).is_none();
  assert_that(&countdown_text(local(17, 30, 0))).is_none();
  assert_that(&countdown_text(local(18, 59, 59))).is_none();
}

#[test]
fn test_window_ends_show_password() {
  assert_that(&countdown_text(local(14, 0, 0))).is_none();
  assert_that(&countdown_text(local(19, 0, 0))).is_none();
}

#[test]
fn test_countdown_between_windows() {
  let countdown = AccessSchedule::default().countdown(local(14, 0, 1), long_ago()).unwrap();

  assert_that(&countdown.target).is_equal_to(local(17, 30, 0));
  assert_that(&countdown.to_string()).is_equal_to("3:29 left".to_string());
  assert_that(&countdown_text(local(16, 15, 0))).is_equal_to(Some("1:15 left".to_string()));
}

#[test]
fn test_countdown_after_second_window() {
  let countdown = AccessSchedule::default().countdown(local(19, 0, 1), long_ago()).unwrap();

  assert_that(&countdown.target).is_equal_to(
    FixedOffset::east_opt(2 * 3600)
      .unwrap()
      .with_ymd_and_hms(2024, 6, 16, 13, 0, 0)
      .unwrap(),
  );
  assert_that(&countdown.to_string()).is_equal_to("17:59 left".to_string());
  assert_that(&countdown_text(local(23, 30, 0))).is_equal_to(Some("13:30 left".to_string()));
}

#[test]
fn test_setup_grace_period() {
  let now = local(12, 0, 0);
  let schedule = AccessSchedule::default();
  let created = |seconds_ago: i64| now.with_timezone(&Utc) - Duration::seconds(seconds_ago);

  assert_that(&schedule.countdown(now, created(0))).is_none();
  assert_that(&schedule.countdown(now, created(30))).is_none();
  assert_that(&schedule.countdown(now, created(60))).is_none();
  assert_that(&schedule.countdown(now, created(61))).is_some();
  assert_that(&schedule.countdown(now, created(-3600))).is_none();
}

#[test]
fn test_custom_schedule() {
  let time = |hour: u32, minute: u32| NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
  let schedule = AccessSchedule {
    first: DailyWindow::new(time(8, 0), time(9, 0)),
    second: DailyWindow::new(time(20, 0), time(20, 15)),
  };

  assert_that(&schedule.countdown(local(7, 0, 0), long_ago()).map(|c| c.to_string()))
    .is_equal_to(Some("1:0 left".to_string()));
  assert_that(&schedule.countdown(local(8, 30, 0), long_ago())).is_none();
  assert_that(&schedule.countdown(local(13, 0, 0), long_ago()).map(|c| c.to_string()))
    .is_equal_to(Some("7:0 left".to_string()));
  assert_that(&schedule.countdown(local(21, 0, 0), long_ago()).map(|c| c.to_string()))
    .is_equal_to(Some("11:0 left".to_string()));
}

#[test]
fn test_countdown_on_daylight_saving_days() {
  let berlin = |day: u32, hour: u32, minute: u32| Berlin.with_ymd_and_hms(2024, 3, day, hour, minute, 0).unwrap();
  let schedule = AccessSchedule::default();

  let countdown = schedule.countdown(berlin(31, 1, 30), long_ago()).unwrap();
  assert_that(&countdown.target).is_equal_to(berlin(31, 13, 0).fixed_offset());
  assert_that(&countdown.target.offset().local_minus_utc()).is_equal_to(2 * 3600);
  assert_that(&countdown.to_string()).is_equal_to("10:30 left".to_string());

  let overnight = schedule.countdown(berlin(30, 20, 0), long_ago()).unwrap();
  assert_that(&overnight.target).is_equal_to(berlin(31, 13, 0).fixed_offset());
  assert_that(&overnight.to_string()).is_equal_to("16:0 left".to_string());

  let autumn = Berlin.with_ymd_and_hms(2024, 10, 27, 1, 30, 0).unwrap();
  assert_that(&schedule.countdown(autumn, long_ago()).map(|c| c.to_string()))
    .is_equal_to(Some("12:30 left".to_string()));
}

#[test]
fn test_window_start_in_skipped_hour() {
  let time = |hour: u32, minute: u32| NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
  let schedule = AccessSchedule {
    first: DailyWindow::new(time(2, 30), time(4, 0)),
    second: DailyWindow::new(time(20, 0), time(21, 0)),
  };
  let countdown = schedule
    .countdown(Berlin.with_ymd_and_hms(2024, 3, 31, 1, 0, 0).unwrap(), long_ago())
    .unwrap();

  assert_that(&countdown.target).is_equal_to(Berlin.with_ymd_and_hms(2024, 3, 31, 3, 0, 0).unwrap().fixed_offset());
  assert_that(&countdown.to_string()).is_equal_to("1:0 left".to_string());
}
