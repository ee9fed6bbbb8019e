use chrono::{Datelike, Local, Month, NaiveDate, NaiveTime, Timelike};

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
pub const HOURS_PER_DAY: u32 = 24;
pub const MINUTES_PER_DAY: u32 = HOURS_PER_DAY * 60;

/// Compares only year, month and day-of-month. Time of day is ignored.
pub fn is_same_day(a: &impl Datelike, b: &impl Datelike) -> bool {
  a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// The current date of the local system clock.
pub fn today() -> NaiveDate {
  Local::now().date_naive()
}

pub fn is_today(date: &impl Datelike) -> bool {
  is_same_day(date, &today())
}

/// Canonical `YYYY-MM-DD` key, used both when storing an event date and when
/// matching events against a calendar day.
pub fn to_date_key(date: &impl Datelike) -> String {
  format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT).ok()
}

/// Parses a 24-hour `HH:MM` wall-clock time.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
  NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

pub fn format_time(time: &NaiveTime) -> String {
  time.format(TIME_FORMAT).to_string()
}

pub fn minutes_from_midnight(time: &NaiveTime) -> u32 {
  time.hour() * 60 + time.minute()
}

/// 12-hour label of an hour row in the day and week columns, e.g. `12 AM`, `3 PM`.
pub fn hour_label(hour: u32) -> String {
  match hour % HOURS_PER_DAY {
    0 => "12 AM".to_owned(),
    h @ 1..=11 => format!("{h} AM"),
    12 => "12 PM".to_owned(),
    h => format!("{} PM", h - 12),
  }
}

pub fn hour_labels() -> impl Iterator<Item = String> {
  (0..HOURS_PER_DAY).map(hour_label)
}

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
  u8::try_from(month)
    .ok()
    .and_then(|month| Month::try_from(month).ok())
    .map_or("", |month| month.name())
}
