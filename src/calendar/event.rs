use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::date::{format_time, parse_date_key, parse_time, to_date_key, HOURS_PER_DAY};
use super::{Error, EventId, Result};

/// Display category of an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
  #[default]
  Work,
  Personal,
  Family,
}

impl CalendarKind {
  pub const ALL: [Self; 3] = [Self::Work, Self::Personal, Self::Family];

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Work => "work",
      Self::Personal => "personal",
      Self::Family => "family",
    }
  }
}

impl Display for CalendarKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for CalendarKind {
  type Err = String;

  fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
      .ok_or_else(|| format!("unknown calendar '{value}', expected one of work, personal, family"))
  }
}

/// A stored calendar event. The serialized shape is the persisted record:
/// `id, title, date, startTime, endTime, description, calendar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
  pub id: EventId,
  pub title: String,
  #[serde(with = "date_key")]
  pub date: NaiveDate,
  #[serde(default, with = "time_slot")]
  pub start_time: Option<NaiveTime>,
  #[serde(default, with = "time_slot")]
  pub end_time: Option<NaiveTime>,
  #[serde(default, deserialize_with = "nullable_string")]
  pub description: String,
  #[serde(default)]
  pub calendar: CalendarKind,
}

impl Event {
  /// Start and end of a timed event. `None` unless both times are set.
  pub const fn time_range(&self) -> Option<(NaiveTime, NaiveTime)> {
    match (self.start_time, self.end_time) {
      (Some(start), Some(end)) => Some((start, end)),
      _ => None,
    }
  }

  pub const fn is_timed(&self) -> bool {
    self.time_range().is_some()
  }

  pub fn date_key(&self) -> String {
    to_date_key(&self.date)
  }
}

/// Raw event fields the way a form delivers them. Everything is text; parsing and
/// validation happen when the fields are applied to the event store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
  pub title: String,
  pub date: String,
  pub start_time: String,
  pub end_time: String,
  pub description: String,
  pub calendar: CalendarKind,
}

impl EventFields {
  pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
    Self {
      title: title.into(),
      date: to_date_key(&date),
      ..Self::default()
    }
  }

  /// A blank form for a new event on `date`, with a one hour slot starting an
  /// hour after `now`.
  pub fn for_new(date: Option<NaiveDate>, now: NaiveTime) -> Self {
    let start = now + Duration::hours(1);
    let end = start + Duration::hours(1);

    Self {
      date: date.map(|date| to_date_key(&date)).unwrap_or_default(),
      start_time: format_time(&start),
      end_time: format_time(&end),
      ..Self::default()
    }
  }

  /// A blank form for a new event in the given hour row of a day or week column.
  pub fn for_hour(date: NaiveDate, hour: u32) -> Self {
    let hour = hour.min(HOURS_PER_DAY - 1);
    let end = if hour + 1 < HOURS_PER_DAY {
      format!("{:02}:00", hour + 1)
    } else {
      "23:59".to_owned()
    };

    Self {
      date: to_date_key(&date),
      start_time: format!("{hour:02}:00"),
      end_time: end,
      ..Self::default()
    }
  }

  #[must_use]
  pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
    self.start_time = start.into();
    self.end_time = end.into();
    self
  }

  #[must_use]
  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }

  #[must_use]
  pub const fn with_calendar(mut self, calendar: CalendarKind) -> Self {
    self.calendar = calendar;
    self
  }

  /// Validates the fields and builds the event stored under `id`.
  ///
  /// # Errors
  /// Returns [`Error::Validation`] if the title or date is empty, or a date or
  /// time cannot be parsed.
  pub fn build(&self, id: EventId) -> Result<Event> {
    let title = self.title.trim();
    if title.is_empty() {
      return Err(Error::Validation("title is required".to_owned()));
    }

    let date = self.date.trim();
    if date.is_empty() {
      return Err(Error::Validation("date is required".to_owned()));
    }
    let date = parse_date_key(date)
      .ok_or_else(|| Error::Validation(format!("invalid date '{date}', expected YYYY-MM-DD")))?;

    Ok(Event {
      id,
      title: title.to_owned(),
      date,
      start_time: optional_time(&self.start_time, "start")?,
      end_time: optional_time(&self.end_time, "end")?,
      description: self.description.trim().to_owned(),
      calendar: self.calendar,
    })
  }
}

impl From<&Event> for EventFields {
  fn from(event: &Event) -> Self {
    Self {
      title: event.title.clone(),
      date: event.date_key(),
      start_time: event.start_time.as_ref().map(format_time).unwrap_or_default(),
      end_time: event.end_time.as_ref().map(format_time).unwrap_or_default(),
      description: event.description.clone(),
      calendar: event.calendar,
    }
  }
}

fn optional_time(value: &str, which: &str) -> Result<Option<NaiveTime>> {
  let value = value.trim();
  if value.is_empty() {
    return Ok(None);
  }

  parse_time(value)
    .map(Some)
    .ok_or_else(|| Error::Validation(format!("invalid {which} time '{value}', expected HH:MM")))
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
  D: serde::Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

mod date_key {
  use chrono::NaiveDate;
  use serde::{de, Deserialize, Deserializer, Serializer};

  use crate::calendar::date::{parse_date_key, to_date_key};

  pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_date_key(date))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let value = String::deserialize(deserializer)?;

    parse_date_key(&value).ok_or_else(|| de::Error::custom(format!("invalid date '{value}'")))
  }
}

/// `HH:MM` or absent. Absent times are written as `""`; `""`, `null` and a missing
/// key all read back as absent.
mod time_slot {
  use chrono::NaiveTime;
  use serde::{de, Deserialize, Deserializer, Serializer};

  use crate::calendar::date::{format_time, parse_time};

  pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
    match time {
      Some(time) => serializer.serialize_str(&format_time(time)),
      None => serializer.serialize_str(""),
    }
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
      None => Ok(None),
      Some(value) if value.trim().is_empty() => Ok(None),
      Some(value) => parse_time(&value)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid time '{value}'"))),
    }
  }
}
