use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike as _, Days, Locale, Months, NaiveDate};
use serde::Deserialize;

use super::date::month_name;
use super::grid_service::start_of_week;

const LOCALE: Locale = Locale::en_US;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
  #[default]
  Month,
  Week,
  Day,
  Year,
}

impl ViewKind {
  pub const ALL: [Self; 4] = [Self::Month, Self::Week, Self::Day, Self::Year];

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Month => "month",
      Self::Week => "week",
      Self::Day => "day",
      Self::Year => "year",
    }
  }
}

impl Display for ViewKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ViewKind {
  type Err = String;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
      .ok_or_else(|| format!("unknown view '{value}', expected one of month, week, day, year"))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Prev,
  Next,
}

/// Header label and the inclusive date range shown by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPeriod {
  pub label: String,
  pub start: NaiveDate,
  pub end: NaiveDate,
}

impl ViewPeriod {
  pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
    let end = self.end;

    self.start.iter_days().take_while(move |date| *date <= end)
  }
}

pub fn select(view: ViewKind, anchor: NaiveDate) -> ViewPeriod {
  match view {
    ViewKind::Month => {
      let (start, end) = month_bounds(anchor);

      ViewPeriod {
        label: month_label(anchor),
        start,
        end,
      }
    }
    ViewKind::Week => {
      let start = start_of_week(anchor);
      let end = start + Days::new(6);

      ViewPeriod {
        label: week_label(start, end),
        start,
        end,
      }
    }
    ViewKind::Day => ViewPeriod {
      label: anchor.format_localized("%A, %B %-d, %Y", LOCALE).to_string(),
      start: anchor,
      end: anchor,
    },
    ViewKind::Year => {
      let start = anchor.with_ordinal(1).unwrap_or(anchor);
      let end = NaiveDate::from_ymd_opt(anchor.year(), 12, 31).unwrap_or(anchor);

      ViewPeriod {
        label: anchor.year().to_string(),
        start,
        end,
      }
    }
  }
}

/// `September 2025`. Also the label of the mini calendar, whatever the active view.
pub fn month_label(date: NaiveDate) -> String {
  date.format_localized("%B %Y", LOCALE).to_string()
}

/// Moves the anchor one view period back or forth: a day, a week, a month or a
/// year. Month and year steps clamp the day to the length of the target month.
/// The anchor is returned unchanged if the step leaves chrono's date range.
pub fn step(view: ViewKind, anchor: NaiveDate, direction: Direction) -> NaiveDate {
  let moved = match (view, direction) {
    (ViewKind::Day, Direction::Prev) => anchor.checked_sub_days(Days::new(1)),
    (ViewKind::Day, Direction::Next) => anchor.checked_add_days(Days::new(1)),
    (ViewKind::Week, Direction::Prev) => anchor.checked_sub_days(Days::new(7)),
    (ViewKind::Week, Direction::Next) => anchor.checked_add_days(Days::new(7)),
    (ViewKind::Month, Direction::Prev) => anchor.checked_sub_months(Months::new(1)),
    (ViewKind::Month, Direction::Next) => anchor.checked_add_months(Months::new(1)),
    (ViewKind::Year, Direction::Prev) => anchor.checked_sub_months(Months::new(12)),
    (ViewKind::Year, Direction::Next) => anchor.checked_add_months(Months::new(12)),
  };

  moved.unwrap_or(anchor)
}

fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
  let first = date.with_day(1).unwrap_or(date);
  let last = first
    .checked_add_months(Months::new(1))
    .and_then(|next| next.pred_opt())
    .unwrap_or(date);

  (first, last)
}

fn week_label(start: NaiveDate, end: NaiveDate) -> String {
  if start.month() == end.month() {
    format!(
      "{} {} - {}, {}",
      month_name(start.month()),
      start.day(),
      end.day(),
      start.year(),
    )
  } else {
    format!(
      "{} {} - {} {}, {}",
      month_name(start.month()),
      start.day(),
      month_name(end.month()),
      end.day(),
      start.year(),
    )
  }
}
