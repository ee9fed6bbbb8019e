//! Plain text rendering of the calendar views, used by the command line front end.

use std::fmt::Write as _;

use crate::app::{DayFlags, ViewState};
use crate::calendar::{date, Event, EventStore, GridCell, MonthGrid, Storage, ViewKind};

pub mod day;
pub mod month;
pub mod week;
pub mod year;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub const MINI_WEEKDAY_HEADERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Renders the active view followed by the mini calendar.
pub fn render<S: Storage>(store: &EventStore<S>, state: &ViewState) -> String {
  let mut out = match state.current_view {
    ViewKind::Month => month::render(store, state),
    ViewKind::Week => week::render(store, state),
    ViewKind::Day => day::render(store, state),
    ViewKind::Year => year::render(store, state),
  };

  out.push('\n');
  out.push_str(&month::render_mini(state));
  out
}

pub fn event_line(event: &Event) -> String {
  let times = match (event.start_time, event.end_time) {
    (Some(start), Some(end)) => format!("{}-{}", date::format_time(&start), date::format_time(&end)),
    (Some(start), None) => date::format_time(&start),
    _ => "all day".to_owned(),
  };

  let mut line = format!("{times:>11}  {} [{}]", event.title, event.calendar);
  if !event.description.is_empty() {
    let _ = write!(line, " - {}", event.description);
  }
  let _ = write!(line, "  ({})", event.id);

  line
}

/// Day number with a marker: `*` today, `>` selected, `.` outside the month.
fn cell_label(cell: &GridCell, flags: DayFlags, width: usize) -> String {
  let marker = if flags.is_selected {
    '>'
  } else if flags.is_today {
    '*'
  } else if !flags.in_current_month {
    '.'
  } else {
    ' '
  };

  format!("{marker}{:>width$}", chrono::Datelike::day(&cell.date))
}

fn grid_lines(
  grid: &MonthGrid,
  state: &ViewState,
  headers: &[&str; 7],
  width: usize,
  mut suffix: impl FnMut(&GridCell) -> char,
) -> Vec<String> {
  let mut lines = vec![headers
    .iter()
    .map(|header| format!("{header:>w$} ", w = width + 1))
    .collect::<String>()
    .trim_end()
    .to_owned()];

  for row in grid.rows() {
    let line: String = row
      .iter()
      .map(|cell| format!("{}{}", cell_label(cell, state.flags(cell), width), suffix(cell)))
      .collect();

    lines.push(line.trim_end().to_owned());
  }

  lines
}
