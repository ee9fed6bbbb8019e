use crate::app::ViewState;
use crate::calendar::{date, view, EventStore, Storage};

use super::{event_line, grid_lines, MINI_WEEKDAY_HEADERS, WEEKDAY_HEADERS};

pub fn render<S: Storage>(store: &EventStore<S>, state: &ViewState) -> String {
  let grid = state.month_grid();
  let period = state.period();
  let days = period.days();

  let mut lines = vec![period.label];
  lines.extend(grid_lines(&grid, state, &WEEKDAY_HEADERS, 3, |cell| {
    if store.has_events_on(&cell.date) { '+' } else { ' ' }
  }));
  lines.push(String::new());

  for day in days {
    let events = store.events_on(&day);
    if events.is_empty() {
      continue;
    }

    lines.push(date::to_date_key(&day));
    lines.extend(events.into_iter().map(event_line));
  }

  lines.join("\n")
}

/// The small month grid shown next to every view. Always the anchored month.
pub fn render_mini(state: &ViewState) -> String {
  let mut lines = vec![view::month_label(state.anchor)];
  lines.extend(grid_lines(&state.month_grid(), state, &MINI_WEEKDAY_HEADERS, 2, |_| ' '));

  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::calendar::{MemoryStorage, ViewKind};

  #[test]
  fn month_lists_the_grid_and_its_events() {
    let store = EventStore::load(MemoryStorage::new()).unwrap();
    let state = ViewState::new(ViewKind::Month, NaiveDate::from_ymd_opt(2025, 9, 26).unwrap());

    let out = render(&store, &state);
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(lines[0], "September 2025");
    assert_eq!(lines.len(), 1 + 1 + 6 + 1 + 3 * 2);
    assert!(lines[5].contains("* 26+"));
    assert!(out.contains("Team Meeting [work]"));
  }

  #[test]
  fn mini_calendar_has_a_header_and_six_weeks() {
    let state = ViewState::new(ViewKind::Day, NaiveDate::from_ymd_opt(2025, 9, 26).unwrap());

    let out = render_mini(&state);

    assert_eq!(out.lines().count(), 8);
    assert!(out.starts_with("September 2025\n"));
  }
}
