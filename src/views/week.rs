use chrono::{Datelike as _, NaiveDate};

use crate::app::ViewState;
use crate::calendar::{grid_service, layout, EventStore, Storage, GRID_COLS};

use super::event_line;

/// Column header of the week view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
  pub date: NaiveDate,
  pub name: String,
  pub is_today: bool,
}

pub fn header(state: &ViewState) -> [WeekDay; GRID_COLS] {
  grid_service::week_of(state.anchor).map(|date| WeekDay {
    date,
    name: date.format("%a").to_string().to_uppercase(),
    is_today: state.is_today(date),
  })
}

pub fn render<S: Storage>(store: &EventStore<S>, state: &ViewState) -> String {
  let mut lines = vec![state.period().label];

  for day in header(state) {
    let marker = if day.is_today { "*" } else { "" };
    lines.push(format!("{} {}{marker}", day.name, day.date.day()));

    let events = store.events_on(&day.date);
    for placed in layout::layout_day(events.iter().copied()) {
      lines.push(format!(
        "  {:>5.1}% {:>5.1}% {}",
        placed.top_percent,
        placed.height_percent,
        event_line(placed.event),
      ));
    }
  }

  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::calendar::{MemoryStorage, ViewKind};

  fn state() -> ViewState {
    ViewState::new(ViewKind::Week, NaiveDate::from_ymd_opt(2025, 9, 24).unwrap())
  }

  #[test]
  fn header_runs_sunday_to_saturday() {
    let days = header(&state());

    assert_eq!(days[0].name, "SUN");
    assert_eq!(days[0].date.day(), 21);
    assert_eq!(days[6].name, "SAT");
    assert!(days[3].is_today);
    assert_eq!(days.iter().filter(|day| day.is_today).count(), 1);
  }

  #[test]
  fn timed_events_are_placed_in_their_day() {
    let store = EventStore::load(MemoryStorage::new()).unwrap();

    let out = render(&store, &state());

    assert!(out.starts_with("September 21 - 27, 2025\n"));
    assert!(out.contains(" 41.7%   4.2%"));
    assert!(out.contains("Gym Session"));
  }
}
