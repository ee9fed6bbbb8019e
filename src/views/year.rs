use chrono::Datelike as _;

use crate::app::ViewState;
use crate::calendar::{grid_service, EventStore, Storage};

use super::{grid_lines, MINI_WEEKDAY_HEADERS};

/// Twelve small month grids. Days with events carry a `+`.
pub fn render<S: Storage>(store: &EventStore<S>, state: &ViewState) -> String {
  let mut lines = vec![state.period().label];

  for month in grid_service::year_grids(state.anchor.year()) {
    lines.push(String::new());
    lines.push(month.name.to_owned());
    lines.extend(grid_lines(&month.grid, state, &MINI_WEEKDAY_HEADERS, 2, |cell| {
      if store.has_events_on(&cell.date) { '+' } else { ' ' }
    }));
  }

  lines.join("\n")
}
