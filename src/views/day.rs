use chrono::Timelike as _;

use crate::app::ViewState;
use crate::calendar::{date, layout, EventStore, Storage};

use super::event_line;

/// One row per hour of the anchored day. Timed events are listed in the row of
/// their start hour; events without a time range are listed above the rows.
pub fn render<S: Storage>(store: &EventStore<S>, state: &ViewState) -> String {
  let events = store.events_on(&state.anchor);
  let placed = layout::layout_day(events.iter().copied());

  let mut lines = vec![state.period().label];

  lines.extend(
    events
      .iter()
      .filter(|event| !event.is_timed())
      .map(|event| event_line(event)),
  );

  for (hour, label) in date::hour_labels().enumerate() {
    lines.push(format!("{label:>5} |"));

    lines.extend(
      placed
        .iter()
        .filter(|placed| placed.event.start_time.map(|start| start.hour() as usize) == Some(hour))
        .map(|placed| format!("      | {}", event_line(placed.event))),
    );
  }

  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::calendar::{EventFields, MemoryStorage, ViewKind};

  #[test]
  fn events_sit_in_their_start_hour() {
    let day = NaiveDate::from_ymd_opt(2025, 9, 26).unwrap();
    let mut store = EventStore::load(MemoryStorage::new()).unwrap();
    store.create(&EventFields::new("Birthday", day)).unwrap();

    let out = render(&store, &ViewState::new(ViewKind::Day, day));
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(lines[0], "Friday, September 26, 2025");
    assert!(lines[1].contains("all day  Birthday"));
    let noon = lines.iter().position(|line| line.starts_with("12 PM")).unwrap();
    assert!(lines[noon + 1].contains("Lunch with Mom"));
    assert_eq!(lines.len(), 1 + 1 + 24 + 1);
  }
}
