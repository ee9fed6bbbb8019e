use chrono::NaiveTime;

use super::date::{minutes_from_midnight, MINUTES_PER_DAY};
use super::Event;

/// Vertical placement of a timed event in a 24 hour column, in percent of the
/// column height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventLayout<'a> {
  pub event: &'a Event,
  pub top_percent: f64,
  pub height_percent: f64,
}

/// Top offset and height of `start..end` in percent of a day.
///
/// An end before the start is not corrected and yields a negative height.
pub fn position(start: NaiveTime, end: NaiveTime) -> (f64, f64) {
  let start = f64::from(minutes_from_midnight(&start));
  let end = f64::from(minutes_from_midnight(&end));
  let day = f64::from(MINUTES_PER_DAY);

  (start / day * 100.0, (end - start) / day * 100.0)
}

/// Lays out the timed events of one day. Events without both a start and an end
/// time have no place in the column and are skipped. Overlapping events keep
/// their own positions and are drawn over each other.
pub fn layout_day<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<EventLayout<'a>> {
  events
    .into_iter()
    .filter_map(|event| {
      let (start, end) = event.time_range()?;
      let (top_percent, height_percent) = position(start, end);

      Some(EventLayout {
        event,
        top_percent,
        height_percent,
      })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::calendar::{EventFields, EventId};

  fn event(start: &str, end: &str) -> Event {
    EventFields::new("Event", NaiveDate::from_ymd_opt(2025, 9, 26).unwrap())
      .with_times(start, end)
      .build(EventId::from("id"))
      .unwrap()
  }

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
  }

  #[test]
  fn ten_to_eleven() {
    let event = event("10:00", "11:00");
    let layout = layout_day([&event]);

    assert_eq!(layout.len(), 1);
    assert!(close(layout[0].top_percent, 41.67));
    assert!(close(layout[0].height_percent, 4.17));
  }

  #[test]
  fn whole_day_spans_the_column() {
    let (top, height) = position(NaiveTime::MIN, NaiveTime::from_hms_opt(23, 59, 0).unwrap());

    assert!(close(top, 0.0));
    assert!(close(height, 1439.0 / 1440.0 * 100.0));
  }

  #[test]
  fn untimed_events_are_skipped() {
    let untimed = event("", "");
    let start_only = event("09:00", "");
    let timed = event("09:00", "09:30");

    let layout = layout_day([&untimed, &start_only, &timed]);

    assert_eq!(layout.len(), 1);
    assert!(std::ptr::eq(layout[0].event, &timed));
  }

  #[test]
  fn overlapping_events_keep_their_positions() {
    let a = event("10:00", "12:00");
    let b = event("11:00", "13:00");

    let layout = layout_day([&a, &b]);

    assert!(close(layout[0].top_percent, 600.0 / 14.4));
    assert!(close(layout[1].top_percent, 660.0 / 14.4));
  }

  #[test]
  fn end_before_start_has_negative_height() {
    let (_, height) = position(
      NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
      NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
    );

    assert!(close(height, -60.0 / 14.4));
  }
}
