//! Properties of the month grid and the date filter.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;
use remember_calendar::calendar::date::to_date_key;
use remember_calendar::calendar::{
  grid_service, EventFields, EventStore, MemoryStorage, MonthGrid, GRID_LENGTH,
};

proptest! {
  #[test]
  fn month_grid_is_42_consecutive_days_from_a_sunday(year in 1900i32..2200, month in 1u32..=12) {
    let grid = MonthGrid::new(year, month).expect("valid month");
    let dates: Vec<_> = grid.dates().collect();

    prop_assert_eq!(dates.len(), GRID_LENGTH);
    prop_assert_eq!(dates[0].weekday(), Weekday::Sun);
    for pair in dates.windows(2) {
      prop_assert_eq!(pair[0] + Days::new(1), pair[1]);
    }
  }

  #[test]
  fn month_grid_holds_the_whole_month(year in 1900i32..2200, month in 1u32..=12) {
    let grid = MonthGrid::new(year, month).expect("valid month");
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid date");

    prop_assert!(grid.start() <= first);
    prop_assert!(first - grid.start() < chrono::Duration::days(7));

    for cell in grid.cells() {
      let same_month = cell.date.year() == year && cell.date.month() == month;
      prop_assert_eq!(cell.in_current_month, same_month);
    }

    let in_month = grid.cells().iter().filter(|cell| cell.in_current_month).count();
    let next = first.checked_add_months(chrono::Months::new(1)).expect("valid date");
    prop_assert_eq!(in_month as i64, (next - first).num_days());
  }

  #[test]
  fn year_view_is_twelve_month_grids(year in 1900i32..2200) {
    let months = grid_service::year_grids(year);

    prop_assert_eq!(months.len(), 12);
    for (idx, month) in months.iter().enumerate() {
      prop_assert_eq!(month.grid, MonthGrid::new(year, idx as u32 + 1).expect("valid month"));
    }
  }

  #[test]
  fn events_on_returns_exactly_the_matching_events(
    offsets in prop::collection::vec(0u64..10, 0..20),
    probe in 0u64..12,
  ) {
    let base = NaiveDate::from_ymd_opt(2025, 9, 20).expect("valid date");
    let mut store = EventStore::load(MemoryStorage::with_contents("[]")).expect("empty store");

    for (idx, offset) in offsets.iter().enumerate() {
      let fields = EventFields::new(format!("event {idx}"), base + Days::new(*offset));
      store.create(&fields).expect("valid event");
    }

    let day = base + Days::new(probe);
    let found = store.events_on(&day);
    let expected: Vec<_> = store
      .events()
      .iter()
      .filter(|event| event.date_key() == to_date_key(&day))
      .collect();

    prop_assert_eq!(&found, &expected);
    prop_assert_eq!(found.len(), offsets.iter().filter(|offset| **offset == probe).count());
    prop_assert_eq!(store.events_on(&day), found);
  }
}
