use chrono::{Datelike as _, Days, NaiveDate};

use super::date::month_name;

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;
pub const GRID_LENGTH: usize = GRID_ROWS * GRID_COLS;
pub const MONTHS_PER_YEAR: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GridCell {
  pub date: NaiveDate,
  pub in_current_month: bool,
}

/// A 6x7 month grid beginning on the Sunday on or before the first of the month.
/// It always spans 42 consecutive days, whatever the length of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
  year: i32,
  month: u32,
  cells: [GridCell; GRID_LENGTH],
}

impl MonthGrid {
  /// Returns `None` for a month outside `1..=12` or a year chrono cannot represent.
  pub fn new(year: i32, month: u32) -> Option<Self> {
    NaiveDate::from_ymd_opt(year, month, 1).map(Self::from_first)
  }

  /// The grid of the month containing `date`.
  pub fn for_date(date: NaiveDate) -> Self {
    Self::from_first(date.with_day(1).unwrap_or(date))
  }

  fn from_first(first: NaiveDate) -> Self {
    let start = start_grid_date(first);

    let cells = std::array::from_fn(|idx| {
      let date = start + Days::new(idx as u64);

      GridCell {
        date,
        in_current_month: date.year() == first.year() && date.month() == first.month(),
      }
    });

    Self {
      year: first.year(),
      month: first.month(),
      cells,
    }
  }

  pub const fn year(&self) -> i32 {
    self.year
  }

  pub const fn month(&self) -> u32 {
    self.month
  }

  pub const fn start(&self) -> NaiveDate {
    self.cells[0].date
  }

  pub const fn end(&self) -> NaiveDate {
    self.cells[GRID_LENGTH - 1].date
  }

  pub const fn cells(&self) -> &[GridCell; GRID_LENGTH] {
    &self.cells
  }

  pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
    self.cells.iter().map(|cell| cell.date)
  }

  pub fn row(&self, row_idx: usize) -> [GridCell; GRID_COLS] {
    let idx = row_idx.min(GRID_ROWS - 1) * GRID_COLS;

    std::array::from_fn(|col| self.cells[idx + col])
  }

  pub fn rows(&self) -> impl Iterator<Item = [GridCell; GRID_COLS]> + '_ {
    (0..GRID_ROWS).map(|row_idx| self.row(row_idx))
  }
}

/// One month of the year view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
  pub month: u32,
  pub name: &'static str,
  pub grid: MonthGrid,
}

/// Twelve month grids, January first. Empty if the year is not representable.
pub fn year_grids(year: i32) -> Vec<YearMonth> {
  (1..=MONTHS_PER_YEAR)
    .filter_map(|month| {
      MonthGrid::new(year, month).map(|grid| YearMonth {
        month,
        name: month_name(month),
        grid,
      })
    })
    .collect()
}

/// The Sunday-to-Saturday week containing `date`.
pub fn week_of(date: NaiveDate) -> [NaiveDate; GRID_COLS] {
  let start = start_of_week(date);

  std::array::from_fn(|idx| start + Days::new(idx as u64))
}

pub fn start_of_week(date: NaiveDate) -> NaiveDate {
  date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

fn start_grid_date(first_of_month: NaiveDate) -> NaiveDate {
  start_of_week(first_of_month)
}
