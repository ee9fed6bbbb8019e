use chrono::NaiveDate;

use crate::calendar::{Direction, EventFields, EventId, ViewKind};

/// Intents produced by the user interface and consumed by [`crate::app::App::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
  Navigate(Direction),
  Today,
  NextDay(NaiveDate),
  SwitchView(ViewKind),
  SelectDate(NaiveDate),
  /// Moves the anchor without changing the selection.
  GoTo(NaiveDate),
  /// A month name in the year view: show that month of the anchored year.
  OpenMonth(u32),
  /// A day in the year view: anchor on it, select it and show its month.
  OpenDate(NaiveDate),
  CreateEvent(EventFields),
  UpdateEvent(EventId, EventFields),
  DeleteEvent(EventId),
}

impl From<Direction> for Message {
  fn from(direction: Direction) -> Self {
    Self::Navigate(direction)
  }
}

impl From<ViewKind> for Message {
  fn from(view: ViewKind) -> Self {
    Self::SwitchView(view)
  }
}
