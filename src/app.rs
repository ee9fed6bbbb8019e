use chrono::{Datelike as _, NaiveDate};

use crate::calendar::{
  view, Event, EventStore, GridCell, MonthGrid, Result, Storage, ViewKind, ViewPeriod,
};
use crate::messaging::Message;

/// Ephemeral view state. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
  pub current_view: ViewKind,
  pub anchor: NaiveDate,
  pub selected: Option<NaiveDate>,
  pub today: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayFlags {
  pub in_current_month: bool,
  pub is_today: bool,
  pub is_selected: bool,
}

impl ViewState {
  pub const fn new(current_view: ViewKind, today: NaiveDate) -> Self {
    Self {
      current_view,
      anchor: today,
      selected: None,
      today,
    }
  }

  pub fn period(&self) -> ViewPeriod {
    view::select(self.current_view, self.anchor)
  }

  /// Grid of the anchored month, used by the month view and the mini calendar.
  pub fn month_grid(&self) -> MonthGrid {
    MonthGrid::for_date(self.anchor)
  }

  pub fn is_today(&self, date: NaiveDate) -> bool {
    date == self.today
  }

  pub fn is_selected(&self, date: NaiveDate) -> bool {
    self.selected == Some(date)
  }

  pub fn flags(&self, cell: &GridCell) -> DayFlags {
    DayFlags {
      in_current_month: cell.in_current_month,
      is_today: self.is_today(cell.date),
      is_selected: self.is_selected(cell.date),
    }
  }

  /// Applies a message that only touches the view. Event messages are ignored here.
  pub fn apply(&mut self, message: &Message) {
    match message {
      Message::Navigate(direction) => {
        self.anchor = view::step(self.current_view, self.anchor, *direction);
      }
      Message::Today => {
        self.anchor = self.today;
        self.selected = Some(self.today);
      }
      Message::NextDay(today) => {
        self.today = *today;
      }
      Message::SwitchView(view) => {
        self.current_view = *view;
      }
      Message::SelectDate(date) => {
        self.selected = Some(*date);
      }
      Message::GoTo(date) => {
        self.anchor = *date;
      }
      Message::OpenMonth(month) => {
        if let Some(first) = NaiveDate::from_ymd_opt(self.anchor.year(), *month, 1) {
          self.anchor = first;
          self.current_view = ViewKind::Month;
        }
      }
      Message::OpenDate(date) => {
        self.anchor = *date;
        self.selected = Some(*date);
        self.current_view = ViewKind::Month;
      }
      Message::CreateEvent(_) | Message::UpdateEvent(..) | Message::DeleteEvent(_) => {}
    }
  }
}

/// What an [`App::update`] changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
  View,
  Created(Event),
  Updated(Event),
  Deleted(Option<Event>),
}

/// The event store and the view state, driven by [`Message`]s.
#[derive(Debug)]
pub struct App<S> {
  store: EventStore<S>,
  state: ViewState,
}

impl<S: Storage> App<S> {
  pub const fn new(store: EventStore<S>, state: ViewState) -> Self {
    Self { store, state }
  }

  pub const fn store(&self) -> &EventStore<S> {
    &self.store
  }

  pub const fn state(&self) -> &ViewState {
    &self.state
  }

  /// # Errors
  /// Event messages fail the way the corresponding store operation fails; the
  /// store is left unchanged in that case.
  pub fn update(&mut self, message: Message) -> Result<Update> {
    let update = match message {
      Message::CreateEvent(fields) => Update::Created(self.store.create(&fields)?),
      Message::UpdateEvent(id, fields) => Update::Updated(self.store.update(&id, &fields)?),
      Message::DeleteEvent(id) => Update::Deleted(self.store.delete(&id)?),
      message => {
        log::debug!("View message {message:?}");
        self.state.apply(&message);
        Update::View
      }
    };

    Ok(update)
  }
}
