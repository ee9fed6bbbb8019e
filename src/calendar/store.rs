use chrono::{Datelike, NaiveDate};

use super::date::{parse_date_key, to_date_key};
use super::{CalendarKind, Error, Event, EventFields, EventId, EventIdGenerator, Result, Storage};

/// Sample events shown on first run, before anything has been stored.
const SEED: [(&str, &str, &str, &str, &str, &str, CalendarKind); 3] = [
  ("sample1", "Team Meeting", "2025-09-25", "10:00", "11:00", "Weekly team sync", CalendarKind::Work),
  ("sample2", "Lunch with Mom", "2025-09-26", "12:00", "13:00", "", CalendarKind::Family),
  ("sample3", "Gym Session", "2025-09-27", "18:00", "19:30", "Leg day", CalendarKind::Personal),
];

pub fn seed_events() -> Vec<Event> {
  SEED
    .iter()
    .filter_map(|(id, title, date, start, end, description, calendar)| {
      let date = parse_date_key(date)?;

      EventFields::new(*title, date)
        .with_times(*start, *end)
        .with_description(*description)
        .with_calendar(*calendar)
        .build(EventId::from(*id))
        .ok()
    })
    .collect()
}

/// Reads the stored events. A missing or blank slot yields the seed events; a
/// slot that does not parse is an error.
///
/// # Errors
/// Returns [`Error::Persistence`] if the slot cannot be read or parsed.
pub fn load_events(storage: &impl Storage) -> Result<Vec<Event>> {
  match storage.read()? {
    Some(text) if !text.trim().is_empty() => Ok(serde_json::from_str(&text)?),
    _ => {
      log::info!("No stored events, starting from the sample set");

      Ok(seed_events())
    }
  }
}

/// In-memory list of events mirrored into a [`Storage`] slot after every change.
///
/// The in-memory list is the source of truth. A mutation whose write fails is
/// rolled back, so the list and the slot never disagree.
#[derive(Debug)]
pub struct EventStore<S> {
  storage: S,
  events: Vec<Event>,
  ids: EventIdGenerator,
}

impl<S: Storage> EventStore<S> {
  /// # Errors
  /// Returns [`Error::Persistence`] if the slot cannot be read or parsed.
  pub fn load(storage: S) -> Result<Self> {
    let events = load_events(&storage)?;
    log::info!("Loaded {} events", events.len());

    Ok(Self {
      storage,
      events,
      ids: EventIdGenerator::new(),
    })
  }

  pub fn events(&self) -> &[Event] {
    &self.events
  }

  pub fn len(&self) -> usize {
    self.events.len()
  }

  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }

  pub fn get(&self, id: &EventId) -> Option<&Event> {
    self.events.iter().find(|event| &event.id == id)
  }

  pub const fn storage(&self) -> &S {
    &self.storage
  }

  /// # Errors
  /// Returns [`Error::Validation`] for an empty title or date, and
  /// [`Error::Persistence`] if the write fails. Neither leaves a trace in the store.
  pub fn create(&mut self, fields: &EventFields) -> Result<Event> {
    let event = fields.build(self.fresh_id())?;

    self.events.push(event.clone());

    if let Err(error) = self.persist() {
      self.events.pop();
      return Err(error);
    }

    log::info!("Created event {} on {}", event.id, event.date_key());

    Ok(event)
  }

  /// Replaces every field of the event with `id`.
  ///
  /// # Errors
  /// Returns [`Error::NotFound`] for an unknown id, [`Error::Validation`] for
  /// invalid fields and [`Error::Persistence`] if the write fails.
  pub fn update(&mut self, id: &EventId, fields: &EventFields) -> Result<Event> {
    let idx = self
      .position(id)
      .ok_or_else(|| Error::NotFound(id.clone()))?;

    let event = fields.build(id.clone())?;

    let previous = std::mem::replace(&mut self.events[idx], event.clone());

    if let Err(error) = self.persist() {
      self.events[idx] = previous;
      return Err(error);
    }

    log::info!("Updated event {id}");

    Ok(event)
  }

  /// Removes the event with `id`, if any, and writes the store either way.
  /// Deleting an unknown id is not an error.
  ///
  /// # Errors
  /// Returns [`Error::Persistence`] if the write fails.
  pub fn delete(&mut self, id: &EventId) -> Result<Option<Event>> {
    let removed = self.position(id).map(|idx| (idx, self.events.remove(idx)));

    if let Err(error) = self.persist() {
      if let Some((idx, event)) = removed {
        self.events.insert(idx, event);
      }
      return Err(error);
    }

    match &removed {
      Some(_) => log::info!("Deleted event {id}"),
      None => log::debug!("Event {id} was already deleted"),
    }

    Ok(removed.map(|(_, event)| event))
  }

  /// Events whose date key equals the key of `date`, in insertion order.
  pub fn events_on(&self, date: &impl Datelike) -> Vec<&Event> {
    let key = to_date_key(date);

    self.events.iter().filter(|event| event.date_key() == key).collect()
  }

  pub fn has_events_on(&self, date: &impl Datelike) -> bool {
    let key = to_date_key(date);

    self.events.iter().any(|event| event.date_key() == key)
  }

  /// Events on any day in `start..=end`, in insertion order.
  pub fn events_between(&self, start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = &Event> {
    self
      .events
      .iter()
      .filter(move |event| start <= event.date && event.date <= end)
  }

  fn position(&self, id: &EventId) -> Option<usize> {
    self.events.iter().position(|event| &event.id == id)
  }

  fn fresh_id(&mut self) -> EventId {
    loop {
      let id = self.ids.next_id();
      if self.position(&id).is_none() {
        return id;
      }
    }
  }

  fn persist(&mut self) -> Result<()> {
    let text = serde_json::to_string(&self.events)?;

    self.storage.write(&text).inspect_err(|error| {
      log::error!("Failed to store {} events: {error}", self.events.len());
    })
  }
}
