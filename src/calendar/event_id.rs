use std::fmt::{Display, Formatter, Result};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque event identifier. Assigned once at creation and never changed.
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Display for EventId {
  fn fmt(&self, formatter: &mut Formatter) -> Result {
    formatter.write_str(&self.0)
  }
}

impl From<&str> for EventId {
  fn from(id: &str) -> Self {
    Self::new(id)
  }
}

impl From<String> for EventId {
  fn from(id: String) -> Self {
    Self(id)
  }
}

/// Produces `event_<unix millis>_<sequence><random>` ids. The sequence is strictly
/// increasing for the lifetime of the generator, so two ids from the same
/// generator never collide even within the same millisecond.
#[derive(Debug, Default)]
pub struct EventIdGenerator {
  sequence: u64,
}

impl EventIdGenerator {
  pub const fn new() -> Self {
    Self { sequence: 0 }
  }

  pub fn next_id(&mut self) -> EventId {
    self.sequence += 1;

    let random = Uuid::new_v4().simple().to_string();

    EventId(format!(
      "event_{}_{:x}{}",
      Utc::now().timestamp_millis(),
      self.sequence,
      &random[..6],
    ))
  }
}
