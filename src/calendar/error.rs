use thiserror::Error;

use super::EventId;

#[derive(Error, Debug)]
pub enum Error {
  /// A required event field is missing or malformed. Blocks the mutation.
  #[error("Invalid event: {0}")]
  Validation(String),

  #[error("Event not found: {0}")]
  NotFound(EventId),

  #[error("Storage error: {0}")]
  Persistence(#[from] PersistenceError),
}

#[derive(Error, Debug)]
pub enum PersistenceError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Malformed stored events: {0}")]
  Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for Error {
  fn from(error: std::io::Error) -> Self {
    Self::Persistence(PersistenceError::Io(error))
  }
}

impl From<serde_json::Error> for Error {
  fn from(error: serde_json::Error) -> Self {
    Self::Persistence(PersistenceError::Json(error))
  }
}

pub type Result<T> = std::result::Result<T, Error>;
