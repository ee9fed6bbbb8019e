use std::cell::RefCell;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::Result;

pub const DEFAULT_STORAGE_KEY: &str = "rememberToDoEvents";

/// A single text slot the event store is mirrored into.
pub trait Storage {
  /// Returns `None` if nothing has been stored yet.
  fn read(&self) -> Result<Option<String>>;

  fn write(&mut self, text: &str) -> Result<()>;
}

/// Keeps the slot in memory. Clones share the same slot, so a test can hand one
/// clone to a store and inspect what it wrote through the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
  slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_contents(text: impl Into<String>) -> Self {
    Self {
      slot: Rc::new(RefCell::new(Some(text.into()))),
    }
  }

  pub fn contents(&self) -> Option<String> {
    self.slot.borrow().clone()
  }
}

impl Storage for MemoryStorage {
  fn read(&self) -> Result<Option<String>> {
    Ok(self.contents())
  }

  fn write(&mut self, text: &str) -> Result<()> {
    *self.slot.borrow_mut() = Some(text.to_owned());

    Ok(())
  }
}

/// Stores the slot as `<directory>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
  path: PathBuf,
}

impl FileStorage {
  pub fn new(directory: impl AsRef<Path>, key: &str) -> Self {
    Self {
      path: directory.as_ref().join(format!("{key}.json")),
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl Storage for FileStorage {
  fn read(&self) -> Result<Option<String>> {
    match std::fs::read_to_string(&self.path) {
      Ok(text) => Ok(Some(text)),
      Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
      Err(error) => Err(error.into()),
    }
  }

  fn write(&mut self, text: &str) -> Result<()> {
    if let Some(parent) = self.path.parent() {
      std::fs::create_dir_all(parent)?;
    }

    let temp = self.path.with_extension("json.tmp");
    std::fs::write(&temp, text)?;
    std::fs::rename(&temp, &self.path)?;
    log::debug!("Wrote {} bytes to {}", text.len(), self.path.display());

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn memory_clones_share_the_slot() {
    let observer = MemoryStorage::new();
    let mut storage = observer.clone();

    assert_eq!(storage.read().unwrap(), None);
    storage.write("[]").unwrap();
    assert_eq!(observer.contents().as_deref(), Some("[]"));
  }

  #[test]
  fn file_slot_is_absent_until_written() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let mut storage = FileStorage::new(dir.path().join("nested"), DEFAULT_STORAGE_KEY);

    assert_eq!(storage.read().unwrap(), None);

    storage.write("[]").unwrap();

    assert_eq!(storage.read().unwrap().as_deref(), Some("[]"));
    assert!(storage.path().ends_with("nested/rememberToDoEvents.json"));
  }

  #[test]
  fn file_write_replaces_the_slot_without_leftovers() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let mut storage = FileStorage::new(dir.path(), DEFAULT_STORAGE_KEY);

    storage.write("[1]").unwrap();
    storage.write("[]").unwrap();

    assert_eq!(storage.read().unwrap().as_deref(), Some("[]"));
    let names: Vec<_> = std::fs::read_dir(dir.path())
      .unwrap()
      .map(|entry| entry.unwrap().file_name())
      .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("rememberToDoEvents.json")]);
  }
}
