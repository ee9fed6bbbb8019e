use std::fmt::Debug;

pub fn init() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Logs a missing value or an error at the call site and turns it into an
/// `anyhow` error carrying `msg`.
pub trait LogExt<T> {
  fn log_debug(self, msg: &str) -> anyhow::Result<T>;
  fn log_warn(self, msg: &str) -> anyhow::Result<T>;
  fn log_error(self, msg: &str) -> anyhow::Result<T>;
}

impl<T> LogExt<T> for Option<T> {
  #[track_caller]
  fn log_debug(self, msg: &str) -> anyhow::Result<T> {
    let location = std::panic::Location::caller().to_string();

    self.ok_or_else(|| {
      log::debug!(location; "{msg}");
      anyhow::anyhow!(msg.to_owned())
    })
  }

  #[track_caller]
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    let location = std::panic::Location::caller().to_string();

    self.ok_or_else(|| {
      log::warn!(location; "{msg}");
      anyhow::anyhow!(msg.to_owned())
    })
  }

  #[track_caller]
  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    let location = std::panic::Location::caller().to_string();

    self.ok_or_else(|| {
      log::error!(location; "{msg}");
      anyhow::anyhow!(msg.to_owned())
    })
  }
}

impl<T, E> LogExt<T> for Result<T, E> where E: Debug {
  #[track_caller]
  fn log_debug(self, msg: &str) -> anyhow::Result<T> {
    let location = std::panic::Location::caller();

    self.map_err(|error| {
      log::debug!("[{location}] {msg}: {error:?}");
      anyhow::anyhow!("{msg}: {error:?}")
    })
  }

  #[track_caller]
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    let location = std::panic::Location::caller();

    self.map_err(|error| {
      log::warn!("[{location}] {msg}: {error:?}");
      anyhow::anyhow!("{msg}: {error:?}")
    })
  }

  #[track_caller]
  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    let location = std::panic::Location::caller();

    self.map_err(|error| {
      log::error!("[{location}] {msg}: {error:?}");
      anyhow::anyhow!("{msg}: {error:?}")
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn some_and_ok_pass_through() {
    assert_eq!(Some(3).log_error("missing").unwrap(), 3);
    assert_eq!(Ok::<_, String>(4).log_warn("failed").unwrap(), 4);
  }

  #[test]
  fn none_and_err_carry_the_message() {
    let none = None::<u8>.log_debug("no value").unwrap_err();
    assert_eq!(none.to_string(), "no value");

    let err = Err::<u8, _>("disk full").log_error("write failed").unwrap_err();
    assert_eq!(err.to_string(), "write failed: \"disk full\"");
  }
}
