use super::*;

/// Keyed storage for extracted threads. Reads of unknown or expired handles
/// come back as `Ok(None)`.
pub(crate) trait Store {
  fn get(&self, handle: &str) -> Result<Option<Thread>>;

  fn put(&self, thread: &Thread) -> Result<Handle>;
}
