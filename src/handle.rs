use super::*;

/// Opaque key under which an extracted thread is stored.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Handle(String);

impl Handle {
  const LENGTH: usize = 32;

  pub(crate) fn generate() -> Self {
    Self(
      rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(Self::LENGTH)
        .map(char::from)
        .collect(),
    )
  }

  /// Anything other than plain ASCII alphanumerics is rejected, so a handle
  /// can never name a path outside the store.
  pub(crate) fn parse(handle: &str) -> Option<Self> {
    (!handle.is_empty()
      && handle.chars().all(|ch| ch.is_ascii_alphanumeric()))
    .then(|| Self(handle.to_string()))
  }
}

impl Display for Handle {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}
