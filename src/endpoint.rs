use super::*;

/// The machine-readable location of a thread, always `https://host/path.json`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ApiEndpoint(String);

impl ApiEndpoint {
  const SUFFIX: &str = ".json";

  pub(crate) fn as_str(&self) -> &str {
    &self.0
  }

  fn canonical_path(path: &str) -> String {
    let path = path.strip_suffix('/').unwrap_or(path);

    if path.ends_with(Self::SUFFIX) {
      path.to_string()
    } else {
      format!("{path}{}", Self::SUFFIX)
    }
  }

  /// Never fails: input that isn't an absolute URL still yields an endpoint,
  /// and fetching it is what reports the problem. The authority and path are
  /// kept exactly as written.
  pub(crate) fn new(url: &str) -> Self {
    let url = url.trim();

    let end = url.find(['?', '#']).unwrap_or(url.len());

    let rest = &url[..end];

    let rest = rest.split_once("://").map_or(rest, |(_, rest)| rest);

    let (authority, path) = rest
      .find('/')
      .map_or((rest, ""), |slash| rest.split_at(slash));

    let path = Self::canonical_path(path);

    let separator = if path.starts_with('/') { "" } else { "/" };

    let endpoint = format!("https://{authority}{separator}{path}");

    debug!(url, %endpoint, "normalized thread URL");

    Self(endpoint)
  }

  #[cfg(test)]
  pub(crate) fn unnormalized(url: impl Into<String>) -> Self {
    Self(url.into())
  }
}

impl Display for ApiEndpoint {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}
