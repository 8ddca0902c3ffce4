use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("could not build HTTP client")]
  Client {
    #[source]
    source: reqwest::Error,
  },
  #[error("could not write CSV")]
  Csv {
    #[from]
    source: csv::Error,
  },
  #[error("please provide a Reddit URL")]
  EmptyUrl,
  #[error("invalid download format `{format}`, expected `json` or `csv`")]
  InvalidFormat { format: String },
  #[error("I/O error at `{}`", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("no extracted thread for handle `{handle}`, extract a thread first")]
  NotFound { handle: String },
  #[error("failed to parse JSON from `{endpoint}`, the URL might be incorrect")]
  Parse {
    endpoint: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("could not serialize thread")]
  Serialize {
    #[source]
    source: serde_json::Error,
  },
  #[error("unexpected response shape: {message}")]
  Shape { message: String },
  #[error("stored thread `{handle}` is unreadable")]
  StoredThread {
    handle: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("error fetching data from `{endpoint}`")]
  Transport {
    endpoint: String,
    #[source]
    source: reqwest::Error,
  },
}

impl Error {
  pub(crate) fn io(path: &Path, source: io::Error) -> Self {
    Self::Io {
      path: path.to_path_buf(),
      source,
    }
  }

  pub(crate) fn shape(message: impl Into<String>) -> Self {
    Self::Shape {
      message: message.into(),
    }
  }
}
