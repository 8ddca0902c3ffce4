use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) max_age: Duration,
  pub(crate) store_dir: PathBuf,
  pub(crate) timeout: Duration,
  pub(crate) user_agent: String,
}

impl Config {
  pub(crate) fn client(&self) -> Result<Client> {
    Client::new(&self.user_agent, self.timeout)
  }

  pub(crate) fn default_store_dir() -> Result<PathBuf> {
    let base_dir = if let Ok(dir) = env::var("XDG_CACHE_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".cache")
    } else {
      env::current_dir()
        .map_err(|source| Error::io(Path::new("."), source))?
        .join(".cache")
    };

    Ok(base_dir.join("rex"))
  }

  pub(crate) fn file_store(&self) -> FileStore {
    FileStore::new(self.store_dir.clone(), self.max_age)
  }
}
