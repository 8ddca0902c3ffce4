use super::*;

/// One JSON file per handle. Files older than `max_age` read as absent and
/// are removed.
#[derive(Debug)]
pub(crate) struct FileStore {
  directory: PathBuf,
  max_age: Duration,
}

impl FileStore {
  fn ensure_directory(&self) -> Result {
    fs::create_dir_all(&self.directory)
      .map_err(|source| Error::io(&self.directory, source))
  }

  fn is_expired(&self, path: &Path) -> Result<bool> {
    let modified = fs::metadata(path)
      .and_then(|metadata| metadata.modified())
      .map_err(|source| Error::io(path, source))?;

    Ok(modified.elapsed().unwrap_or_default() >= self.max_age)
  }

  pub(crate) fn new(directory: PathBuf, max_age: Duration) -> Self {
    Self { directory, max_age }
  }

  fn path(&self, handle: &Handle) -> PathBuf {
    self.directory.join(format!("{handle}.json"))
  }
}

impl Store for FileStore {
  fn get(&self, handle: &str) -> Result<Option<Thread>> {
    let Some(handle) = Handle::parse(handle) else {
      debug!(handle, "ignoring malformed handle");
      return Ok(None);
    };

    let path = self.path(&handle);

    if !path.exists() {
      return Ok(None);
    }

    if self.is_expired(&path)? {
      warn!(%handle, "stored thread expired");

      fs::remove_file(&path).map_err(|source| Error::io(&path, source))?;

      return Ok(None);
    }

    let data = fs::read(&path).map_err(|source| Error::io(&path, source))?;

    serde_json::from_slice::<Thread>(&data)
      .map(Some)
      .map_err(|source| Error::StoredThread {
        handle: handle.to_string(),
        source,
      })
  }

  fn put(&self, thread: &Thread) -> Result<Handle> {
    self.ensure_directory()?;

    let handle = Handle::generate();

    let path = self.path(&handle);

    let serialized = serde_json::to_vec(thread)
      .map_err(|source| Error::Serialize { source })?;

    fs::write(&path, serialized).map_err(|source| Error::io(&path, source))?;

    info!(%handle, path = %path.display(), "stored thread");

    Ok(handle)
  }
}
