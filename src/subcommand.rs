use super::*;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  /// Write a previously extracted thread to a JSON or CSV file
  Export {
    /// Output format, `json` or `csv`
    #[arg(long, short)]
    format: String,
    /// Handle printed by `rex extract`
    handle: String,
    /// Directory the file is written to
    #[arg(long, short, default_value = ".")]
    output_dir: PathBuf,
  },
  /// Fetch a thread, print it, and keep it for export
  Extract {
    /// Only print the handle
    #[arg(long, short)]
    quiet: bool,
    /// Link to the thread
    url: String,
  },
}

impl Subcommand {
  fn export(
    store: &dyn Store,
    format: &str,
    handle: &str,
    output_dir: &Path,
  ) -> Result<PathBuf> {
    let format = format.parse::<Format>()?;

    let thread = store.get(handle)?.ok_or_else(|| Error::NotFound {
      handle: handle.to_string(),
    })?;

    let export = Export::new(&thread, format)?;

    let path = output_dir.join(&export.filename);

    fs::write(&path, &export.contents)
      .map_err(|source| Error::io(&path, source))?;

    Ok(path)
  }

  async fn extract(
    client: &Client,
    store: &dyn Store,
    url: &str,
  ) -> Result<(Thread, Handle)> {
    let thread = client.fetch_thread(url).await?;

    let handle = store.put(&thread)?;

    Ok((thread, handle))
  }

  pub(crate) async fn run(self, config: &Config) -> Result {
    let store = config.file_store();

    match self {
      Self::Export {
        format,
        handle,
        output_dir,
      } => {
        let path = Self::export(&store, &format, &handle, &output_dir)?;

        println!("{}", path.display());
      }
      Self::Extract { quiet, url } => {
        let (thread, handle) =
          Self::extract(&config.client()?, &store, &url).await?;

        if !quiet {
          print!("{}", render(&thread, terminal_width()));
        }

        println!("handle: {handle}");
      }
    }

    Ok(())
  }
}
