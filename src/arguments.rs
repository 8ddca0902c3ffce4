use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Extract Reddit threads and export them as JSON or CSV"
)]
pub(crate) struct Arguments {
  /// Seconds an extracted thread stays available for export
  #[arg(long, env = "REX_MAX_AGE", default_value_t = 3600, global = true)]
  max_age: u64,
  /// Directory extracted threads are stored in
  #[arg(long, env = "REX_STORE_DIR", global = true)]
  store_dir: Option<PathBuf>,
  #[command(subcommand)]
  subcommand: Subcommand,
  /// Seconds to wait for Reddit before giving up
  #[arg(long, env = "REX_TIMEOUT", default_value_t = 30, global = true)]
  timeout: u64,
  /// User-Agent sent with every request
  #[arg(
    long,
    env = "REX_USER_AGENT",
    default_value = DEFAULT_USER_AGENT,
    global = true
  )]
  user_agent: String,
}

impl Arguments {
  fn config(&self) -> Result<Config> {
    let store_dir = self
      .store_dir
      .clone()
      .map_or_else(Config::default_store_dir, Ok)?;

    Ok(Config {
      max_age: Duration::from_secs(self.max_age),
      store_dir,
      timeout: Duration::from_secs(self.timeout),
      user_agent: self.user_agent.clone(),
    })
  }

  pub(crate) async fn run(self) -> Result {
    let config = self.config()?;

    debug!(?config, "resolved configuration");

    self.subcommand.run(&config).await
  }
}
