use {
  arguments::Arguments,
  clap::Parser,
  client::Client,
  comment::Comment,
  config::Config,
  crossterm::style::Stylize,
  endpoint::ApiEndpoint,
  error::Error,
  export::Export,
  file_store::FileStore,
  flat_comment_row::FlatCommentRow,
  format::Format,
  handle::Handle,
  listing::Listing,
  node::Node,
  post::Post,
  rand::{Rng, distributions::Alphanumeric},
  raw_comment::RawComment,
  raw_post::RawPost,
  render::render,
  serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct},
  serde_json::Value,
  std::{
    backtrace::BacktraceStatus,
    env,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, IsTerminal},
    mem,
    path::{Path, PathBuf},
    process,
    str::FromStr,
    time::Duration,
  },
  store::Store,
  subcommand::Subcommand,
  thread::Thread,
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{
    decode_html, format_points, html_to_text, plain_text, terminal_width,
  },
};

mod arguments;
mod client;
mod comment;
mod config;
mod endpoint;
mod error;
mod export;
mod file_store;
mod flat_comment_row;
mod format;
mod handle;
mod listing;
mod node;
mod post;
mod raw_comment;
mod raw_post;
mod render;
mod store;
mod subcommand;
mod thread;
mod utils;

const DEFAULT_SCORE: i64 = 0;

const DEFAULT_USER_AGENT: &str =
  concat!("rex/", env!("CARGO_PKG_VERSION"), " (reddit thread extractor)");

const DELETED_AUTHOR: &str = "[deleted]";

const LOG_ENV: &str = "REX_LOG";

const PERMALINK_BASE: &str = "https://www.reddit.com";

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter = EnvFilter::try_from_env(LOG_ENV)
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn report(error: &anyhow::Error) {
  let use_color = io::stderr().is_terminal();

  let label = |text: &str| {
    if use_color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  eprintln!("{} {error}", label("error:"));

  let mut causes = error.chain().skip(1).peekable();

  if causes.peek().is_some() {
    eprintln!();
    eprintln!("{}", label("because:"));

    for cause in causes {
      eprintln!("{} {cause}", label("-"));
    }
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    eprintln!("{}", label("backtrace:"));
    eprintln!("{backtrace}");
  }
}

async fn run() -> anyhow::Result<()> {
  initialize_logging();

  Arguments::parse().run().await?;

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    report(&error);
    process::exit(1);
  }
}
