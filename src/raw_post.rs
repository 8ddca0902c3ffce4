use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct RawPost {
  pub(crate) author: Option<String>,
  pub(crate) permalink: Option<String>,
  pub(crate) score: Option<i64>,
  pub(crate) selftext_html: Option<String>,
  pub(crate) title: Option<String>,
}
