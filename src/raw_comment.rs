use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct RawComment {
  pub(crate) author: Option<String>,
  pub(crate) body_html: Option<String>,
  pub(crate) id: Option<String>,
  #[serde(default)]
  pub(crate) replies: Value,
  pub(crate) score: Option<i64>,
}
