use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Post {
  pub(crate) author: String,
  pub(crate) score: i64,
  pub(crate) selftext: String,
  pub(crate) title: String,
  pub(crate) url: String,
}

impl From<RawPost> for Post {
  fn from(raw: RawPost) -> Self {
    Self {
      author: raw.author.unwrap_or_else(|| DELETED_AUTHOR.to_string()),
      score: raw.score.unwrap_or(DEFAULT_SCORE),
      selftext: raw
        .selftext_html
        .as_deref()
        .map(decode_html)
        .unwrap_or_default(),
      title: raw.title.unwrap_or_default(),
      url: format!(
        "{PERMALINK_BASE}{}",
        raw.permalink.as_deref().unwrap_or_default()
      ),
    }
  }
}
