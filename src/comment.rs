use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Comment {
  pub(crate) author: String,
  pub(crate) body: String,
  pub(crate) id: Option<String>,
  pub(crate) replies: Vec<Comment>,
  pub(crate) score: i64,
}

impl From<RawComment> for Comment {
  fn from(raw: RawComment) -> Self {
    Self {
      author: raw.author.unwrap_or_else(|| DELETED_AUTHOR.to_string()),
      body: raw.body_html.as_deref().map(decode_html).unwrap_or_default(),
      id: raw.id,
      replies: Vec::new(),
      score: raw.score.unwrap_or(DEFAULT_SCORE),
    }
  }
}

impl Comment {
  pub(crate) const KIND: &str = "t1";

  /// Comment levels kept, counting the top level.
  pub(crate) const MAX_DEPTH: usize = 50;

  /// Builds the comment forest of a listing without recursing on the native
  /// stack. Nodes that aren't comments are dropped along with their replies.
  pub(crate) fn forest(nodes: Vec<Value>) -> Result<Vec<Self>> {
    let mut built: Vec<(Self, Option<usize>)> = Vec::new();

    let mut pending = nodes
      .into_iter()
      .rev()
      .map(|node| (node, None, 0))
      .collect::<Vec<(Value, Option<usize>, usize)>>();

    while let Some((node, parent, depth)) = pending.pop() {
      let Node { data, kind } = serde_json::from_value(node)
        .map_err(|error| Error::shape(format!("comment node: {error}")))?;

      if kind != Self::KIND {
        debug!(%kind, "dropping non-comment node");
        continue;
      }

      let mut raw = serde_json::from_value::<RawComment>(data)
        .map_err(|error| Error::shape(format!("comment data: {error}")))?;

      let replies = Listing::replies(mem::take(&mut raw.replies));

      let index = built.len();

      built.push((Self::from(raw), parent));

      if replies.is_empty() {
        continue;
      }

      if depth + 1 >= Self::MAX_DEPTH {
        warn!(
          depth,
          dropped = replies.len(),
          "comment tree exceeds maximum depth, truncating"
        );
        continue;
      }

      pending.extend(
        replies
          .into_iter()
          .rev()
          .map(|reply| (reply, Some(index), depth + 1)),
      );
    }

    // Children always sit after their parent, so walking backwards completes
    // every subtree before it is attached.
    let mut roots = Vec::new();

    while let Some((mut comment, parent)) = built.pop() {
      comment.replies.reverse();

      if let Some(parent) = parent {
        built[parent].0.replies.push(comment);
      } else {
        roots.push(comment);
      }
    }

    roots.reverse();

    Ok(roots)
  }
}
