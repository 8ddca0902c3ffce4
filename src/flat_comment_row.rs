use super::*;

#[derive(Debug, PartialEq)]
pub(crate) struct FlatCommentRow {
  pub(crate) author: String,
  pub(crate) body: String,
  pub(crate) id: Option<String>,
  pub(crate) parent_id: Option<String>,
  pub(crate) score: i64,
}

impl FlatCommentRow {
  pub(crate) const HEADER: [&str; 5] =
    ["id", "parent_id", "author", "score", "body"];

  /// Rows come out in pre-order, so every reply follows its parent and
  /// precedes the parent's next sibling.
  pub(crate) fn flatten(comments: &[Comment]) -> Vec<Self> {
    let mut rows = Vec::new();

    let mut pending = comments
      .iter()
      .rev()
      .map(|comment| (comment, None))
      .collect::<Vec<(&Comment, Option<&str>)>>();

    while let Some((comment, parent_id)) = pending.pop() {
      rows.push(Self {
        author: comment.author.clone(),
        body: plain_text(&comment.body),
        id: comment.id.clone(),
        parent_id: parent_id.map(str::to_string),
        score: comment.score,
      });

      pending.extend(
        comment
          .replies
          .iter()
          .rev()
          .map(|reply| (reply, comment.id.as_deref())),
      );
    }

    rows
  }

  pub(crate) fn record(&self) -> [String; 5] {
    [
      self.id.clone().unwrap_or_default(),
      self.parent_id.clone().unwrap_or_default(),
      self.author.clone(),
      self.score.to_string(),
      self.body.clone(),
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn comment(id: &str, replies: Vec<Comment>) -> Comment {
    Comment {
      author: format!("user_{id}"),
      body: format!("<p>comment {id}</p>"),
      id: Some(id.to_string()),
      replies,
      score: 1,
    }
  }

  fn order(rows: &[FlatCommentRow]) -> Vec<(&str, Option<&str>)> {
    rows
      .iter()
      .map(|row| (row.id.as_deref().unwrap(), row.parent_id.as_deref()))
      .collect()
  }

  #[test]
  fn flattens_single_comment() {
    let rows = FlatCommentRow::flatten(&[Comment {
      author: "bob".into(),
      body: "hi".into(),
      id: Some("a".into()),
      replies: Vec::new(),
      score: 5,
    }]);

    assert_eq!(
      rows,
      vec![FlatCommentRow {
        author: "bob".into(),
        body: "hi".into(),
        id: Some("a".into()),
        parent_id: None,
        score: 5,
      }]
    );
  }

  #[test]
  fn flattens_depth_first_parent_before_children() {
    let forest = vec![
      comment(
        "a",
        vec![
          comment("b", vec![comment("c", Vec::new())]),
          comment("d", Vec::new()),
        ],
      ),
      comment("e", vec![comment("f", Vec::new())]),
    ];

    assert_eq!(
      order(&FlatCommentRow::flatten(&forest)),
      [
        ("a", None),
        ("b", Some("a")),
        ("c", Some("b")),
        ("d", Some("a")),
        ("e", None),
        ("f", Some("e")),
      ]
    );
  }

  #[test]
  fn bodies_are_plain_text() {
    let rows = FlatCommentRow::flatten(&[comment("a", Vec::new())]);

    assert_eq!(rows[0].body, "comment a");
  }

  #[test]
  fn missing_parent_id_leaves_children_unlinked() {
    let mut parent = comment("a", vec![comment("b", Vec::new())]);
    parent.id = None;

    let rows = FlatCommentRow::flatten(&[parent]);

    assert_eq!(rows[1].parent_id, None);
  }

  #[test]
  fn record_follows_header_order() {
    let rows = FlatCommentRow::flatten(&[comment(
      "a",
      vec![comment("b", Vec::new())],
    )]);

    assert_eq!(rows[1].record(), ["b", "a", "user_b", "1", "comment b"]);
  }

  #[test]
  fn empty_forest_has_no_rows() {
    assert!(FlatCommentRow::flatten(&[]).is_empty());
  }
}
