use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Thread {
  pub(crate) comments: Vec<Comment>,
  pub(crate) post: Post,
}

impl Thread {
  /// Expects `[post_listing, comment_listing]`, the shape of a thread's
  /// `.json` endpoint.
  pub(crate) fn from_response(response: Value) -> Result<Self> {
    let Value::Array(listings) = response else {
      return Err(Error::shape("expected an array of two listings"));
    };

    let [post_listing, comment_listing] =
      <[Value; 2]>::try_from(listings).map_err(|listings| {
        Error::shape(format!(
          "expected exactly two listings, found {}",
          listings.len()
        ))
      })?;

    let mut post_node = Listing::children(post_listing, "post")?
      .into_iter()
      .next()
      .ok_or_else(|| Error::shape("post listing has no children"))?;

    let post = post_node
      .get_mut("data")
      .map(Value::take)
      .unwrap_or_default();

    let post = serde_json::from_value::<RawPost>(post)
      .map(Post::from)
      .map_err(|error| Error::shape(format!("post data: {error}")))?;

    let comments =
      Comment::forest(Listing::children(comment_listing, "comment")?)?;

    info!(
      title = %post.title,
      top_level_comments = comments.len(),
      "built thread"
    );

    Ok(Self { comments, post })
  }
}

/// Written post first, the order readers of an export expect.
impl Serialize for Thread {
  fn serialize<S: Serializer>(
    &self,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Thread", 2)?;
    state.serialize_field("post", &self.post)?;
    state.serialize_field("comments", &self.comments)?;
    state.end()
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use {super::*, serde_json::json};

  pub(crate) fn sample_response() -> Value {
    json!([
      {
        "kind": "Listing",
        "data": {
          "children": [{
            "kind": "t3",
            "data": {
              "author": "op",
              "permalink": "/r/rust/comments/abc/hello/",
              "score": 10,
              "selftext_html": "&lt;p&gt;Body&lt;/p&gt;",
              "title": "Hello / world",
            }
          }]
        }
      },
      {
        "kind": "Listing",
        "data": {
          "children": [
            {
              "kind": "t1",
              "data": {
                "author": "bob",
                "body_html": "&lt;p&gt;first&lt;/p&gt;",
                "id": "a",
                "score": 5,
                "replies": {
                  "kind": "Listing",
                  "data": {
                    "children": [{
                      "kind": "t1",
                      "data": {
                        "author": "carol",
                        "body_html": "&lt;p&gt;reply &amp;amp; more&lt;/p&gt;",
                        "id": "b",
                        "score": 2,
                        "replies": "",
                      }
                    }]
                  }
                },
              }
            },
            {"kind": "more", "data": {"count": 4, "children": ["z"]}},
          ]
        }
      }
    ])
  }

  pub(crate) fn sample_thread() -> Thread {
    Thread::from_response(sample_response()).unwrap()
  }

  #[test]
  fn builds_post_and_comments() {
    let thread = sample_thread();

    assert_eq!(thread.post.title, "Hello / world");
    assert_eq!(thread.post.selftext, "<p>Body</p>");
    assert_eq!(
      thread.post.url,
      "https://www.reddit.com/r/rust/comments/abc/hello/"
    );

    assert_eq!(thread.comments.len(), 1);
    assert_eq!(thread.comments[0].body, "<p>first</p>");
    assert_eq!(thread.comments[0].replies[0].body, "<p>reply &amp; more</p>");
  }

  #[test]
  fn json_round_trip_preserves_thread() {
    let thread = sample_thread();

    let serialized = serde_json::to_string(&thread).unwrap();

    assert_eq!(serde_json::from_str::<Thread>(&serialized).unwrap(), thread);
  }

  #[test]
  fn serializes_post_before_comments() {
    let serialized = serde_json::to_string(&sample_thread()).unwrap();

    assert!(serialized.starts_with("{\"post\":{"), "{serialized}");
    assert!(
      serialized.find("\"post\"") < serialized.find("\"comments\""),
      "{serialized}"
    );
  }

  #[test]
  fn rejects_non_array_response() {
    assert!(matches!(
      Thread::from_response(json!({"data": {}})),
      Err(Error::Shape { .. })
    ));
  }

  #[test]
  fn rejects_wrong_number_of_listings() {
    let Value::Array(mut listings) = sample_response() else {
      unreachable!();
    };

    listings.pop();

    assert!(matches!(
      Thread::from_response(Value::Array(listings)),
      Err(Error::Shape { message }) if message.contains("found 1")
    ));
  }

  #[test]
  fn rejects_empty_post_listing() {
    let response = json!([
      {"data": {"children": []}},
      {"data": {"children": []}},
    ]);

    assert!(matches!(
      Thread::from_response(response),
      Err(Error::Shape { .. })
    ));
  }

  #[test]
  fn rejects_listing_without_children() {
    let response = json!([
      {"data": {"children": [{"kind": "t3", "data": {"title": "x"}}]}},
      {"data": {}},
    ]);

    assert!(matches!(
      Thread::from_response(response),
      Err(Error::Shape { .. })
    ));
  }

  #[test]
  fn post_without_data_is_a_shape_error() {
    let response = json!([
      {"data": {"children": [{"kind": "t3"}]}},
      {"data": {"children": []}},
    ]);

    assert!(matches!(
      Thread::from_response(response),
      Err(Error::Shape { .. })
    ));
  }

  #[test]
  fn thread_without_comments_is_valid() {
    let response = json!([
      {"data": {"children": [{"kind": "t3", "data": {"title": "quiet"}}]}},
      {"data": {"children": []}},
    ]);

    let thread = Thread::from_response(response).unwrap();

    assert_eq!(thread.post.title, "quiet");
    assert!(thread.comments.is_empty());
  }
}
