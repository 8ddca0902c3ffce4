use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
  pub(crate) data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
  pub(crate) children: Vec<Value>,
}

impl Listing {
  pub(crate) fn children(listing: Value, name: &str) -> Result<Vec<Value>> {
    serde_json::from_value::<Self>(listing)
      .map(|listing| listing.data.children)
      .map_err(|error| Error::shape(format!("{name} listing: {error}")))
  }

  /// Replies arrive as a nested listing, or as `""`/`{}` when there are none.
  pub(crate) fn replies(mut replies: Value) -> Vec<Value> {
    if let Some(Value::Array(children)) =
      replies.pointer_mut("/data/children").map(Value::take)
    {
      children
    } else {
      Vec::new()
    }
  }
}
