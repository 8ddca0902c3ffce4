use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Node {
  pub(crate) data: Value,
  pub(crate) kind: String,
}
