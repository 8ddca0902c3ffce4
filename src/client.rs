use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Client {
  fn builder(user_agent: &str, timeout: Duration) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
      .user_agent(user_agent)
      .timeout(timeout)
  }

  /// Any non-success status is a transport error. A body that isn't JSON is
  /// a parse error.
  pub(crate) async fn fetch(&self, endpoint: &ApiEndpoint) -> Result<Value> {
    info!(%endpoint, "fetching thread");

    let transport = |source: reqwest::Error| Error::Transport {
      endpoint: endpoint.to_string(),
      source,
    };

    let body = self
      .client
      .get(endpoint.as_str())
      .send()
      .await
      .and_then(reqwest::Response::error_for_status)
      .map_err(transport)?
      .bytes()
      .await
      .map_err(transport)?;

    debug!(%endpoint, bytes = body.len(), "received response");

    Self::parse(&body).map_err(|source| Error::Parse {
      endpoint: endpoint.to_string(),
      source,
    })
  }

  pub(crate) async fn fetch_thread(&self, url: &str) -> Result<Thread> {
    if url.trim().is_empty() {
      return Err(Error::EmptyUrl);
    }

    let endpoint = ApiEndpoint::new(url);

    Thread::from_response(self.fetch(&endpoint).await?)
  }

  pub(crate) fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
    let client = Self::builder(user_agent, timeout)
      .build()
      .map_err(|source| Error::Client { source })?;

    Ok(Self { client })
  }

  /// Every comment level nests several JSON values deep, so the recursion
  /// limit is lifted and the stack grows on demand instead.
  fn parse(body: &[u8]) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);

    deserializer.disable_recursion_limit();

    let value =
      Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;

    deserializer.end()?;

    Ok(value)
  }
}
