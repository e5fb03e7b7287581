//! Item sources - the asynchronous fetch capability injected into the flow

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;
use crate::state::Item;

#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError>;
}

/// Fetches items as JSON over HTTP.
///
/// The body is either an array of items or an object holding that array under
/// `field` (e.g. `{"products": [...]}`).
pub struct HttpItemSource {
    client: reqwest::Client,
    url: String,
    field: Option<String>,
}

impl HttpItemSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Use a preconfigured client (proxies, TLS, default headers)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

}

#[async_trait]
impl ItemSource for HttpItemSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        debug!(url = %self.url, "GET items");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        decode_items(body, self.field.as_deref())
    }
}

/// Pull the item array out of a response body
pub fn decode_items(body: Value, field: Option<&str>) -> Result<Vec<Item>, FetchError> {
    let list = match (body, field) {
        (Value::Object(mut map), Some(field)) => map
            .remove(field)
            .ok_or_else(|| FetchError::failed(format!("response has no field {:?}", field)))?,
        (body, _) => body,
    };

    match list {
        Value::Array(values) => Ok(values.into_iter().map(Item).collect()),
        other => Err(FetchError::failed(format!(
            "expected a JSON array of items, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Resolves with a fixed list, or fails with a fixed message
#[derive(Clone, Debug)]
pub struct StaticItemSource {
    outcome: Result<Vec<Item>, FetchError>,
}

impl StaticItemSource {
    pub fn items(items: impl IntoIterator<Item = impl Into<Item>>) -> Self {
        Self {
            outcome: Ok(items.into_iter().map(Into::into).collect()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(FetchError::failed(message)),
        }
    }
}

#[async_trait]
impl ItemSource for StaticItemSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        self.outcome.clone()
    }
}
