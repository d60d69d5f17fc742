//! REST client for the `/api/items` endpoints.
//!
//! [`ItemsApi`] is the seam the controller depends on; [`HttpItemsApi`]
//! implements it over HTTP using [`reqwest`].

use async_trait::async_trait;
use itemboard_core::item::{Item, ItemInput};
use itemboard_core::types::ItemId;
use serde::Deserialize;

/// Default API location when the server runs locally.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/items";

/// Errors from the items REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `error` message, or the raw body if it had none.
        message: String,
    },
}

impl ClientError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(_) => "Could not reach the server".to_string(),
            Self::Api { message, .. } => message.clone(),
        }
    }
}

/// Item operations as seen from the client.
#[async_trait]
pub trait ItemsApi: Send + Sync {
    /// All items, newest first.
    async fn list(&self) -> Result<Vec<Item>, ClientError>;

    async fn create(&self, input: &ItemInput) -> Result<Item, ClientError>;

    async fn update(&self, id: ItemId, input: &ItemInput) -> Result<Item, ClientError>;

    /// Delete an item, returning the removed record.
    async fn delete(&self, id: ItemId) -> Result<Item, ClientError>;
}

/// Error body produced by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Body returned by `DELETE /api/items/{id}`.
#[derive(Debug, Deserialize)]
struct DeleteBody {
    item: Item,
}

/// HTTP client for the items API.
pub struct HttpItemsApi {
    client: reqwest::Client,
    api_url: String,
}

impl Default for HttpItemsApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL.to_string())
    }
}

impl HttpItemsApi {
    /// Create a new client.
    ///
    /// * `api_url` - Collection URL, e.g. `http://host:3000/api/items`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/{}", self.api_url, id)
    }

    /// Return the response unchanged on success, or a [`ClientError::Api`]
    /// carrying the server's message on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|parsed| parsed.error)
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ItemsApi for HttpItemsApi {
    async fn list(&self) -> Result<Vec<Item>, ClientError> {
        let response = self.client.get(&self.api_url).send().await?;
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn create(&self, input: &ItemInput) -> Result<Item, ClientError> {
        let response = self.client.post(&self.api_url).json(input).send().await?;
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn update(&self, id: ItemId, input: &ItemInput) -> Result<Item, ClientError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(input)
            .send()
            .await?;
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn delete(&self, id: ItemId) -> Result<Item, ClientError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        let body: DeleteBody = Self::ensure_success(response).await?.json().await?;
        Ok(body.item)
    }
}
