use crate::error::Error;
use async_trait::async_trait;
use serde_json::Value;

/// One response handed back by a [`Transport`].
///
/// The client only ever asks two things of a response: whether it succeeded,
/// and its JSON body. Everything else (headers, status details, streaming)
/// stays inside the transport implementation.
#[async_trait]
pub trait TransportResponse: Send {
    /// Whether the response indicates success (for HTTP, a 2xx status).
    #[must_use]
    fn is_success(&self) -> bool;

    /// Read the full body and parse it as JSON. One-shot: consumes the
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for a malformed body, or [`Error::Transport`]
    /// if the body could not be read.
    async fn json(self: Box<Self>) -> Result<Value, Error>;
}

/// Transport seam: implement this to add API-specific concerns (base URL,
/// authentication headers, retries, TLS) to the request flow.
///
/// Implementations expose the full verb set; the resource client currently
/// drives `get`, `post`, `patch` and `delete`. All methods must be safe for
/// concurrent invocation.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use japi_client::{Error, Transport, TransportResponse};
/// use serde_json::Value;
///
/// struct ApiTransport {
///     http: reqwest::Client,
///     base_url: String,
///     token: String,
/// }
///
/// #[async_trait]
/// impl Transport for ApiTransport {
///     async fn get(&self, url: &str) -> Result<Box<dyn TransportResponse>, Error> {
///         let response = self
///             .http
///             .get(format!("{}{url}", self.base_url))
///             .bearer_auth(&self.token)
///             .send()
///             .await
///             .map_err(Error::transport)?;
///         Ok(Box::new(ApiResponse(response)))
///     }
///     // post/put/patch/delete analogous
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] for network-level failures.
    async fn get(&self, url: &str) -> Result<Box<dyn TransportResponse>, Error>;

    /// Issue a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] for network-level failures.
    async fn post(&self, url: &str, body: &Value) -> Result<Box<dyn TransportResponse>, Error>;

    /// Issue a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] for network-level failures.
    async fn put(&self, url: &str, body: &Value) -> Result<Box<dyn TransportResponse>, Error>;

    /// Issue a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] for network-level failures.
    async fn patch(&self, url: &str, body: &Value) -> Result<Box<dyn TransportResponse>, Error>;

    /// Issue a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] for network-level failures.
    async fn delete(&self, url: &str) -> Result<Box<dyn TransportResponse>, Error>;
}
