use thiserror::Error;

/// Boxed error carried for collaborator failures (transport, deserializer).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Resource client error types.
///
/// Collaborator failures are wrapped source-preserving, never reinterpreted:
/// `source()` returns the original error for downcasting.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A write operation was invoked on a client built without an entity
    /// serializer. Raised before any request is issued.
    #[error("{operation} requires an entity serializer, but none was configured")]
    SerializerMissing {
        /// The operation that needed the serializer.
        operation: &'static str,
    },

    /// The server answered a delete request with a non-success status.
    #[error("entity could not be deleted")]
    DeleteRejected,

    /// Failure reported by the transport (network, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Response body was not valid JSON.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The deserializer rejected the response document.
    #[error("deserialization failed: {0}")]
    Deserialize(#[source] BoxError),
}

impl Error {
    /// Wrap a transport-level failure.
    #[must_use]
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Error::Transport(err.into())
    }

    /// Wrap a deserializer failure.
    #[must_use]
    pub fn deserialize(err: impl Into<BoxError>) -> Self {
        Error::Deserialize(err.into())
    }
}
