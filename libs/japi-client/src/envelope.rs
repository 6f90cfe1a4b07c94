use serde::Serialize;
use serde_json::Value;

/// Response wrapper combining typed data with pass-through document metadata.
///
/// `links` and `meta` are copied verbatim from the raw body, and only when
/// the key is present there: an absent key stays absent (`None` serializes
/// to no key at all, never an explicit `null`). Snapshot comparisons rely on
/// that distinction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Envelope<D> {
    /// The typed payload: a single entity or a collection, by operation.
    pub data: D,

    /// Top-level `links` object, when the response carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,

    /// Top-level `meta` object, when the response carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl<D> Envelope<D> {
    /// Compose an envelope from a raw response body and extracted data.
    pub(crate) fn compose(raw: &Value, data: D) -> Self {
        Self {
            data,
            links: raw.get("links").cloned(),
            meta: raw.get("meta").cloned(),
        }
    }
}
