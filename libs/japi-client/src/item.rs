use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire-level representation of a single resource object.
///
/// Produced by an [`EntitySerializer`](crate::EntitySerializer) when sending
/// and consumed by servers as `{ "data": <item> }`. The `id` is serialized
/// even when `None` (JSON `null`), since a nullable id is part of the shape;
/// `attributes` and `relationships` are omitted entirely when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceItem {
    /// Resource type, e.g. `"articles"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Resource id; `None` for resources the server has not assigned one yet.
    pub id: Option<String>,

    /// Attribute map, when the item carries attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,

    /// Relationship map, when the item carries relationships.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Map<String, Value>>,
}

impl ResourceItem {
    /// Create an item with the given type and id and no attributes or
    /// relationships.
    #[must_use]
    pub fn new(kind: impl Into<String>, id: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            id,
            attributes: None,
            relationships: None,
        }
    }
}
