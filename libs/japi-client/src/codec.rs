//! Collaborator seams for document parsing and entity serialization.
//!
//! The resource client never interprets JSON:API documents itself: compound
//! document handling (`included` side-tables, relationship graphs, circular
//! references) lives entirely behind [`Deserializer`], and the wire shape of
//! an outgoing entity behind [`EntitySerializer`].

use crate::error::Error;
use crate::item::ResourceItem;
use serde_json::Value;

/// One consumed JSON:API document, ready for root extraction.
///
/// Returned by [`Deserializer::consume`]. The two extraction methods match
/// the two document shapes: a singular primary resource and a collection.
pub trait Consumption<T> {
    /// Extract the document's primary resource as a single entity.
    ///
    /// # Errors
    ///
    /// Returns whatever error the implementation maps a malformed or
    /// missing primary resource to, typically [`Error::Deserialize`].
    fn root_item(&self) -> Result<T, Error>;

    /// Extract the document's primary resources as a collection.
    ///
    /// # Errors
    ///
    /// Returns whatever error the implementation maps a malformed or
    /// missing primary collection to, typically [`Error::Deserialize`].
    fn root_items(&self) -> Result<Vec<T>, Error>;
}

/// Parses raw JSON:API documents into typed entities.
///
/// The full raw body is handed over, including any `included` side-table, so
/// implementations can resolve relationship graphs however they see fit. The
/// client treats the result as opaque and only calls the two extraction
/// methods on it.
pub trait Deserializer<T>: Send + Sync {
    /// Consume a raw document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialize`] (or an implementation-mapped error)
    /// when the document cannot be consumed.
    fn consume(&self, raw: &Value) -> Result<Box<dyn Consumption<T>>, Error>;
}

/// Serializes a typed entity into a resource object for write requests.
pub trait EntitySerializer<T>: Send + Sync {
    /// Render `entity` as the resource item to send as `{ "data": <item> }`.
    fn serialize(&self, entity: &T) -> ResourceItem;
}
