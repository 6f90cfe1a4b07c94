#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! # `japi-client` - generic JSON:API resource client
//!
//! This crate binds three injected collaborators into a typed client for one
//! JSON:API resource route:
//!
//! - a [`Transport`] carrying the HTTP verbs (and everything HTTP-specific:
//!   auth, retries, TLS),
//! - a [`Deserializer`] turning raw compound documents into typed entities,
//! - an optional [`EntitySerializer`] turning entities back into resource
//!   objects for writes.
//!
//! The client itself stays free of JSON:API parsing: it builds URLs (via
//! [`japi_query`]), dispatches requests, and composes [`Envelope`] values
//! from the raw body plus the deserializer's output.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use japi_client::{Query, ResourceClient};
//!
//! let articles: ResourceClient<Article> = ResourceClient::new(
//!     Arc::new(transport),
//!     "/articles",
//!     Arc::new(article_deserializer),
//! );
//!
//! // GET /articles?filter[status]=open&page[size]=10&include=author
//! let envelope = articles
//!     .find(
//!         &Query::new().with_filter("status", "open").with_limit(10),
//!         &["author"],
//!     )
//!     .await?;
//!
//! for article in &envelope.data {
//!     println!("{}", article.title);
//! }
//! ```

mod client;
mod codec;
mod envelope;
mod error;
mod item;
mod transport;

pub use client::ResourceClient;
pub use codec::{Consumption, Deserializer, EntitySerializer};
pub use envelope::Envelope;
pub use error::{BoxError, Error};
pub use item::ResourceItem;
pub use transport::{Transport, TransportResponse};

// Re-export the query surface so callers need only one crate.
pub use japi_query::{Query, build_request_url, include_suffix};
