#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! # `japi-query` - JSON:API query parameters and query-string encoding
//!
//! This crate models the query-parameter surface of a JSON:API collection
//! request and encodes it into the canonical query-string form servers parse:
//! `filter[...]`, `fields[...]`, `page[number]`, `page[size]`, `sort` and
//! `include` segments, emitted in a fixed order so the output is byte-stable.
//!
//! # Example
//!
//! ```rust
//! use japi_query::{Query, build_request_url};
//!
//! let query = Query::new()
//!     .with_filter("status", "open")
//!     .with_limit(10)
//!     .with_sort(["title"]);
//!
//! let url = build_request_url("/articles", &query, &["author", "comments"]);
//! assert_eq!(
//!     url,
//!     "/articles?filter[status]=open&page[size]=10&sort=title&include=author%2Ccomments"
//! );
//! ```

pub mod encode;

pub use encode::{build_request_url, include_suffix};

/// Query parameters for a JSON:API collection request.
///
/// All fields are optional; an all-default `Query` encodes to nothing. Fields
/// are public so callers that already hold structured parameters can build
/// the value directly; the `with_*` methods cover the common fluent path.
///
/// Filter and sparse-fieldset entries keep insertion order, which is also
/// their emission order in the encoded query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Query {
    /// `filter[<key>]=<value>` entries, one per key.
    pub filters: Vec<(String, String)>,
    /// `fields[<type>]=<names>` entries: resource type to field-name list.
    pub fields: Vec<(String, Vec<String>)>,
    /// Page number for `page[number]`.
    pub page: Option<u64>,
    /// Page size for `page[size]`. A limit of `0` encodes to nothing.
    pub limit: Option<u64>,
    /// Sort keys for `sort`, passed through verbatim (callers supply any
    /// `-` descending prefix themselves). `Some(vec![])` still emits an
    /// empty `sort=` segment; `None` emits none.
    pub sort: Option<Vec<String>>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter value for `key`, replacing any existing entry for it.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.filters.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.filters.push((key, value));
        }
        self
    }

    /// Set the sparse fieldset for `resource_type`, replacing any existing
    /// entry for it.
    pub fn with_fields<I>(mut self, resource_type: impl Into<String>, field_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let resource_type = resource_type.into();
        let names: Vec<String> = field_names.into_iter().map(Into::into).collect();
        if let Some(entry) = self.fields.iter_mut().find(|(t, _)| *t == resource_type) {
            entry.1 = names;
        } else {
            self.fields.push((resource_type, names));
        }
        self
    }

    /// Set the page number.
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the sort keys. Setting an empty sequence is meaningful: it emits
    /// an empty `sort=` segment, distinct from not sorting at all.
    pub fn with_sort<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.sort = Some(keys.into_iter().map(Into::into).collect());
        self
    }
}
