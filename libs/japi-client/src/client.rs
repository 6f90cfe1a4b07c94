use crate::codec::{Deserializer, EntitySerializer};
use crate::envelope::Envelope;
use crate::error::Error;
use crate::item::ResourceItem;
use crate::transport::Transport;
use japi_query::{Query, build_request_url, include_suffix};
use serde_json::Value;
use std::sync::Arc;

/// Typed client for a single JSON:API resource route.
///
/// Binds a [`Transport`], a base route, a [`Deserializer`] and an optional
/// [`EntitySerializer`] into the five resource operations. The client holds
/// no per-request state: every operation is a pure function of its arguments
/// and the injected collaborators, so one client can serve concurrent calls
/// and clones share the same collaborators.
///
/// `find` runs its URL through the full query encoder; the entity-scoped
/// operations append at most a verbatim include suffix. The two URL paths
/// are distinct by contract: servers parse the narrower entity-scoped
/// surface literally, so it must not be routed through the full encoder.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use japi_client::{Query, ResourceClient};
///
/// let articles: ResourceClient<Article> = ResourceClient::new(
///     Arc::new(transport),
///     "/articles",
///     Arc::new(article_deserializer),
/// )
/// .with_serializer(Arc::new(article_serializer));
///
/// let open = articles
///     .find(&Query::new().with_filter("status", "open"), &["author"])
///     .await?;
/// ```
pub struct ResourceClient<T> {
    transport: Arc<dyn Transport>,
    route: String,
    deserializer: Arc<dyn Deserializer<T>>,
    serializer: Option<Arc<dyn EntitySerializer<T>>>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            route: self.route.clone(),
            deserializer: Arc::clone(&self.deserializer),
            serializer: self.serializer.clone(),
        }
    }
}

/// Wrap a resource item as the `{ "data": <item> }` request document.
fn document_body(item: &ResourceItem) -> Result<Value, Error> {
    let mut body = serde_json::Map::new();
    body.insert("data".to_owned(), serde_json::to_value(item)?);
    Ok(Value::Object(body))
}

impl<T> ResourceClient<T> {
    /// Create a read-only client for `route`.
    ///
    /// Write operations ([`create_one`](Self::create_one),
    /// [`update_one`](Self::update_one)) additionally need an entity
    /// serializer, supplied via [`with_serializer`](Self::with_serializer).
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        route: impl Into<String>,
        deserializer: Arc<dyn Deserializer<T>>,
    ) -> Self {
        Self {
            transport,
            route: route.into(),
            deserializer,
            serializer: None,
        }
    }

    /// Attach the entity serializer that write operations require.
    #[must_use]
    pub fn with_serializer(mut self, serializer: Arc<dyn EntitySerializer<T>>) -> Self {
        self.serializer = Some(serializer);
        self
    }

    /// The base route this client is bound to.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Fetch a collection.
    ///
    /// The URL is built from `query` and `includes` via the full query
    /// encoder. The envelope's `data` is always a collection, even for zero
    /// or one result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] unmodified on transport failure,
    /// [`Error::Json`] for a malformed body, and the deserializer's error
    /// when root extraction fails.
    pub async fn find(&self, query: &Query, includes: &[&str]) -> Result<Envelope<Vec<T>>, Error> {
        let url = build_request_url(&self.route, query, includes);
        tracing::debug!(url = %url, "fetching collection");

        let response = self.transport.get(&url).await?;
        let raw = response.json().await?;
        let items = self.deserializer.consume(&raw)?.root_items()?;
        Ok(Envelope::compose(&raw, items))
    }

    /// Fetch a single entity by id.
    ///
    /// The URL is `<route>/<id>`, plus `?include=<comma-joined>` when
    /// `includes` is non-empty.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`find`](Self::find).
    pub async fn find_one(&self, id: &str, includes: &[&str]) -> Result<Envelope<T>, Error> {
        let url = format!("{}/{id}{}", self.route, include_suffix(includes));
        tracing::debug!(url = %url, "fetching entity");

        let response = self.transport.get(&url).await?;
        let raw = response.json().await?;
        self.consume_root_item(&raw)
    }

    /// Create an entity.
    ///
    /// Serializes `entity` and POSTs `{ "data": <item> }` to the route.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializerMissing`] before any request is issued if
    /// the client was built without a serializer; otherwise the same failure
    /// surface as [`find`](Self::find).
    pub async fn create_one(&self, entity: &T, includes: &[&str]) -> Result<Envelope<T>, Error> {
        let serializer = self.require_serializer("create_one")?;
        let item = serializer.serialize(entity);
        let url = format!("{}{}", self.route, include_suffix(includes));
        let body = document_body(&item)?;
        tracing::debug!(url = %url, kind = %item.kind, "creating entity");

        let response = self.transport.post(&url, &body).await?;
        let raw = response.json().await?;
        self.consume_root_item(&raw)
    }

    /// Update an entity.
    ///
    /// The target id is taken from the serialized item; a missing id yields
    /// the empty string (the request then targets `<route>/`, unvalidated).
    /// PATCHes `{ "data": <item> }` to `<route>/<id>`.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`create_one`](Self::create_one).
    pub async fn update_one(&self, entity: &T, includes: &[&str]) -> Result<Envelope<T>, Error> {
        let serializer = self.require_serializer("update_one")?;
        let item = serializer.serialize(entity);
        let id = item.id.as_deref().unwrap_or_default();
        let url = format!("{}/{id}{}", self.route, include_suffix(includes));
        let body = document_body(&item)?;
        tracing::debug!(url = %url, kind = %item.kind, "updating entity");

        let response = self.transport.patch(&url, &body).await?;
        let raw = response.json().await?;
        self.consume_root_item(&raw)
    }

    /// Delete an entity by id.
    ///
    /// Does not parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] unmodified on transport failure and
    /// [`Error::DeleteRejected`] when the server answers with a non-success
    /// status.
    pub async fn delete_one(&self, id: &str) -> Result<(), Error> {
        let url = format!("{}/{id}", self.route);
        tracing::debug!(url = %url, "deleting entity");

        let response = self.transport.delete(&url).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(Error::DeleteRejected)
        }
    }

    fn require_serializer(
        &self,
        operation: &'static str,
    ) -> Result<&dyn EntitySerializer<T>, Error> {
        self.serializer
            .as_deref()
            .ok_or(Error::SerializerMissing { operation })
    }

    /// Singular-envelope composition shared by `find_one`, `create_one` and
    /// `update_one`.
    fn consume_root_item(&self, raw: &Value) -> Result<Envelope<T>, Error> {
        let item = self.deserializer.consume(raw)?.root_item()?;
        Ok(Envelope::compose(raw, item))
    }
}
