//! Canonical JSON:API query-string encoding.
//!
//! Segments are emitted in a fixed order so the same parameters always
//! produce the same bytes: filters, sparse fieldsets, page number, page
//! size, sort, include. Servers parse this string literally, so the exact
//! byte shape is part of the wire contract.
//!
//! Two encoding asymmetries are part of that contract and must not be
//! "fixed":
//!
//! - Filter values are emitted verbatim, without percent-encoding, while
//!   fieldset, sort and include values are component-encoded. Consumers
//!   already depend on literal filter values reaching the server unescaped.
//! - [`include_suffix`] (used for entity-scoped requests) joins include
//!   paths verbatim, while [`build_request_url`]'s include segment is
//!   component-encoded.

use crate::Query;

/// Encode `query` and `includes` onto `route` as a JSON:API request URL.
///
/// Returns the bare route when no segment is produced (no trailing `?`).
///
/// # Example
///
/// ```rust
/// use japi_query::{Query, build_request_url};
///
/// let query = Query::new().with_filter("status", "open").with_limit(10);
/// assert_eq!(
///     build_request_url("/articles", &query, &[]),
///     "/articles?filter[status]=open&page[size]=10"
/// );
/// assert_eq!(build_request_url("/articles", &Query::new(), &[]), "/articles");
/// ```
#[must_use]
pub fn build_request_url(route: &str, query: &Query, includes: &[&str]) -> String {
    let mut segments: Vec<String> = Vec::new();

    for (key, value) in &query.filters {
        // Filter values stay unencoded, see module docs.
        segments.push(format!("filter[{key}]={value}"));
    }
    for (resource_type, field_names) in &query.fields {
        let field_list = field_names.join(",");
        let joined = urlencoding::encode(&field_list);
        segments.push(format!("fields[{resource_type}]={joined}"));
    }
    if let Some(page) = query.page {
        segments.push(format!("page[number]={page}"));
    }
    if let Some(limit) = query.limit {
        // A zero limit means "no limit requested" on the wire.
        if limit != 0 {
            segments.push(format!("page[size]={limit}"));
        }
    }
    if let Some(sort) = &query.sort {
        let sort_list = sort.join(",");
        let joined = urlencoding::encode(&sort_list);
        segments.push(format!("sort={joined}"));
    }
    if !includes.is_empty() {
        let include_list = includes.join(",");
        let joined = urlencoding::encode(&include_list);
        segments.push(format!("include={joined}"));
    }

    if segments.is_empty() {
        return route.to_owned();
    }

    format!("{route}?{}", segments.join("&"))
}

/// Build the include-only query suffix for entity-scoped requests.
///
/// Returns `""` for an empty list, otherwise `?include=<comma-joined>` with
/// the paths joined verbatim, not component-encoded: entity-scoped requests
/// bypass the full encoder. See the module docs.
#[must_use]
pub fn include_suffix(includes: &[&str]) -> String {
    if includes.is_empty() {
        return String::new();
    }

    format!("?include={}", includes.join(","))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_route_unchanged() {
        let url = build_request_url("/articles", &Query::new(), &[]);
        assert_eq!(url, "/articles");
    }

    #[test]
    fn test_filters_one_segment_per_key_unencoded() {
        let query = Query::new()
            .with_filter("status", "open or closed")
            .with_filter("title", "a,b");

        let url = build_request_url("/articles", &query, &[]);
        assert_eq!(url, "/articles?filter[status]=open or closed&filter[title]=a,b");
    }

    #[test]
    fn test_filters_precede_fields() {
        let query = Query::new()
            .with_fields("articles", ["title", "body"])
            .with_filter("status", "open");

        let url = build_request_url("/articles", &query, &[]);
        assert_eq!(
            url,
            "/articles?filter[status]=open&fields[articles]=title%2Cbody"
        );
    }

    #[test]
    fn test_fields_are_comma_joined_and_encoded() {
        let query = Query::new().with_fields("people", ["firstName", "lastName"]);

        let url = build_request_url("/people", &query, &[]);
        assert_eq!(url, "/people?fields[people]=firstName%2ClastName");
    }

    #[test]
    fn test_page_number_present() {
        let query = Query::new().with_page(3);
        assert_eq!(
            build_request_url("/articles", &query, &[]),
            "/articles?page[number]=3"
        );
    }

    #[test]
    fn test_absent_page_emits_nothing() {
        let query = Query::new().with_limit(10);
        assert_eq!(
            build_request_url("/articles", &query, &[]),
            "/articles?page[size]=10"
        );
    }

    #[test]
    fn test_zero_limit_emits_no_page_size() {
        let query = Query::new().with_limit(0);
        assert_eq!(build_request_url("/articles", &query, &[]), "/articles");
    }

    #[test]
    fn test_positive_limit_emits_exactly_one_page_size() {
        let query = Query::new().with_limit(25);
        let url = build_request_url("/articles", &query, &[]);
        assert_eq!(url.matches("page[size]").count(), 1);
        assert_eq!(url, "/articles?page[size]=25");
    }

    #[test]
    fn test_sort_keys_comma_joined_and_encoded() {
        let query = Query::new().with_sort(["-created", "title"]);
        assert_eq!(
            build_request_url("/articles", &query, &[]),
            "/articles?sort=-created%2Ctitle"
        );
    }

    #[test]
    fn test_empty_sort_still_emits_segment() {
        let query = Query::new().with_sort(Vec::<String>::new());
        assert_eq!(build_request_url("/articles", &query, &[]), "/articles?sort=");
    }

    #[test]
    fn test_include_is_last_segment_and_encoded() {
        let query = Query::new().with_sort(["title"]).with_page(1);
        let url = build_request_url("/articles", &query, &["author", "comments.author"]);
        assert_eq!(
            url,
            "/articles?page[number]=1&sort=title&include=author%2Ccomments.author"
        );
        assert!(url.ends_with("include=author%2Ccomments.author"));
    }

    #[test]
    fn test_includes_alone_produce_query_string() {
        let url = build_request_url("/articles", &Query::new(), &["author"]);
        assert_eq!(url, "/articles?include=author");
    }

    #[test]
    fn test_full_segment_order() {
        let query = Query::new()
            .with_sort(["title"])
            .with_page(2)
            .with_limit(10)
            .with_fields("articles", ["title"])
            .with_filter("status", "open");

        let url = build_request_url("/articles", &query, &["author"]);
        assert_eq!(
            url,
            "/articles?filter[status]=open&fields[articles]=title&page[number]=2&page[size]=10&sort=title&include=author"
        );
    }

    #[test]
    fn test_article_listing_scenario() {
        let query = Query::new()
            .with_filter("status", "open")
            .with_limit(10)
            .with_sort(["title"]);

        let url = build_request_url("/articles", &query, &["author", "comments"]);
        assert_eq!(
            url,
            "/articles?filter[status]=open&page[size]=10&sort=title&include=author%2Ccomments"
        );
    }

    #[test]
    fn test_include_suffix_empty() {
        assert_eq!(include_suffix(&[]), "");
    }

    #[test]
    fn test_include_suffix_joins_verbatim() {
        assert_eq!(
            include_suffix(&["author", "comments.author"]),
            "?include=author,comments.author"
        );
    }
}
