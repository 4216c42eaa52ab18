use crate::{DEFAULT_GOOGLE_DOMAIN, DEFAULT_SEARCH_PAGE, SearchRequest};

use serde_json::json;

/// **VALUE**: Verifies a query-only search carries the service defaults.
///
/// **WHY THIS MATTERS**: The service requires all three keys. Callers that only
/// pass a query must still send `google_domain` and `page`.
///
/// **BUG THIS CATCHES**: Would catch if the defaults drift or a field gets
/// `skip_serializing_if` and disappears from the body.
#[test]
fn given_query_only_when_serialized_then_contains_default_domain_and_page() {
    // GIVEN: A search request with only a query
    let request = SearchRequest::new("best ultrawide monitors");

    // WHEN: Serializing
    let body = serde_json::to_value(&request).unwrap();

    // THEN: Defaults are present
    assert_eq!(
        body,
        json!({
            "query": "best ultrawide monitors",
            "google_domain": "www.google.com",
            "page": 1
        })
    );
    assert_eq!(DEFAULT_GOOGLE_DOMAIN, "www.google.com");
    assert_eq!(DEFAULT_SEARCH_PAGE, 1);
}

/// **VALUE**: Verifies builder overrides replace the defaults.
///
/// **WHY THIS MATTERS**: Regional searches (google.com.au) and pagination depend on it.
///
/// **BUG THIS CATCHES**: Would catch if a `with_*` method writes the wrong field.
#[test]
fn given_overrides_when_building_search_then_uses_supplied_values() {
    let request = SearchRequest::new("ultrawide")
        .with_google_domain("www.google.com.au")
        .with_page(3);

    assert_eq!(request.query, "ultrawide");
    assert_eq!(request.google_domain, "www.google.com.au");
    assert_eq!(request.page, 3);
}
