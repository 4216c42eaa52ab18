use crate::helpers::{TEST_AUTH_HEADER, client_for};

use web_extract_data::{ScrapeFields, SearchRequest};

use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies a scrape result is returned exactly as the service sent it.
///
/// **WHY THIS MATTERS**: The result schema is whatever the caller's field descriptions
/// asked for. Any reshaping breaks callers that index into `scrape`.
///
/// **BUG THIS CATCHES**: Would catch if the client unwraps, filters, or coerces the body,
/// or if the request shape, path, or auth header drift.
#[tokio::test]
async fn given_successful_scrape_when_called_then_returns_body_unchanged() {
    // GIVEN: A service that expects {url, fields} with bearer auth
    let server = MockServer::start().await;
    let response = json!({"scrape": {"price": 199.99}});
    Mock::given(method("POST"))
        .and(path("/api/scrape/"))
        .and(header("authorization", TEST_AUTH_HEADER))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "url": "https://example.com/monitor",
            "fields": {"price": "< Numeric price (integer or float). >"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut fields = ScrapeFields::new();
    fields.insert(
        "price".into(),
        json!("< Numeric price (integer or float). >"),
    );

    // WHEN: Scraping
    let result = client
        .scrape("https://example.com/monitor", fields)
        .await
        .unwrap();

    // THEN: Body is returned verbatim
    assert_eq!(Value::Object(result), response);
}

/// **VALUE**: Verifies a query-only search transmits the default domain and page.
///
/// **WHY THIS MATTERS**: The service requires all three keys in the payload.
///
/// **BUG THIS CATCHES**: Would catch if `None` overrides serialize as null or are omitted.
#[tokio::test]
async fn given_query_only_when_searching_then_payload_contains_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search/"))
        .and(body_json(json!({
            "query": "ultrawide monitors",
            "google_domain": "www.google.com",
            "page": 1
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"search": ["https://a.example"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let result = client
        .search("ultrawide monitors", None, None)
        .await
        .unwrap();

    assert_eq!(result["search"], json!(["https://a.example"]));
}

#[tokio::test]
async fn given_search_overrides_when_searching_then_payload_uses_them() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search/"))
        .and(body_json(json!({
            "query": "monitors",
            "google_domain": "www.google.com.au",
            "page": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"search": []})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);

    client
        .search("monitors", Some("www.google.com.au"), Some(2))
        .await
        .unwrap();
    let request = SearchRequest::new("monitors")
        .with_google_domain("www.google.com.au")
        .with_page(2);
    client.execute(&request).await.unwrap();
}

#[tokio::test]
async fn given_links_request_when_called_then_posts_url_and_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/links/"))
        .and(header("authorization", TEST_AUTH_HEADER))
        .and(body_json(json!({
            "url": "https://example.com/catalog",
            "description": "links to individual product pages"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"links": ["https://example.com/p/1"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let result = client
        .links(
            "https://example.com/catalog",
            "links to individual product pages",
        )
        .await
        .unwrap();

    assert_eq!(result["links"][0], "https://example.com/p/1");
}

#[tokio::test]
async fn given_next_request_when_called_then_posts_url_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/next/"))
        .and(body_json(json!({"url": "https://example.com/catalog?page=1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"next": ["https://example.com/catalog?page=2"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let result = client
        .next("https://example.com/catalog?page=1")
        .await
        .unwrap();

    assert_eq!(result["next"], json!(["https://example.com/catalog?page=2"]));
}

/// **VALUE**: Verifies one client can serve concurrent calls.
///
/// **WHY THIS MATTERS**: The client holds no per-call state, so callers share it across tasks.
///
/// **BUG THIS CATCHES**: Would catch interior state that makes calls interfere.
#[tokio::test]
async fn given_shared_client_when_called_concurrently_then_all_calls_succeed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/next/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"next": []})))
        .expect(4)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let mut handles = Vec::new();
    for page in 0..4 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .next(&format!("https://example.com/?page={page}"))
                .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}
