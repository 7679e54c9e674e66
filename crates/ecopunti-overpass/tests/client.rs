//! Integration tests for `OverpassClient` using wiremock HTTP mocks.

use ecopunti_overpass::{ElementKind, OverpassClient, OverpassError};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(endpoint: &str) -> OverpassClient {
    OverpassClient::new(endpoint, 30, "ecopunti-test/0.1", 2, 0)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_elements_parses_mixed_geometries() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "version": 0.6,
        "generator": "Overpass API",
        "elements": [
            {
                "type": "node",
                "id": 100,
                "lat": 45.4687,
                "lon": 9.19,
                "tags": {"amenity": "recycling", "recycling:glass": "yes"}
            },
            {
                "type": "way",
                "id": 200,
                "center": {"lat": 45.47, "lon": 9.2},
                "tags": {"recycling_type": "centre"}
            },
            {
                "type": "relation",
                "id": 300,
                "bounds": {"minlat": 45.4, "maxlat": 45.5, "minlon": 9.1, "maxlon": 9.3},
                "tags": {"waste": "disposal"}
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/interpreter"))
        .and(body_string_contains("data="))
        .and(body_string_contains("out%3Ajson"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/interpreter", server.uri()));
    let elements = client
        .fetch_elements("[out:json][timeout:25];(node[\"amenity\"=\"recycling\"](around:5000,45.464200,9.190000););out body center;")
        .await
        .expect("should parse elements");

    assert_eq!(elements.len(), 3);
    assert_eq!(elements[0].kind, ElementKind::Node);
    assert_eq!(elements[0].id, 100);
    assert_eq!(elements[1].kind, ElementKind::Way);
    assert!(elements[1].center.is_some());
    assert_eq!(elements[2].kind, ElementKind::Relation);
    assert!(elements[2].bounds.is_some());
}

#[tokio::test]
async fn empty_elements_array_yields_empty_vec() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"elements": []})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let elements = client.fetch_elements("query").await.expect("should parse");
    assert!(elements.is_empty());
}

#[tokio::test]
async fn rate_limit_is_retried_then_succeeds() {
    let server = MockServer::start().await;

    // First attempt is shed with a 429; the mock is consumed after one hit.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "elements": [
                {"type": "node", "id": 1, "lat": 1.0, "lon": 2.0, "tags": {}}
            ]
        })))
        .with_priority(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let elements = client
        .fetch_elements("query")
        .await
        .expect("should succeed after retry");
    assert_eq!(elements.len(), 1);
}

#[tokio::test]
async fn unexpected_status_is_surfaced_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("parse error"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_elements("query").await;
    assert!(
        matches!(result, Err(OverpassError::UnexpectedStatus { status: 400, .. })),
        "expected UnexpectedStatus(400), got: {result:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_elements("query").await;
    assert!(
        matches!(result, Err(OverpassError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}
