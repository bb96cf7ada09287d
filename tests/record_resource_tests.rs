//! Integration tests for the Record resource.
//!
//! These tests verify the request each endpoint method puts on the wire:
//! method, path, query suffix, and body. The mock server stands in for the
//! Tape API.

use serde_json::json;
use tape_api::{
    ApiDomain, ApiError, BearerAuthorization, Client, RequestOptions, TapeConfig, UserKey,
    ValidationError,
};
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    let config = TapeConfig::builder()
        .domain(ApiDomain::new(server.uri()).unwrap())
        .build();
    let auth = BearerAuthorization::new(UserKey::new("test-key").unwrap());
    Client::authorizing(&config, auth)
}

// ============================================================================
// Find
// ============================================================================

#[tokio::test]
async fn test_find_issues_get_with_sanitized_id() {
    let server = MockServer::start().await;
    let record_id = 9_590_591;

    Mock::given(method("GET"))
        .and(path("/v1/record/9590591"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"record_id": record_id})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).record().find(record_id).await.unwrap();
    assert_eq!(result["record_id"], record_id);
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_posts_payload_without_query_suffix() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/record/app/1234"))
        .and(body_json(json!({"fields": {"title": "Title"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"record_id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .record()
        .create(
            1234,
            &json!({"fields": {"title": "Title"}}),
            RequestOptions::new(),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_create_encodes_non_default_flags() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/record/app/1234"))
        .and(query_param("silent", "true"))
        .and(query_param("hook", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"record_id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .record()
        .create(
            1234,
            &json!({"fields": {"title": "Title"}}),
            RequestOptions::new().silent(true).hook(false),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_rejects_non_object_payload_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let error = client_for(&server)
        .record()
        .create(1234, &json!("not a mapping"), RequestOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ApiError::Validation(ValidationError::NotAnObject { .. })
    ));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_puts_payload_to_record_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/record/42"))
        .and(body_json(json!({"fields": {"title": "Title 2"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"record_id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .record()
        .update(
            42,
            &json!({"fields": {"title": "Title 2"}}),
            RequestOptions::new(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_rejects_non_object_payload() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let error = client_for(&server)
        .record()
        .update(42, &json!([1, 2, 3]), RequestOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::Validation(_)));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_discards_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/record/555"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"deleted": true, "extra": "junk"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .record()
        .delete(555, RequestOptions::new())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_delete_resolves_even_with_non_json_response() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/record/555"))
        .respond_with(ResponseTemplate::new(200).set_body_string("gone"))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .record()
        .delete(555, RequestOptions::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_forwards_skip_trash_as_extra() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/record/555"))
        .and(query_param("skip_trash", "true"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .record()
        .delete(555, RequestOptions::new().param("skip_trash", true))
        .await
        .unwrap();
}

// ============================================================================
// Restore
// ============================================================================

#[tokio::test]
async fn test_restore_posts_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/record/555/restore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"record_id": 555})))
        .expect(1)
        .mount(&server)
        .await;

    let restored = client_for(&server)
        .record()
        .restore(555, RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(restored["record_id"], 555);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_restore_forwards_silent_flag() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/record/555/restore"))
        .and(query_param("silent", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"record_id": 555})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .record()
        .restore(555, RequestOptions::new().silent(true))
        .await
        .unwrap();
}

// ============================================================================
// Filter
// ============================================================================

#[tokio::test]
async fn test_filter_posts_payload_with_encoded_options() {
    let server = MockServer::start().await;
    let filter_payload = json!({
        "filters": [
            {
                "field_id": "192075",
                "field_type": "single_text",
                "match_type": "contains",
                "values": [{"value": "Value"}],
                "type": "text"
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1/record/filter/app/1234"))
        .and(query_param("limit", "2"))
        .and(query_param("sort_desc", "true"))
        .and(body_json(filter_payload.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .record()
        .filter(
            1234,
            &filter_payload,
            RequestOptions::new().param("limit", 2).param("sort_desc", true),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_filter_rejects_non_object_payload() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let error = client_for(&server)
        .record()
        .filter(1234, &json!("bad"), RequestOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_filter_by_view_issues_get_with_options() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/record/view/8877"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .record()
        .filter_by_view(8877, RequestOptions::new().param("limit", 10))
        .await
        .unwrap();
}

// ============================================================================
// Failure Propagation
// ============================================================================

#[tokio::test]
async fn test_transport_failure_surfaces_as_failed_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/record/1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "forbidden"})))
        .mount(&server)
        .await;

    let error = client_for(&server).record().find(1).await.unwrap_err();

    match error {
        ApiError::Failed(failed) => {
            let message = failed.cause().to_string();
            assert!(message.contains("403"));
            assert!(message.contains("forbidden"));
        }
        ApiError::Validation(_) => panic!("expected a failed request"),
    }
}
