//! Integration tests for the HTTP dispatcher.
//!
//! These tests run `HttpClient::dispatch` against a wiremock server and
//! verify headers, retry behavior, error mapping and body encoding.

use std::time::{Duration, Instant};

use moysklad_api::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use moysklad_api::MoySkladConfig;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a dispatcher for `server` with login "a" / password "b".
fn client_for(server: &MockServer, retry_count: u32, debug: bool) -> HttpClient {
    let config = MoySkladConfig::builder()
        .login("a")
        .password("b")
        .base_url(server.uri())
        .auto_retry_count(retry_count)
        .auto_retry_delay(0.0)
        .debug(debug)
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn test_sends_auth_and_encoding_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .and(header("Authorization", "Basic YTpi"))
        .and(header("Accept-Encoding", "gzip"))
        .and(header("Accept", "application/json;charset=utf-8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1, false);
    let request = HttpRequest::builder(HttpMethod::Get, "entity/product").build();

    let body = assert_ok!(client.dispatch(request).await);
    assert_eq!(body, json!({"rows": []}));
}

#[tokio::test]
async fn test_user_agent_carries_prefix() {
    let server = MockServer::start().await;
    let expected = format!(
        "my-app | MoySklad API Rust SDK v{}",
        moysklad_api::clients::SDK_VERSION
    );
    Mock::given(method("GET"))
        .and(header("User-Agent", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = MoySkladConfig::builder()
        .api_token("YTpi")
        .base_url(server.uri())
        .user_agent_prefix("my-app")
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    assert_ok!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/store").build())
            .await
    );
}

#[tokio::test]
async fn test_body_sets_content_type_and_query_is_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/entity/store"))
        .and(header("Content-Type", "application/json"))
        .and(query_param("expand", "parent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "s-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1, false);
    let request = HttpRequest::builder(HttpMethod::Post, "entity/store")
        .body(json!({"name": "Склад"}))
        .query_param("expand", "parent")
        .build();

    let body = assert_ok!(client.dispatch(request).await);
    assert_eq!(body["id"], "s-1");
}

#[tokio::test]
async fn test_extra_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Accept", "application/vnd.ms-excel"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![1_u8, 2, 3], "application/vnd.ms-excel"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1, false);
    let request = HttpRequest::builder(HttpMethod::Get, "report/export")
        .header("Accept", "application/vnd.ms-excel")
        .allow_non_json(true)
        .build();

    let body = assert_ok!(client.dispatch(request).await);
    assert_eq!(body, json!({}));
}

// ============================================================================
// Body encoding
// ============================================================================

#[tokio::test]
async fn test_compact_body_without_debug() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(body_string(r#"{"name":"x"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1, false);
    let request = HttpRequest::builder(HttpMethod::Put, "entity/product/p-1")
        .body(json!({"name": "x"}))
        .build();

    assert_ok!(client.dispatch(request).await);
}

#[tokio::test]
async fn test_pretty_body_with_debug() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(body_string("{\n    \"name\": \"x\"\n}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1, true);
    let request = HttpRequest::builder(HttpMethod::Put, "entity/product/p-1")
        .body(json!({"name": "x"}))
        .build();

    assert_ok!(client.dispatch(request).await);
}

// ============================================================================
// Retry behavior
// ============================================================================

#[tokio::test]
async fn test_server_error_exhausts_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(json!({"errors": [{"error": "Сервис недоступен", "code": 1000}]})),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server, 3, false);
    let result = client
        .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product").build())
        .await;

    let err = assert_err!(result);
    let api = err.as_api_error().expect("api error");
    assert_eq!(api.status, 503);
    assert_eq!(api.error, json!([{"error": "Сервис недоступен", "code": 1000}]));
    assert_eq!(api.message(), "Сервис недоступен");
}

#[tokio::test]
async fn test_server_error_then_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"errors": []})))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": [1, 2]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 3, false);
    let body = assert_ok!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product").build())
            .await
    );
    assert_eq!(body, json!({"rows": [1, 2]}));
}

#[tokio::test]
async fn test_server_error_without_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1, false);
    let err = assert_err!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product").build())
            .await
    );
    let api = err.as_api_error().expect("api error");
    assert_eq!(api.error, json!({"error": "Server returned 502"}));
}

#[tokio::test]
async fn test_zero_retry_count_still_sends_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 0, false);
    assert_err!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product").build())
            .await
    );
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(412).set_body_json(json!({
            "errors": [
                {
                    "error": "Ошибка сохранения объекта: поле 'name' не может быть пустым",
                    "code": 3000,
                    "parameter": "name",
                    "moreInfo": "https://dev.moysklad.ru/doc/api/remap/1.2/#error_3000"
                },
                {"error": "second"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 5, false);
    let request = HttpRequest::builder(HttpMethod::Post, "entity/product")
        .body(json!({"name": ""}))
        .build();

    let err = assert_err!(client.dispatch(request).await);
    let api = err.as_api_error().expect("api error");
    assert_eq!(api.status, 412);
    assert_eq!(api.code(), Some(3000));
    assert_eq!(api.parameter(), Some("name"));
    assert_eq!(
        api.more_info(),
        Some("https://dev.moysklad.ru/doc/api/remap/1.2/#error_3000")
    );
    assert_eq!(api.request_body.as_deref(), Some(r#"{"name":""}"#));
}

#[tokio::test]
async fn test_client_error_without_errors_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 3, false);
    let err = assert_err!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product/none").build())
            .await
    );
    let api = err.as_api_error().expect("api error");
    assert_eq!(api.status, 404);
    assert_eq!(api.message(), "Server returned 404");
}

#[tokio::test]
async fn test_timeout_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let config = MoySkladConfig::builder()
        .api_token("YTpi")
        .base_url(server.uri())
        .auto_retry_count(2)
        .auto_retry_delay(0.0)
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let err = assert_err!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product").build())
            .await
    );
    match err {
        HttpError::Network(e) => assert!(e.is_timeout()),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let config = MoySkladConfig::builder()
        .api_token("YTpi")
        .base_url("http://127.0.0.1:1")
        .auto_retry_count(2)
        .auto_retry_delay(0.0)
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let err = assert_err!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product").build())
            .await
    );
    match err {
        HttpError::Network(e) => assert!(e.is_connect()),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_single_attempt_returns_connect_error_unchanged() {
    let config = MoySkladConfig::builder()
        .api_token("YTpi")
        .base_url("http://127.0.0.1:1")
        .auto_retry_count(1)
        .auto_retry_delay(5.0)
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let started = Instant::now();
    let err = assert_err!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product").build())
            .await
    );

    // a single attempt never sleeps
    assert!(started.elapsed() < Duration::from_secs(5));
    match err {
        HttpError::Network(e) => assert!(e.is_connect()),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delay_is_slept_between_server_error_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"errors": []})))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = MoySkladConfig::builder()
        .api_token("YTpi")
        .base_url(server.uri())
        .auto_retry_count(3)
        .auto_retry_delay(0.2)
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let started = Instant::now();
    assert_ok!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product").build())
            .await
    );
    assert!(started.elapsed() >= Duration::from_millis(400));
}

#[tokio::test]
async fn test_delay_is_slept_between_connect_error_attempts() {
    let config = MoySkladConfig::builder()
        .api_token("YTpi")
        .base_url("http://127.0.0.1:1")
        .auto_retry_count(3)
        .auto_retry_delay(0.2)
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let started = Instant::now();
    assert_err!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product").build())
            .await
    );
    assert!(started.elapsed() >= Duration::from_millis(400));
}

// ============================================================================
// Response interpretation
// ============================================================================

#[tokio::test]
async fn test_delete_with_empty_body_returns_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/entity/product/p-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1, false);
    let request = HttpRequest::builder(HttpMethod::Delete, "entity/product/p-1")
        .allow_non_json(true)
        .build();

    let body = assert_ok!(client.dispatch(request).await);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_html_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>maintenance</html>", "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 3, false);
    let err = assert_err!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product").build())
            .await
    );
    match err {
        HttpError::UnexpectedContentType(e) => {
            assert_eq!(e.status, 200);
            assert_eq!(e.content_type, "text/html");
            assert_eq!(e.body, "<html>maintenance</html>");
        }
        other => panic!("expected content type error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1, false);
    let err = assert_err!(
        client
            .dispatch(HttpRequest::builder(HttpMethod::Get, "entity/product").build())
            .await
    );
    assert!(matches!(err, HttpError::Json(_)));
}

#[tokio::test]
async fn test_absolute_href_bypasses_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .and(query_param("offset", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = MoySkladConfig::builder()
        .api_token("YTpi")
        .auto_retry_count(1)
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();
    let href = format!("{}/entity/product?offset=1000", server.uri());

    assert_ok!(client.dispatch(HttpRequest::builder(HttpMethod::Get, href).build()).await);
}
