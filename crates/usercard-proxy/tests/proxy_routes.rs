//! Proxy route tests
//!
//! The router is driven with `tower::ServiceExt::oneshot`; the upstream
//! random-user API is a wiremock server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use usercard_proxy::{router, ErrorBody, ProxyState};
use wiremock::matchers::{method, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn upstream_user(email: &str) -> serde_json::Value {
    json!({
        "gender": "female",
        "name": {"title": "Mrs", "first": "Aiko", "last": "Tanaka"},
        "location": {
            "street": {"number": 7, "name": "Sakura Dori"},
            "city": "Kyoto",
            "state": "Kyoto",
            "country": "Japan",
            "postcode": 6008216,
            "coordinates": {"latitude": "35.0", "longitude": "135.7"}
        },
        "email": email,
        "phone": "075-000-0000",
        "cell": "090-0000-0000",
        "picture": {"large": "l.jpg", "medium": "m.jpg", "thumbnail": "t.jpg"},
        "nat": "JP",
        "login": {"username": "redfox"}
    })
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_user_returns_first_result_unchanged() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param_is_missing("gender"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [upstream_user("aiko@example.com")],
            "info": {"results": 1}
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = router(ProxyState::new(upstream.uri()));
    let (status, body) = get(app, "/user").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "aiko@example.com");
    assert_eq!(body["login"]["username"], "redfox");
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn test_known_gender_is_forwarded() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("gender", "female"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [upstream_user("f@example.com")]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = router(ProxyState::new(upstream.uri()));
    let (status, body) = get(app, "/user?gender=female").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gender"], "female");
}

#[tokio::test]
async fn test_unknown_gender_is_ignored() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param_is_missing("gender"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [upstream_user("any@example.com")]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = router(ProxyState::new(upstream.uri()));
    let (status, _) = get(app, "/user?gender=robot").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_upstream_failure_is_500_with_error_body() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&upstream)
        .await;

    let app = router(ProxyState::new(upstream.uri()));
    let (status, body) = get(app, "/user").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = serde_json::from_value(body).unwrap();
    assert_eq!(body.error, "Failed to fetch user data");
    assert!(body.message.contains("502"));
}

#[tokio::test]
async fn test_cors_header_present() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [upstream_user("c@example.com")]
        })))
        .mount(&upstream)
        .await;

    let app = router(ProxyState::new(upstream.uri()));
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/user")
                .header("origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
