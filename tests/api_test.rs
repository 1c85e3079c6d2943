//! Integration tests for API endpoints.
//!
//! These tests drive the full router, backed by a real in-memory registry,
//! without opening a socket.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use tower::ServiceExt;

use user_directory::api::{create_router, AppState};
use user_directory::{Registry, RegistryError};

// =============================================================================
// Test Helpers
// =============================================================================

fn test_app() -> (Router, Arc<Registry>) {
    let registry = Arc::new(Registry::new());
    let app = create_router(AppState::from_registry(registry.clone()));
    (app, registry)
}

fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn hello_request(first: Option<&str>, last: Option<&str>) -> Request<Body> {
    let mut builder = Request::post("/user/hello");
    if let Some(first) = first {
        builder = builder.header("userFirst", first);
    }
    if let Some(last) = last {
        builder = builder.header("userLast", last);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

async fn error_message(response: Response) -> String {
    body_json(response).await["error"]["message"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// Root & Health
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let (app, _) = test_app();

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Welcome to our homepage!\n");
}

#[tokio::test]
async fn test_health_reports_user_count() {
    let (app, registry) = test_app();
    assert_ok!(registry.add_user("Test", "Userman", "foo@bar.com"));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "healthy", "users": 1 })
    );
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/add-user"].is_object());
}

// =============================================================================
// POST /add-user
// =============================================================================

#[tokio::test]
async fn test_add_user_created() {
    let (app, registry) = test_app();

    let response = app
        .oneshot(json_post(
            "/add-user",
            json!({ "firstName": "Test", "lastName": "Userman", "email": "foo@bar.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_string(response).await.is_empty());
    assert_eq!(registry.len().unwrap(), 1);
}

#[tokio::test]
async fn test_add_user_duplicate_is_bad_request() {
    let (app, registry) = test_app();
    let payload = json!({ "firstName": "Test", "lastName": "Userman", "email": "foo@bar.com" });

    let first = app
        .clone()
        .oneshot(json_post("/add-user", payload.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(json_post("/add-user", payload)).await.unwrap();

    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(second).await,
        "user with this name already exists"
    );
    assert_eq!(registry.len().unwrap(), 1);
}

#[tokio::test]
async fn test_add_user_validation_messages() {
    let cases = [
        (
            json!({ "firstName": "", "lastName": "X", "email": "a@b.com" }),
            "invalid first name: \"\"",
        ),
        (
            json!({ "firstName": "X", "lastName": "", "email": "not-an-email" }),
            "invalid last name: \"\"",
        ),
        (
            json!({ "firstName": "X", "lastName": "Y", "email": "not-an-email" }),
            "invalid email: not-an-email",
        ),
        (
            json!({ "lastName": "Y", "email": "a@b.com" }),
            "invalid first name: \"\"",
        ),
    ];

    for (payload, expected) in cases {
        let (app, registry) = test_app();

        let response = app.oneshot(json_post("/add-user", payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{expected}");
        assert_eq!(error_message(response).await, expected);
        assert!(registry.is_empty().unwrap());
    }
}

#[tokio::test]
async fn test_add_user_wrong_content_type() {
    let (app, registry) = test_app();

    let request = Request::post("/add-user")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from(
            r#"{"firstName":"Test","lastName":"Userman","email":"foo@bar.com"}"#,
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(error_message(response).await.contains("text/plain"));
    assert!(registry.is_empty().unwrap());
}

#[tokio::test]
async fn test_add_user_unknown_field_rejected() {
    let (app, registry) = test_app();

    let response = app
        .oneshot(json_post(
            "/add-user",
            json!({
                "firstName": "Test",
                "lastName": "Userman",
                "email": "foo@bar.com",
                "admin": true
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(registry.is_empty().unwrap());
}

#[tokio::test]
async fn test_add_user_malformed_json() {
    let (app, _) = test_app();

    let request = Request::post("/add-user")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"firstName\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_user_body_over_limit() {
    let (app, registry) = test_app();

    let oversized = "a".repeat(1024 * 1024 + 1);
    let response = app
        .oneshot(json_post(
            "/add-user",
            json!({ "firstName": oversized, "lastName": "Userman", "email": "foo@bar.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(registry.is_empty().unwrap());
}

#[tokio::test]
async fn test_add_user_accepts_pascal_case_keys() {
    let (app, registry) = test_app();

    let response = app
        .oneshot(json_post(
            "/add-user",
            json!({ "FirstName": "Test", "LastName": "Man", "Email": "TestMan@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let user = assert_ok!(registry.get_user_by_name("Test", "Man"));
    assert_eq!(user.email_address(), "TestMan@example.com");
}

#[tokio::test]
async fn test_add_user_accepts_json_content_type_variants() {
    let content_types = ["application/vnd.api+json", "application/json; charset=utf-8"];

    for content_type in content_types {
        let (app, registry) = test_app();

        let request = Request::post("/add-user")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(
                r#"{"firstName":"Test","lastName":"Userman","email":"foo@bar.com"}"#,
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED, "{content_type}");
        assert_eq!(registry.len().unwrap(), 1, "{content_type}");
    }
}

// =============================================================================
// POST /get-user
// =============================================================================

#[tokio::test]
async fn test_get_user_found() {
    let (app, registry) = test_app();
    assert_ok!(registry.add_user("Test", "Userman", "Test Userman <foo@bar.com>"));

    let response = app
        .oneshot(json_post(
            "/get-user",
            json!({ "firstName": "Test", "lastName": "Userman" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "firstName": "Test", "lastName": "Userman", "email": "foo@bar.com" })
    );
}

#[tokio::test]
async fn test_get_user_picks_exact_pair() {
    let (app, registry) = test_app();
    for (first, last, email) in [
        ("foo", "bar", "f.bar@example.com"),
        ("bar", "baz", "bbaz@example.com"),
        ("foo", "baz", "fbaz@example.com"),
        ("baz", "foo", "bazf@example.com"),
    ] {
        assert_ok!(registry.add_user(first, last, email));
    }

    let response = app
        .oneshot(json_post(
            "/get-user",
            json!({ "firstName": "foo", "lastName": "baz" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], "fbaz@example.com");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let (app, _) = test_app();

    let response = app
        .oneshot(json_post("/get-user", json!({ "firstName": "a", "lastName": "b" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "no users found");
}

#[tokio::test]
async fn test_get_user_empty_names_are_not_found() {
    let (app, registry) = test_app();
    assert_ok!(registry.add_user("Test", "Userman", "foo@bar.com"));

    let response = app
        .oneshot(json_post("/get-user", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_missing_content_type() {
    let (app, _) = test_app();

    let request = Request::post("/get-user")
        .body(Body::from(r#"{"firstName":"a","lastName":"b"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_get_user_accepts_full_user_body() {
    let bodies = [
        json!({ "firstName": "Test", "lastName": "Man", "email": "" }),
        json!({ "FirstName": "Test", "LastName": "Man", "Email": "" }),
    ];

    for body in bodies {
        let (app, registry) = test_app();
        assert_ok!(registry.add_user("Test", "Man", "TestMan@example.com"));

        let response = app.oneshot(json_post("/get-user", body.clone())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{body}");
        assert_eq!(
            body_json(response).await,
            json!({ "firstName": "Test", "lastName": "Man", "email": "TestMan@example.com" })
        );
    }
}

#[tokio::test]
async fn test_get_user_unknown_field_rejected() {
    let (app, registry) = test_app();
    assert_ok!(registry.add_user("Test", "Man", "TestMan@example.com"));

    let response = app
        .oneshot(json_post(
            "/get-user",
            json!({ "firstName": "Test", "lastName": "Man", "nickname": "T" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// POST /user/hello
// =============================================================================

#[tokio::test]
async fn test_hello_header() {
    let (app, registry) = test_app();
    assert_ok!(registry.add_user("Test", "Man", "testman@example.com"));

    let response = app
        .oneshot(hello_request(Some("Test"), Some("Man")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        "Hello, Test Man!  Your email is: testman@example.com\n"
    );
}

#[tokio::test]
async fn test_hello_header_missing_names() {
    let cases = [
        (None, Some("Man"), "invalid first name provided"),
        (Some(""), Some("Man"), "invalid first name provided"),
        (Some("Test"), None, "invalid last name provided"),
    ];

    for (first, last, expected) in cases {
        let (app, _) = test_app();

        let response = app.oneshot(hello_request(first, last)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{expected}");
        assert_eq!(error_message(response).await, expected);
    }
}

#[tokio::test]
async fn test_hello_header_unknown_user() {
    let (app, _) = test_app();

    let response = app
        .oneshot(hello_request(Some("Test"), Some("Man")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Greetings
// =============================================================================

async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_string(response).await)
}

#[tokio::test]
async fn test_goodbye() {
    let (app, _) = test_app();

    let (status, body) = get_text(app, "/goodbye/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Goodbye!\n");
}

#[tokio::test]
async fn test_hello_query_parameter() {
    let cases = [
        ("/hello?user=TestMan", "Hello, TestMan!\n"),
        ("/hello/?user=TestMan", "Hello, TestMan!\n"),
        ("/hello/", "Hello, User!\n"),
        ("/hello?foo=bar", "Hello, User!\n"),
    ];

    for (uri, expected) in cases {
        let (app, _) = test_app();

        let (status, body) = get_text(app, uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, expected, "{uri}");
    }
}

#[tokio::test]
async fn test_hello_path_segment() {
    let (app, _) = test_app();

    let (status, body) = get_text(app, "/responses/TestMan/hello/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, TestMan!\n");
}

#[tokio::test]
async fn test_hello_json() {
    let (app, _) = test_app();

    let request = Request::post("/json")
        .body(Body::from(r#"{"FirstName":"TestMan","LastName":"","Email":""}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Hello, TestMan!\n");
}

#[tokio::test]
async fn test_hello_json_rejections() {
    let cases = [
        ("", "bad request body"),
        ("{\"FirstName\": ", "error parsing request JSON"),
        (r#"{"FirstName":""}"#, "invalid username provided"),
        ("{}", "invalid username provided"),
    ];

    for (body, expected) in cases {
        let (app, _) = test_app();

        let request = Request::post("/json").body(Body::from(body)).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body:?}");
        assert_eq!(error_message(response).await, expected);
    }
}

// =============================================================================
// Registry properties through the public API
// =============================================================================

#[tokio::test]
async fn test_every_inserted_user_is_found() {
    let registry = Registry::new();
    let users: Vec<(String, String, String)> = (0..25)
        .map(|i| {
            (
                format!("first{}", i % 5),
                format!("last{}", i),
                format!("user{}@example.com", i),
            )
        })
        .collect();

    for (first, last, email) in &users {
        assert_ok!(registry.add_user(first, last, email));
    }

    for (first, last, email) in &users {
        let user = assert_ok!(registry.get_user_by_name(first, last));
        assert_eq!(&user.email_address(), email);
    }

    let missing = assert_err!(registry.get_user_by_name("first0", "last1"));
    assert_eq!(missing, RegistryError::NotFound);
    assert_eq!(registry.len().unwrap(), users.len());
}
