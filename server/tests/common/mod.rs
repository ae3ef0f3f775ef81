//! Shared test harness
//!
//! Builds the real application router against a throwaway SQLite file and
//! upload directory, then drives it with in-process requests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use idms_server::api;
use idms_server::core::{Config, ServerState};

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    _tmp: tempfile::TempDir,
}

pub async fn spawn_app() -> TestApp {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let db_path = tmp.path().join("idms-test.db");
    let upload_dir = tmp.path().join("uploads");

    let config = Config::with_overrides(
        db_path.to_string_lossy().to_string(),
        upload_dir.to_string_lossy().to_string(),
        0,
    );
    let state = ServerState::initialize(&config)
        .await
        .expect("initialize server state");
    let router = api::build_app(&state);

    TestApp {
        router,
        state,
        _tmp: tmp,
    }
}

/// Drive one request through the router; returns status + parsed JSON body
pub async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("request should complete");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).expect("build request")
}

/// Register a fresh account and return its session token
pub async fn auth_token(app: &TestApp) -> String {
    let (status, body) = send(
        app,
        post_json(
            "/api/auth/register",
            json!({
                "fullName": "Test Operator",
                "username": "operator",
                "email": "operator@idms.dev",
                "password": "operator-pass-1"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    body["token"].as_str().expect("token in response").to_string()
}

// =============================================================================
// Multipart helpers
// =============================================================================

pub const BOUNDARY: &str = "----idms-test-boundary";

/// Hand-rolled multipart/form-data body: text fields plus an optional
/// photo file part under the `photo` field name
pub fn multipart_request(
    uri: &str,
    token: &str,
    fields: &[(&str, &str)],
    photo: Option<(&str, &str, &[u8])>,
) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((filename, mime, data)) = photo {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"photo\"; \
                 filename=\"{filename}\"\r\nContent-Type: {mime}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body))
        .expect("build request")
}

/// A complete, valid set of create-form text fields
pub fn valid_employee_fields<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("fullName", "Jane Doe"),
        ("dateOfBirth", "1990-01-01"),
        ("email", "JANE@EX.com"),
        ("department", "Engineering"),
        ("phoneNumber", "9876543210"),
        ("designation", "Developer"),
        ("gender", "Female"),
    ]
}

/// ~10 KB payload starting with the JPEG magic bytes
pub fn small_jpeg() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
    data.resize(10 * 1024, 0x55);
    data
}
