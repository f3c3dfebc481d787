mod common;

use axum_test::TestServer;
use serde_json::json;

async fn register(server: &TestServer, username: &str, password: &str) -> axum_test::TestResponse {
    server
        .post("/api/v1/auth/register")
        .json(&json!({ "username": username, "password": password }))
        .await
}

#[tokio::test]
async fn test_register_success() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    let response = register(&server, "alice_b", "Str0ng!pass").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert!(body["access_token"].is_string());
    assert_eq!(body["username"], "alice_b");
    assert_eq!(body["token_type"], "bearer");

    // Public identifier, never the raw row id
    let id = body["id"].as_str().unwrap();
    assert!(id.len() >= 8);
    assert_ne!(id, "1");

    let cookie = response.cookie("refresh_token");
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
}

#[tokio::test]
async fn test_register_uppercase_username_is_lowercased() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    register(&server, "bob", "Str0ng!pass").await.assert_status_ok();

    // Same name in different case collides with the stored account
    let response = register(&server, "Bob", "Other!Pass9").await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    register(&server, "carol", "Str0ng!pass").await.assert_status_ok();

    let response = register(&server, "carol", "Str0ng!pass").await;
    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_register_rejects_policy_violations() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    // Username too short
    register(&server, "ab", "Str0ng!pass")
        .await
        .assert_status_bad_request();

    // Username with illegal characters
    register(&server, "has space", "Str0ng!pass")
        .await
        .assert_status_bad_request();

    // Password too short
    register(&server, "dave", "S1!a")
        .await
        .assert_status_bad_request();

    // Password without special characters
    register(&server, "dave", "Passw0rdd")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_login_success() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    register(&server, "erin", "Str0ng!pass").await.assert_status_ok();

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "username": "erin", "password": "Str0ng!pass" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert!(body["access_token"].is_string());
    assert_eq!(body["username"], "erin");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    register(&server, "frank", "Str0ng!pass").await.assert_status_ok();

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "username": "frank", "password": "Wrong!pass1" }))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_login_unknown_user_same_error() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "username": "ghost", "password": "Wrong!pass1" }))
        .await;

    response.assert_status_unauthorized();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    let response = server.get("/api/v1/links").await;

    response.assert_status_unauthorized();
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

#[tokio::test]
async fn test_protected_route_rejects_garbage_token() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    let response = server
        .get("/api/v1/links")
        .add_header("Authorization", "Bearer not-a-jwt")
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_protected_route_rejects_refresh_token() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    let response = register(&server, "grace", "Str0ng!pass").await;
    response.assert_status_ok();

    let refresh = response.cookie("refresh_token").value().to_string();

    let response = server
        .get("/api/v1/links")
        .add_header("Authorization", format!("Bearer {}", refresh))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_access_token_works_on_protected_route() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();

    let response = register(&server, "heidi", "Str0ng!pass").await;
    let token = response.json::<serde_json::Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .get("/api/v1/links")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}
