mod common;

use axum_test::TestServer;
use serde_json::json;

async fn login_token(server: &TestServer, username: &str) -> String {
    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({ "username": username, "password": "Str0ng!pass" }))
        .await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn create_link(server: &TestServer, token: &str, title: &str, url: &str) -> serde_json::Value {
    let response = server
        .post("/api/v1/links")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": title, "url": url }))
        .await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()
}

#[tokio::test]
async fn test_create_link() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();
    let token = login_token(&server, "alice").await;

    let body = create_link(&server, &token, "My blog", "https://example.com/blog").await;

    assert_eq!(body["title"], "My blog");
    assert_eq!(body["url"], "https://example.com/blog");
    assert!(body["created_at"].is_string());

    let id = body["id"].as_str().unwrap();
    assert!(id.len() >= 8);
    assert_eq!(
        body["shortened_url"],
        format!("{}/{}", common::TEST_BASE_URL, id)
    );
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();
    let token = login_token(&server, "alice").await;

    let response = server
        .post("/api/v1/links")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "Bad", "url": "not a url" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_list_links_owner_scoped() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();
    let alice = login_token(&server, "alice").await;
    let bob = login_token(&server, "bob").await;

    create_link(&server, &alice, "One", "https://example.com/1").await;
    create_link(&server, &alice, "Two", "https://example.com/2").await;
    create_link(&server, &bob, "Other", "https://example.com/3").await;

    let response = server
        .get("/api/v1/links")
        .add_header("Authorization", format!("Bearer {}", alice))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let links = body.as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert!(links.iter().all(|l| l["title"] != "Other"));
}

#[tokio::test]
async fn test_get_link_by_public_id() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();
    let token = login_token(&server, "alice").await;

    let created = create_link(&server, &token, "Mine", "https://example.com").await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .get(&format!("/api/v1/links/{}", id))
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["title"], "Mine");
}

#[tokio::test]
async fn test_get_link_malformed_id() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();
    let token = login_token(&server, "alice").await;

    let response = server
        .get("/api/v1/links/$$$invalid$$$")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "invalid_identifier");
}

#[tokio::test]
async fn test_get_foreign_link_is_not_found() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();
    let alice = login_token(&server, "alice").await;
    let bob = login_token(&server, "bob").await;

    let created = create_link(&server, &alice, "Private", "https://example.com").await;
    let id = created["id"].as_str().unwrap();

    // Valid identifier, wrong owner: indistinguishable from missing
    let response = server
        .get(&format!("/api/v1/links/{}", id))
        .add_header("Authorization", format!("Bearer {}", bob))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_link_partial() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();
    let token = login_token(&server, "alice").await;

    let created = create_link(&server, &token, "Old title", "https://example.com/old").await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/v1/links/{}", id))
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "New title" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["title"], "New title");
    // URL untouched
    assert_eq!(body["url"], "https://example.com/old");
}

#[tokio::test]
async fn test_delete_link() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();
    let token = login_token(&server, "alice").await;

    let created = create_link(&server, &token, "Doomed", "https://example.com").await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .delete(&format!("/api/v1/links/{}", id))
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "detail": "Link deleted" })
    );

    // Gone afterwards
    server
        .get(&format!("/api/v1/links/{}", id))
        .add_header("Authorization", format!("Bearer {}", token))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_foreign_link_is_not_found() {
    let ctx = common::create_test_state();
    let server = TestServer::new(common::test_app(ctx.state)).unwrap();
    let alice = login_token(&server, "alice").await;
    let bob = login_token(&server, "bob").await;

    let created = create_link(&server, &alice, "Keep", "https://example.com").await;
    let id = created["id"].as_str().unwrap();

    server
        .delete(&format!("/api/v1/links/{}", id))
        .add_header("Authorization", format!("Bearer {}", bob))
        .await
        .assert_status_not_found();

    // Still there for the owner
    server
        .get(&format!("/api/v1/links/{}", id))
        .add_header("Authorization", format!("Bearer {}", alice))
        .await
        .assert_status_ok();
}
