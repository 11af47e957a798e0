#![cfg(not(coverage))]

use httpmock::prelude::*;
use serde_json::json;

use super::*;

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

fn user_json(id: i64, email: &str, scope: &str, active: bool) -> serde_json::Value {
    json!({"id": id, "email": email, "scope": scope, "active": active})
}

#[tokio::test]
async fn list_users_decodes_rows() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/users");
        then.status(200).json_body(json!([
            user_json(1, "admin@example.com", "admin", true),
            user_json(2, "user@example.com", "user", false),
        ]));
    });

    let users = api_client(&server).list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].scope, UserScope::Admin);
    assert!(!users[1].active);
}

#[tokio::test]
async fn user_detail_decodes_ban_metadata() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/users/5");
        then.status(200).json_body(json!({
            "id": 5,
            "email": "banned@example.com",
            "scope": "user",
            "active": false,
            "description": "Repeated abuse reports",
            "created_at": "2026-02-01T10:00:00Z",
            "banned_until": "2026-03-01T10:00:00Z"
        }));
    });

    let detail = api_client(&server).get_user_detail(5).await.unwrap();
    assert_eq!(detail.email, "banned@example.com");
    assert_eq!(detail.description.as_deref(), Some("Repeated abuse reports"));
    assert!(detail.banned_until.is_some());
}

#[tokio::test]
async fn delete_user_hits_the_user_resource() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/admin/users/3");
        then.status(200).json_body(json!({}));
    });

    api_client(&server).delete_user(3).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn ban_user_sends_reason_and_expire_token() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/users/4/ban")
            .json_body(json!({"reason": "spam", "expire": "5:days"}));
        then.status(200).json_body(json!({}));
    });

    let request = BanUserRequest {
        reason: "spam".to_string(),
        expire: "5:days".to_string(),
    };
    api_client(&server).ban_user(4, &request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn update_user_patches_only_the_changed_field() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::PATCH)
            .path("/api/admin/users/2")
            .json_body(json!({"scope": "admin"}));
        then.status(200)
            .json_body(user_json(2, "user@example.com", "admin", true));
    });

    let updated = api_client(&server)
        .update_user(2, &UserPatch::scope(UserScope::Admin))
        .await
        .unwrap();
    assert_eq!(updated.scope, UserScope::Admin);
    mock.assert_async().await;
}

#[tokio::test]
async fn error_payload_surfaces_as_api_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/users/9/ban");
        then.status(422)
            .json_body(json!({"error": "reason is required", "code": "VALIDATION_ERROR"}));
    });

    let request = BanUserRequest {
        reason: String::new(),
        expire: "x".to_string(),
    };
    let error = api_client(&server).ban_user(9, &request).await.unwrap_err();
    assert_eq!(error.code, "VALIDATION_ERROR");
    assert_eq!(error.error, "reason is required");
}

#[tokio::test]
async fn auth_endpoints_round_trip() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .json_body(json!({"email": "admin@example.com", "password": "secret"}));
        then.status(200).json_body(json!({
            "token": "token-1",
            "user": user_json(1, "admin@example.com", "admin", true)
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(200)
            .json_body(user_json(1, "admin@example.com", "admin", true));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/logout");
        then.status(200).json_body(json!({}));
    });

    let client = api_client(&server);
    let login = client
        .login(&LoginRequest {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(login.token, "token-1");
    assert_eq!(login.user.scope, UserScope::Admin);

    let me = client.get_me().await.unwrap();
    assert_eq!(me.id, 1);

    client.logout().await.unwrap();
}
