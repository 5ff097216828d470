mod common;

use clerk_sdk::api::users::{
    CreateUserParams, ListUserOrganizationInvitationsParams, ListUsersParams,
    UpdateUserMetadataParams,
};
use clerk_sdk::{Error, ListParams, MultipartFile};
use common::{setup, user_json, SECRET_KEY};
use wiremock::matchers::{body_json, header, header_regex, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_create_user() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/users"))
        .and(header("authorization", format!("Bearer {}", SECRET_KEY).as_str()))
        .and(body_json(serde_json::json!({
            "email_address": ["ada@example.com"],
            "first_name": "Ada"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("user_123")))
        .expect(1)
        .mount(&server)
        .await;

    let user = client
        .users()
        .create(&CreateUserParams {
            email_addresses: Some(vec!["ada@example.com".to_string()]),
            first_name: Some("Ada".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(user.id, "user_123");
    assert_eq!(
        user.primary_email_address().unwrap().email_address,
        "ada@example.com"
    );
}

#[tokio::test]
async fn test_sdk_headers_sent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/user_123"))
        .and(header_regex("x-clerk-sdk", "^rust/"))
        .and(header_regex("user-agent", "^clerk-sdk-rust/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("user_123")))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.users().get("user_123").await.unwrap();
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn test_list_users_merges_count() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .and(query_param("limit", "1"))
        .and(query_param("offset", "2"))
        .and(query_param("email_address", "foo@bar.com"))
        .and(query_param("email_address", "baz@bar.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([user_json("user_1"), user_json("user_2")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/count"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"object": "total_count", "total_count": 12})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let list = client
        .users()
        .list(&ListUsersParams {
            pagination: ListParams::new(1, 2),
            email_addresses: vec!["foo@bar.com".to_string(), "baz@bar.com".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(list.users.len(), 2);
    assert_eq!(list.users[1].id, "user_2");
    assert_eq!(list.total_count, 12);
}

#[tokio::test]
async fn test_list_users_count_failure_fails_list() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/count"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "errors": [{"code": "internal_clerk_error", "message": "Oops"}]
        })))
        .mount(&server)
        .await;

    let err = client
        .users()
        .list(&ListUsersParams::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_update_metadata() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/users/user_123/metadata"))
        .and(body_json(serde_json::json!({"private_metadata": {"tier": "gold"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("user_123")))
        .expect(1)
        .mount(&server)
        .await;

    client
        .users()
        .update_metadata(
            "user_123",
            &UpdateUserMetadataParams {
                private_metadata: Some(serde_json::json!({"tier": "gold"})),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_profile_image_is_multipart() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/user_123/profile_image"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("user_123")))
        .expect(1)
        .mount(&server)
        .await;

    let file = MultipartFile::new("avatar.png", vec![0x89, 0x50, 0x4e, 0x47])
        .with_content_type("image/png");
    client
        .users()
        .update_profile_image("user_123", file)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains(r#"filename="avatar.png""#));
}

#[tokio::test]
async fn test_user_actions() {
    let (server, client) = setup().await;

    for action in ["ban", "unban", "lock", "unlock"] {
        Mock::given(method("POST"))
            .and(path(format!("/v1/users/user_123/{}", action)))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("user_123")))
            .expect(1)
            .mount(&server)
            .await;
    }

    let users = client.users();
    users.ban("user_123").await.unwrap();
    users.unban("user_123").await.unwrap();
    users.lock("user_123").await.unwrap();
    users.unlock("user_123").await.unwrap();
}

#[tokio::test]
async fn test_delete_user() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/users/user_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "user_123",
            "object": "user",
            "deleted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let deleted = client.users().delete("user_123").await.unwrap();
    assert!(deleted.deleted);
    assert_eq!(deleted.object, "user");
}

#[tokio::test]
async fn test_list_oauth_access_tokens() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/user_123/oauth_access_tokens/oauth_google"))
        .and(query_param("paginated", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"object": "oauth_access_token", "token": "tok", "provider": "oauth_google", "scopes": ["email"]}],
            "total_count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tokens = client
        .users()
        .list_oauth_access_tokens("user_123", "oauth_google", ListParams::default())
        .await
        .unwrap();

    assert_eq!(tokens.total_count, 1);
    assert_eq!(tokens.data[0].scopes, vec!["email"]);
}

#[tokio::test]
async fn test_list_user_organization_invitations() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/user_123/organization_invitations"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"id": "orginv_1", "organization_id": "org_1", "status": "pending"}],
            "total_count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let invitations = client
        .users()
        .list_organization_invitations(
            "user_123",
            &ListUserOrganizationInvitationsParams {
                statuses: vec!["pending".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(invitations.data[0].organization_id, "org_1");
}

#[tokio::test]
async fn test_second_factor_removal() {
    let (server, client) = setup().await;

    for segment in ["mfa", "totp", "backup_code"] {
        Mock::given(method("DELETE"))
            .and(path(format!("/v1/users/user_123/{}", segment)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"user_id": "user_123"})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let users = client.users();
    assert_eq!(users.delete_mfa("user_123").await.unwrap().user_id, "user_123");
    assert_eq!(users.delete_totp("user_123").await.unwrap().user_id, "user_123");
    assert_eq!(
        users.delete_backup_code("user_123").await.unwrap().user_id,
        "user_123"
    );
}

#[tokio::test]
async fn test_delete_identifications() {
    let (server, client) = setup().await;

    for (segment, id) in [
        ("passkeys", "idn_pk"),
        ("web3_wallets", "idn_w3"),
        ("external_accounts", "eac_1"),
    ] {
        Mock::given(method("DELETE"))
            .and(path(format!("/v1/users/user_123/{}/{}", segment, id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": id,
                "deleted": true
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let users = client.users();
    assert!(users.delete_passkey("user_123", "idn_pk").await.unwrap().deleted);
    assert!(users.delete_web3_wallet("user_123", "idn_w3").await.unwrap().deleted);
    assert!(
        users
            .delete_external_account("user_123", "eac_1")
            .await
            .unwrap()
            .deleted
    );
}

#[tokio::test]
async fn test_empty_id_rejected_before_request() {
    let (server, client) = setup().await;

    let err = client.users().get("").await.unwrap_err();
    assert!(matches!(err, Error::InvalidPath(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
