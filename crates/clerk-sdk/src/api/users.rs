//! Users API

use crate::backend::{call_json, join_path, ApiRequest, MultipartFile};
use crate::error::Result;
use crate::params::{ListParams, Query, ToQuery};
use crate::resources::{
    DeletedResource, MultifactorAuthentication, OAuthAccessToken, OrganizationInvitation,
    OrganizationMembership, PaginatedList, TotalCount, Totp, User, UserList,
};
use serde::Serialize;

const PATH: &str = "/users";

resource_client!(
    /// Client for the `/users` endpoints
    UserClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "email_address", skip_serializing_if = "Option::is_none")]
    pub email_addresses: Option<Vec<String>>,
    #[serde(rename = "phone_number", skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<String>>,
    #[serde(rename = "web3_wallet", skip_serializing_if = "Option::is_none")]
    pub web3_wallets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hasher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_password_checks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_password_requirement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsafe_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_self_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_organization_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_organizations_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_accepted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_legal_checks: Option<bool>,
    /// RFC 3339 timestamp, for imports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email_address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_primary_email_address_changed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_web3_wallet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hasher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_password_checks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_out_of_other_sessions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsafe_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_self_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_organization_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_organizations_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_accepted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_legal_checks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Metadata to merge into the user's existing metadata.
///
/// Keys set to `null` are removed server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserMetadataParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsafe_metadata: Option<serde_json::Value>,
}

/// Filters for listing and counting users
#[derive(Debug, Clone, Default)]
pub struct ListUsersParams {
    pub pagination: ListParams,
    pub order_by: Option<String>,
    pub query: Option<String>,
    pub email_address_query: Option<String>,
    pub phone_number_query: Option<String>,
    pub username_query: Option<String>,
    pub name_query: Option<String>,
    pub email_addresses: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub external_ids: Vec<String>,
    pub usernames: Vec<String>,
    pub web3_wallets: Vec<String>,
    pub user_ids: Vec<String>,
    pub organization_ids: Vec<String>,
    pub banned: Option<bool>,
    pub last_active_at_since: Option<i64>,
    pub created_at_before: Option<i64>,
    pub created_at_after: Option<i64>,
    pub last_active_at_before: Option<i64>,
    pub last_active_at_after: Option<i64>,
}

impl ToQuery for ListUsersParams {
    fn to_query(&self) -> Query {
        let mut q = self.pagination.to_query();
        q.set_opt("order_by", self.order_by.as_deref())
            .set_opt("query", self.query.as_deref())
            .set_opt("email_address_query", self.email_address_query.as_deref())
            .set_opt("phone_number_query", self.phone_number_query.as_deref())
            .set_opt("username_query", self.username_query.as_deref())
            .set_opt("name_query", self.name_query.as_deref())
            .add_all("email_address", &self.email_addresses)
            .add_all("phone_number", &self.phone_numbers)
            .add_all("external_id", &self.external_ids)
            .add_all("username", &self.usernames)
            .add_all("web3_wallet", &self.web3_wallets)
            .add_all("user_id", &self.user_ids)
            .add_all("organization_id", &self.organization_ids)
            .set_bool("banned", self.banned)
            .set_i64("last_active_at_since", self.last_active_at_since)
            .set_i64("created_at_before", self.created_at_before)
            .set_i64("created_at_after", self.created_at_after)
            .set_i64("last_active_at_before", self.last_active_at_before)
            .set_i64("last_active_at_after", self.last_active_at_after);
        q
    }
}

/// Status filter for a user's organization invitations
#[derive(Debug, Clone, Default)]
pub struct ListUserOrganizationInvitationsParams {
    pub pagination: ListParams,
    pub statuses: Vec<String>,
}

impl ToQuery for ListUserOrganizationInvitationsParams {
    fn to_query(&self) -> Query {
        let mut q = self.pagination.to_query();
        q.add_all("status", &self.statuses);
        q
    }
}

impl UserClient {
    /// Create a new user
    pub async fn create(&self, params: &CreateUserParams) -> Result<User> {
        let request = ApiRequest::post(PATH).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    /// Retrieve details about the user
    pub async fn get(&self, id: &str) -> Result<User> {
        let path = join_path(PATH, &[id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    pub async fn update(&self, id: &str, params: &UpdateUserParams) -> Result<User> {
        let path = join_path(PATH, &[id])?;
        let request = ApiRequest::patch(path).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    /// Set or replace the user's profile image
    pub async fn update_profile_image(&self, id: &str, file: MultipartFile) -> Result<User> {
        let path = join_path(PATH, &[id, "profile_image"])?;
        let request = ApiRequest::post(path).with_multipart(file);
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn delete_profile_image(&self, id: &str) -> Result<User> {
        let path = join_path(PATH, &[id, "profile_image"])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    /// Merge the given values into the user's metadata
    pub async fn update_metadata(&self, id: &str, params: &UpdateUserMetadataParams) -> Result<User> {
        let path = join_path(PATH, &[id, "metadata"])?;
        let request = ApiRequest::patch(path).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn delete(&self, id: &str) -> Result<DeletedResource> {
        let path = join_path(PATH, &[id])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    /// List users matching the filters.
    ///
    /// The list endpoint returns a bare array, so the total count comes from
    /// a concurrent call to the count endpoint with the same filters.
    pub async fn list(&self, params: &ListUsersParams) -> Result<UserList> {
        let request = ApiRequest::get(PATH).with_query(params);
        let (users, count) = tokio::try_join!(
            call_json::<Vec<User>>(self.backend.as_ref(), request),
            self.count(params),
        )?;
        Ok(UserList {
            users,
            total_count: count.total_count,
        })
    }

    /// Total count of users satisfying the filters
    pub async fn count(&self, params: &ListUsersParams) -> Result<TotalCount> {
        let path = join_path(PATH, &["count"])?;
        let request = ApiRequest::get(path).with_query(params);
        call_json(self.backend.as_ref(), request).await
    }

    /// The user's access tokens for a specific OAuth provider
    pub async fn list_oauth_access_tokens(
        &self,
        id: &str,
        provider: &str,
        pagination: ListParams,
    ) -> Result<PaginatedList<OAuthAccessToken>> {
        let path = join_path(PATH, &[id, "oauth_access_tokens", provider])?;
        let mut q = pagination.to_query();
        q.set("paginated", "true");
        call_json(self.backend.as_ref(), ApiRequest::get(path).with_query(&q)).await
    }

    /// Disable all of the user's multi-factor authentication methods
    pub async fn delete_mfa(&self, id: &str) -> Result<MultifactorAuthentication> {
        let path = join_path(PATH, &[id, "mfa"])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    pub async fn ban(&self, id: &str) -> Result<User> {
        self.post_action(id, "ban").await
    }

    pub async fn unban(&self, id: &str) -> Result<User> {
        self.post_action(id, "unban").await
    }

    pub async fn lock(&self, id: &str) -> Result<User> {
        self.post_action(id, "lock").await
    }

    pub async fn unlock(&self, id: &str) -> Result<User> {
        self.post_action(id, "unlock").await
    }

    async fn post_action(&self, id: &str, action: &str) -> Result<User> {
        let path = join_path(PATH, &[id, action])?;
        call_json(self.backend.as_ref(), ApiRequest::post(path)).await
    }

    pub async fn list_organization_memberships(
        &self,
        id: &str,
        pagination: ListParams,
    ) -> Result<PaginatedList<OrganizationMembership>> {
        let path = join_path(PATH, &[id, "organization_memberships"])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path).with_query(&pagination)).await
    }

    pub async fn list_organization_invitations(
        &self,
        id: &str,
        params: &ListUserOrganizationInvitationsParams,
    ) -> Result<PaginatedList<OrganizationInvitation>> {
        let path = join_path(PATH, &[id, "organization_invitations"])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path).with_query(params)).await
    }

    pub async fn delete_passkey(&self, id: &str, identification_id: &str) -> Result<DeletedResource> {
        let path = join_path(PATH, &[id, "passkeys", identification_id])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    pub async fn delete_web3_wallet(
        &self,
        id: &str,
        identification_id: &str,
    ) -> Result<DeletedResource> {
        let path = join_path(PATH, &[id, "web3_wallets", identification_id])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    /// Create a TOTP enrollment for the user
    pub async fn create_totp(&self, id: &str) -> Result<Totp> {
        let path = join_path(PATH, &[id, "totp"])?;
        call_json(self.backend.as_ref(), ApiRequest::post(path)).await
    }

    /// Delete all of the user's TOTPs
    pub async fn delete_totp(&self, id: &str) -> Result<MultifactorAuthentication> {
        let path = join_path(PATH, &[id, "totp"])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    /// Delete all of the user's backup codes
    pub async fn delete_backup_code(&self, id: &str) -> Result<MultifactorAuthentication> {
        let path = join_path(PATH, &[id, "backup_code"])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    pub async fn delete_external_account(
        &self,
        id: &str,
        external_account_id: &str,
    ) -> Result<DeletedResource> {
        let path = join_path(PATH, &[id, "external_accounts", external_account_id])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_params_skip_unset_fields() {
        let params = CreateUserParams {
            username: Some("ada".to_string()),
            email_addresses: Some(vec!["ada@example.com".to_string()]),
            ..Default::default()
        };

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"username": "ada", "email_address": ["ada@example.com"]})
        );
    }

    #[test]
    fn test_list_params_query() {
        let params = ListUsersParams {
            pagination: ListParams::new(1, 2),
            order_by: Some("-created_at".to_string()),
            email_addresses: vec!["foo@bar.com".to_string(), "baz@bar.com".to_string()],
            banned: Some(false),
            ..Default::default()
        };

        let q = params.to_query();
        assert_eq!(q.get_all("limit"), vec!["1"]);
        assert_eq!(q.get_all("email_address"), vec!["foo@bar.com", "baz@bar.com"]);
        assert_eq!(q.get_all("banned"), vec!["false"]);
        assert!(q.get_all("query").is_empty());
    }
}
