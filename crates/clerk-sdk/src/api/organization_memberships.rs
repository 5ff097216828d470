//! Organization memberships API

use crate::backend::{call_json, join_path, ApiRequest};
use crate::error::Result;
use crate::params::{ListParams, Query, ToQuery};
use crate::resources::{OrganizationMembership, PaginatedList};
use serde::Serialize;

const PATH: &str = "/organizations";

resource_client!(
    /// Client for the `/organizations/{id}/memberships` endpoints
    OrganizationMembershipClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOrganizationMembershipParams {
    #[serde(skip)]
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrganizationMembershipParams {
    #[serde(skip)]
    pub organization_id: String,
    #[serde(skip)]
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListOrganizationMembershipsParams {
    pub organization_id: String,
    pub pagination: ListParams,
    pub order_by: Option<String>,
    pub query: Option<String>,
    pub email_address_query: Option<String>,
    pub phone_number_query: Option<String>,
    pub username_query: Option<String>,
    pub name_query: Option<String>,
    pub roles: Vec<String>,
    pub user_ids: Vec<String>,
    pub email_addresses: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub usernames: Vec<String>,
    pub web3_wallets: Vec<String>,
    pub created_at_before: Option<i64>,
    pub created_at_after: Option<i64>,
    pub last_active_at_before: Option<i64>,
    pub last_active_at_after: Option<i64>,
}

impl ToQuery for ListOrganizationMembershipsParams {
    fn to_query(&self) -> Query {
        let mut q = self.pagination.to_query();
        q.set_opt("order_by", self.order_by.as_deref())
            .set_opt("query", self.query.as_deref())
            .set_opt("email_address_query", self.email_address_query.as_deref())
            .set_opt("phone_number_query", self.phone_number_query.as_deref())
            .set_opt("username_query", self.username_query.as_deref())
            .set_opt("name_query", self.name_query.as_deref())
            .add_all("role", &self.roles)
            .add_all("user_id", &self.user_ids)
            .add_all("email_address", &self.email_addresses)
            .add_all("phone_number", &self.phone_numbers)
            .add_all("username", &self.usernames)
            .add_all("web3_wallet", &self.web3_wallets)
            .set_i64("created_at_before", self.created_at_before)
            .set_i64("created_at_after", self.created_at_after)
            .set_i64("last_active_at_before", self.last_active_at_before)
            .set_i64("last_active_at_after", self.last_active_at_after);
        q
    }
}

impl OrganizationMembershipClient {
    /// Add a user to an organization
    pub async fn create(
        &self,
        params: &CreateOrganizationMembershipParams,
    ) -> Result<OrganizationMembership> {
        let path = join_path(PATH, &[&params.organization_id, "memberships"])?;
        let request = ApiRequest::post(path).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    /// Change a member's role
    pub async fn update(
        &self,
        params: &UpdateOrganizationMembershipParams,
    ) -> Result<OrganizationMembership> {
        let path = join_path(
            PATH,
            &[&params.organization_id, "memberships", &params.user_id],
        )?;
        let request = ApiRequest::patch(path).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    /// Remove a user from an organization
    pub async fn delete(
        &self,
        organization_id: &str,
        user_id: &str,
    ) -> Result<OrganizationMembership> {
        let path = join_path(PATH, &[organization_id, "memberships", user_id])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    pub async fn list(
        &self,
        params: &ListOrganizationMembershipsParams,
    ) -> Result<PaginatedList<OrganizationMembership>> {
        let path = join_path(PATH, &[&params.organization_id, "memberships"])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path).with_query(params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_fields_not_serialized() {
        let params = UpdateOrganizationMembershipParams {
            organization_id: "org_1".to_string(),
            user_id: "user_1".to_string(),
            role: Some("org:admin".to_string()),
        };

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, serde_json::json!({"role": "org:admin"}));
    }

    #[test]
    fn test_list_params_query_excludes_organization() {
        let params = ListOrganizationMembershipsParams {
            organization_id: "org_1".to_string(),
            roles: vec!["org:admin".to_string()],
            created_at_after: Some(1700000000),
            ..Default::default()
        };

        let q = params.to_query();
        assert_eq!(q.get_all("role"), vec!["org:admin"]);
        assert_eq!(q.get_all("created_at_after"), vec!["1700000000"]);
        assert!(q.get_all("organization_id").is_empty());
    }
}
