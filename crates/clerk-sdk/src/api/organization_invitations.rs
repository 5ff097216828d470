//! Organization invitations API

use crate::backend::{call_json, join_path, ApiRequest};
use crate::error::Result;
use crate::params::{ListParams, Query, ToQuery};
use crate::resources::{OrganizationInvitation, PaginatedList};
use serde::Serialize;

const PATH: &str = "/organizations";
const INSTANCE_PATH: &str = "/organization_invitations";

resource_client!(
    /// Client for organization invitations, per organization or instance-wide
    OrganizationInvitationClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOrganizationInvitationParams {
    #[serde(skip)]
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inviter_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_days: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct ListOrganizationInvitationsParams {
    pub organization_id: String,
    pub pagination: ListParams,
    pub statuses: Vec<String>,
}

impl ToQuery for ListOrganizationInvitationsParams {
    fn to_query(&self) -> Query {
        let mut q = self.pagination.to_query();
        q.add_all("status", &self.statuses);
        q
    }
}

/// Filters for invitations across every organization of the instance
#[derive(Debug, Clone, Default)]
pub struct ListInstanceOrganizationInvitationsParams {
    pub pagination: ListParams,
    pub order_by: Option<String>,
    pub query: Option<String>,
    pub statuses: Vec<String>,
}

impl ToQuery for ListInstanceOrganizationInvitationsParams {
    fn to_query(&self) -> Query {
        let mut q = self.pagination.to_query();
        q.set_opt("order_by", self.order_by.as_deref())
            .set_opt("query", self.query.as_deref())
            .add_all("status", &self.statuses);
        q
    }
}

#[derive(Debug, Serialize)]
struct RevokeBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    requesting_user_id: Option<&'a str>,
}

impl OrganizationInvitationClient {
    pub async fn create(
        &self,
        params: &CreateOrganizationInvitationParams,
    ) -> Result<OrganizationInvitation> {
        let path = join_path(PATH, &[&params.organization_id, "invitations"])?;
        let request = ApiRequest::post(path).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn list(
        &self,
        params: &ListOrganizationInvitationsParams,
    ) -> Result<PaginatedList<OrganizationInvitation>> {
        let path = join_path(PATH, &[&params.organization_id, "invitations"])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path).with_query(params)).await
    }

    pub async fn get(&self, organization_id: &str, id: &str) -> Result<OrganizationInvitation> {
        let path = join_path(PATH, &[organization_id, "invitations", id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    /// Revoke a pending invitation
    pub async fn revoke(
        &self,
        organization_id: &str,
        id: &str,
        requesting_user_id: Option<&str>,
    ) -> Result<OrganizationInvitation> {
        let path = join_path(PATH, &[organization_id, "invitations", id, "revoke"])?;
        let request =
            ApiRequest::post(path).with_json(&RevokeBody { requesting_user_id })?;
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn list_from_instance(
        &self,
        params: &ListInstanceOrganizationInvitationsParams,
    ) -> Result<PaginatedList<OrganizationInvitation>> {
        let request = ApiRequest::get(INSTANCE_PATH).with_query(params);
        call_json(self.backend.as_ref(), request).await
    }
}
