//! Organizations API

use crate::backend::{call_json, join_path, ApiRequest, MultipartFile};
use crate::error::Result;
use crate::params::{ListParams, Query, ToQuery};
use crate::resources::{DeletedResource, Organization, PaginatedList};
use serde::Serialize;

const PATH: &str = "/organizations";

resource_client!(
    /// Client for the `/organizations` endpoints
    OrganizationClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOrganizationParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// User that becomes the organization's first admin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allowed_memberships: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrganizationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allowed_memberships: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_delete_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<serde_json::Value>,
}

/// Metadata merged into the organization's existing metadata
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrganizationMetadataParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default)]
pub struct GetOrganizationParams {
    pub include_members_count: Option<bool>,
}

impl ToQuery for GetOrganizationParams {
    fn to_query(&self) -> Query {
        let mut q = Query::new();
        q.set_bool("include_members_count", self.include_members_count);
        q
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListOrganizationsParams {
    pub pagination: ListParams,
    pub include_members_count: Option<bool>,
    pub query: Option<String>,
    pub order_by: Option<String>,
    pub user_ids: Vec<String>,
}

impl ToQuery for ListOrganizationsParams {
    fn to_query(&self) -> Query {
        let mut q = self.pagination.to_query();
        q.set_bool("include_members_count", self.include_members_count)
            .set_opt("query", self.query.as_deref())
            .set_opt("order_by", self.order_by.as_deref())
            .add_all("user_id", &self.user_ids);
        q
    }
}

impl OrganizationClient {
    pub async fn create(&self, params: &CreateOrganizationParams) -> Result<Organization> {
        let request = ApiRequest::post(PATH).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    /// Retrieve an organization by ID or slug
    pub async fn get(&self, id_or_slug: &str) -> Result<Organization> {
        self.get_with_params(id_or_slug, &GetOrganizationParams::default())
            .await
    }

    pub async fn get_with_params(
        &self,
        id_or_slug: &str,
        params: &GetOrganizationParams,
    ) -> Result<Organization> {
        let path = join_path(PATH, &[id_or_slug])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path).with_query(params)).await
    }

    pub async fn update(&self, id: &str, params: &UpdateOrganizationParams) -> Result<Organization> {
        let path = join_path(PATH, &[id])?;
        let request = ApiRequest::patch(path).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn update_metadata(
        &self,
        id: &str,
        params: &UpdateOrganizationMetadataParams,
    ) -> Result<Organization> {
        let path = join_path(PATH, &[id, "metadata"])?;
        let request = ApiRequest::patch(path).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn delete(&self, id: &str) -> Result<DeletedResource> {
        let path = join_path(PATH, &[id])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    /// Upload a new logo, optionally recording which user uploaded it
    pub async fn update_logo(
        &self,
        id: &str,
        file: MultipartFile,
        uploader_user_id: Option<&str>,
    ) -> Result<Organization> {
        let path = join_path(PATH, &[id, "logo"])?;
        let file = match uploader_user_id {
            Some(user_id) => file.with_field("uploader_user_id", user_id),
            None => file,
        };
        let request = ApiRequest::post(path).with_multipart(file);
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn delete_logo(&self, id: &str) -> Result<Organization> {
        let path = join_path(PATH, &[id, "logo"])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    pub async fn list(&self, params: &ListOrganizationsParams) -> Result<PaginatedList<Organization>> {
        let request = ApiRequest::get(PATH).with_query(params);
        call_json(self.backend.as_ref(), request).await
    }
}
