//! SAML connections API

use crate::backend::{call_json, join_path, ApiRequest};
use crate::error::Result;
use crate::params::{ListParams, Query, ToQuery};
use crate::resources::{DeletedResource, PaginatedList, SamlConnection};
use serde::Serialize;

const PATH: &str = "/saml_connections";

resource_client!(
    /// Client for the `/saml_connections` endpoints
    SamlConnectionClient
);

/// Attribute mapping sent when creating or updating a connection
#[derive(Debug, Clone, Default, Serialize)]
pub struct SamlConnectionAttributeMappingParams {
    pub user_id: String,
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSamlConnectionParams {
    pub name: String,
    pub domain: String,
    /// One of `saml_custom`, `saml_okta`, `saml_google`, `saml_microsoft`
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_sso_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_metadata_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_mapping: Option<SamlConnectionAttributeMappingParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSamlConnectionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_sso_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_metadata_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_mapping: Option<SamlConnectionAttributeMappingParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_user_attributes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_subdomains: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_idp_initiated: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ListSamlConnectionsParams {
    pub pagination: ListParams,
    pub query: Option<String>,
    pub order_by: Option<String>,
    pub organization_ids: Vec<String>,
}

impl ToQuery for ListSamlConnectionsParams {
    fn to_query(&self) -> Query {
        let mut q = self.pagination.to_query();
        q.set_opt("query", self.query.as_deref())
            .set_opt("order_by", self.order_by.as_deref())
            .add_all("organization_id", &self.organization_ids);
        q
    }
}

impl SamlConnectionClient {
    pub async fn create(&self, params: &CreateSamlConnectionParams) -> Result<SamlConnection> {
        let request = ApiRequest::post(PATH).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn get(&self, id: &str) -> Result<SamlConnection> {
        let path = join_path(PATH, &[id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &UpdateSamlConnectionParams,
    ) -> Result<SamlConnection> {
        let path = join_path(PATH, &[id])?;
        let request = ApiRequest::patch(path).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn delete(&self, id: &str) -> Result<DeletedResource> {
        let path = join_path(PATH, &[id])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    pub async fn list(
        &self,
        params: &ListSamlConnectionsParams,
    ) -> Result<PaginatedList<SamlConnection>> {
        let request = ApiRequest::get(PATH).with_query(params);
        call_json(self.backend.as_ref(), request).await
    }
}
