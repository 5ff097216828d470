//! Commerce payment gateway integrations

use crate::error::Result;
use crate::params::ListParams;
use crate::resources::{CommerceIntegration, CommerceIntegrationList};
use serde::Serialize;

const RESOURCE: &str = "integrations";

resource_client!(
    /// Client for `/commerce/integrations`
    CommerceIntegrationClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommerceIntegrationRecordParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommerceIntegrationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CommerceIntegrationClient {
    pub async fn create(
        &self,
        params: &CreateCommerceIntegrationRecordParams,
    ) -> Result<CommerceIntegration> {
        super::create(self.backend.as_ref(), RESOURCE, params).await
    }

    pub async fn list(&self, pagination: ListParams) -> Result<CommerceIntegrationList> {
        super::list(self.backend.as_ref(), RESOURCE, &pagination).await
    }

    pub async fn get(&self, id: &str) -> Result<CommerceIntegration> {
        super::get(self.backend.as_ref(), RESOURCE, id).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &UpdateCommerceIntegrationParams,
    ) -> Result<CommerceIntegration> {
        super::update(self.backend.as_ref(), RESOURCE, id, params).await
    }
}
