//! Commerce payees

use crate::error::Result;
use crate::params::ListParams;
use crate::resources::{CommercePayee, CommercePayeeList};
use serde::Serialize;

const RESOURCE: &str = "payees";

resource_client!(
    /// Client for `/commerce/payees`
    CommercePayeeClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommercePayeeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_external_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommercePayeeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_status: Option<String>,
}

impl CommercePayeeClient {
    pub async fn create(&self, params: &CreateCommercePayeeParams) -> Result<CommercePayee> {
        super::create(self.backend.as_ref(), RESOURCE, params).await
    }

    pub async fn list(&self, pagination: ListParams) -> Result<CommercePayeeList> {
        super::list(self.backend.as_ref(), RESOURCE, &pagination).await
    }

    pub async fn get(&self, id: &str) -> Result<CommercePayee> {
        super::get(self.backend.as_ref(), RESOURCE, id).await
    }

    pub async fn update(&self, id: &str, params: &UpdateCommercePayeeParams) -> Result<CommercePayee> {
        super::update(self.backend.as_ref(), RESOURCE, id, params).await
    }
}
