//! Commerce payers

use crate::error::Result;
use crate::params::ListParams;
use crate::resources::{CommercePayer, CommercePayerList};
use serde::Serialize;

const RESOURCE: &str = "payers";

resource_client!(
    /// Client for `/commerce/payers`
    CommercePayerClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommercePayerParams {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommercePayerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CommercePayerClient {
    pub async fn create(&self, params: &CreateCommercePayerParams) -> Result<CommercePayer> {
        super::create(self.backend.as_ref(), RESOURCE, params).await
    }

    pub async fn list(&self, pagination: ListParams) -> Result<CommercePayerList> {
        super::list(self.backend.as_ref(), RESOURCE, &pagination).await
    }

    pub async fn get(&self, id: &str) -> Result<CommercePayer> {
        super::get(self.backend.as_ref(), RESOURCE, id).await
    }

    pub async fn update(&self, id: &str, params: &UpdateCommercePayerParams) -> Result<CommercePayer> {
        super::update(self.backend.as_ref(), RESOURCE, id, params).await
    }
}
