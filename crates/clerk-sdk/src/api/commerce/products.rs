//! Commerce products

use crate::error::Result;
use crate::params::ListParams;
use crate::resources::{CommerceProduct, CommerceProductList};
use serde::Serialize;

const RESOURCE: &str = "products";

resource_client!(
    /// Client for `/commerce/products`
    CommerceProductClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommerceProductParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_entity_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommerceProductParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_entity_type: Option<String>,
}

impl CommerceProductClient {
    pub async fn create(&self, params: &CreateCommerceProductParams) -> Result<CommerceProduct> {
        super::create(self.backend.as_ref(), RESOURCE, params).await
    }

    pub async fn list(&self, pagination: ListParams) -> Result<CommerceProductList> {
        super::list(self.backend.as_ref(), RESOURCE, &pagination).await
    }

    pub async fn get(&self, id: &str) -> Result<CommerceProduct> {
        super::get(self.backend.as_ref(), RESOURCE, id).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &UpdateCommerceProductParams,
    ) -> Result<CommerceProduct> {
        super::update(self.backend.as_ref(), RESOURCE, id, params).await
    }
}
