//! Commerce payment sources

use crate::error::Result;
use crate::params::ListParams;
use crate::resources::{CommercePaymentSource, CommercePaymentSourceList};
use serde::Serialize;

const RESOURCE: &str = "payment_sources";

resource_client!(
    /// Client for `/commerce/payment_sources`
    CommercePaymentSourceClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommercePaymentSourceParams {
    pub owner_id: String,
    pub gateway_id: String,
    pub processor: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommercePaymentSourceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CommercePaymentSourceClient {
    pub async fn create(
        &self,
        params: &CreateCommercePaymentSourceParams,
    ) -> Result<CommercePaymentSource> {
        super::create(self.backend.as_ref(), RESOURCE, params).await
    }

    pub async fn list(&self, pagination: ListParams) -> Result<CommercePaymentSourceList> {
        super::list(self.backend.as_ref(), RESOURCE, &pagination).await
    }

    pub async fn get(&self, id: &str) -> Result<CommercePaymentSource> {
        super::get(self.backend.as_ref(), RESOURCE, id).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &UpdateCommercePaymentSourceParams,
    ) -> Result<CommercePaymentSource> {
        super::update(self.backend.as_ref(), RESOURCE, id, params).await
    }
}
