//! Commerce invoices

use crate::error::Result;
use crate::params::ListParams;
use crate::resources::{CommerceInvoice, CommerceInvoiceList};
use serde::Serialize;

const RESOURCE: &str = "invoices";

resource_client!(
    /// Client for `/commerce/invoices`
    CommerceInvoiceClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommerceInvoiceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// RFC 3339 due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommerceInvoiceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CommerceInvoiceClient {
    pub async fn create(&self, params: &CreateCommerceInvoiceParams) -> Result<CommerceInvoice> {
        super::create(self.backend.as_ref(), RESOURCE, params).await
    }

    pub async fn list(&self, pagination: ListParams) -> Result<CommerceInvoiceList> {
        super::list(self.backend.as_ref(), RESOURCE, &pagination).await
    }

    pub async fn get(&self, id: &str) -> Result<CommerceInvoice> {
        super::get(self.backend.as_ref(), RESOURCE, id).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &UpdateCommerceInvoiceParams,
    ) -> Result<CommerceInvoice> {
        super::update(self.backend.as_ref(), RESOURCE, id, params).await
    }
}
