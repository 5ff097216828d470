//! Commerce payment attempts

use crate::error::Result;
use crate::params::ListParams;
use crate::resources::{CommercePaymentAttempt, CommercePaymentAttemptList};
use serde::Serialize;

const RESOURCE: &str = "payment_attempts";

resource_client!(
    /// Client for `/commerce/payment_attempts`
    CommercePaymentAttemptClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommercePaymentAttemptParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommercePaymentAttemptParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CommercePaymentAttemptClient {
    pub async fn create(
        &self,
        params: &CreateCommercePaymentAttemptParams,
    ) -> Result<CommercePaymentAttempt> {
        super::create(self.backend.as_ref(), RESOURCE, params).await
    }

    pub async fn list(&self, pagination: ListParams) -> Result<CommercePaymentAttemptList> {
        super::list(self.backend.as_ref(), RESOURCE, &pagination).await
    }

    pub async fn get(&self, id: &str) -> Result<CommercePaymentAttempt> {
        super::get(self.backend.as_ref(), RESOURCE, id).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &UpdateCommercePaymentAttemptParams,
    ) -> Result<CommercePaymentAttempt> {
        super::update(self.backend.as_ref(), RESOURCE, id, params).await
    }
}
