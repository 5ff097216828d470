//! Commerce plans

use crate::error::Result;
use crate::params::ListParams;
use crate::resources::{CommercePlan, CommercePlanList};
use serde::Serialize;

const RESOURCE: &str = "plans";

resource_client!(
    /// Client for `/commerce/plans`
    CommercePlanClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommercePlanParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Amount in the currency's minor unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommercePlanParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CommercePlanClient {
    pub async fn create(&self, params: &CreateCommercePlanParams) -> Result<CommercePlan> {
        super::create(self.backend.as_ref(), RESOURCE, params).await
    }

    pub async fn list(&self, pagination: ListParams) -> Result<CommercePlanList> {
        super::list(self.backend.as_ref(), RESOURCE, &pagination).await
    }

    pub async fn get(&self, id: &str) -> Result<CommercePlan> {
        super::get(self.backend.as_ref(), RESOURCE, id).await
    }

    pub async fn update(&self, id: &str, params: &UpdateCommercePlanParams) -> Result<CommercePlan> {
        super::update(self.backend.as_ref(), RESOURCE, id, params).await
    }
}
