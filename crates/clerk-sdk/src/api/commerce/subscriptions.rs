//! Commerce subscriptions

use crate::backend::{call_json, join_path, ApiRequest};
use crate::error::Result;
use crate::params::{ListParams, ToQuery};
use crate::resources::{CommerceInvoiceList, CommerceSubscription, CommerceSubscriptionList};
use serde::Serialize;

const RESOURCE: &str = "subscriptions";

resource_client!(
    /// Client for `/commerce/subscriptions`
    CommerceSubscriptionClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommerceSubscriptionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommerceSubscriptionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CommerceSubscriptionClient {
    pub async fn create(
        &self,
        params: &CreateCommerceSubscriptionParams,
    ) -> Result<CommerceSubscription> {
        super::create(self.backend.as_ref(), RESOURCE, params).await
    }

    /// List subscriptions, expanding the related objects named in `include`
    pub async fn list(
        &self,
        include: &[&str],
        pagination: ListParams,
    ) -> Result<CommerceSubscriptionList> {
        let mut q = pagination.to_query();
        if !include.is_empty() {
            q.set("include", include.join(","));
        }
        super::list(self.backend.as_ref(), RESOURCE, &q).await
    }

    pub async fn list_invoices(&self, subscription_id: &str) -> Result<CommerceInvoiceList> {
        let path = join_path(super::PATH, &[RESOURCE, subscription_id, "invoices"])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    /// Subscriptions of one subscriber; `subscriber_type` is e.g. `user` or `org`
    pub async fn list_by_user_id(
        &self,
        subscriber_type: &str,
        id: &str,
    ) -> Result<CommerceSubscriptionList> {
        let path = join_path(
            super::PATH,
            &["subscribers", subscriber_type, id, "subscriptions"],
        )?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    pub async fn get(&self, id: &str) -> Result<CommerceSubscription> {
        super::get(self.backend.as_ref(), RESOURCE, id).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &UpdateCommerceSubscriptionParams,
    ) -> Result<CommerceSubscription> {
        super::update(self.backend.as_ref(), RESOURCE, id, params).await
    }
}
