//! Commerce (billing) API
//!
//! [`CommerceClient`] covers the instance-scoped lookups; the submodules hold
//! one client per commerce resource, each with create, list, get and update.

use crate::backend::{call_json, join_path, ApiRequest, Backend};
use crate::error::Result;
use crate::params::ToQuery;
use crate::resources::{
    CommerceIntegrationResponse, CommerceInvoice, CommerceInvoiceList, CommercePaymentAttempt,
    CommercePaymentAttemptList, CommercePlan, CommerceProductWithPlans, CommerceSubscription,
    CommerceSubscriptionList, PaginatedList,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod features;
pub mod integrations;
pub mod invoices;
pub mod payees;
pub mod payers;
pub mod payment_attempts;
pub mod payment_sources;
pub mod plans;
pub mod products;
pub mod subscriptions;

const PATH: &str = "/commerce";

resource_client!(
    /// Client for instance-wide commerce lookups
    CommerceClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommerceIntegrationParams {
    pub instance_id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub integration_type: String,
}

impl CommerceClient {
    pub async fn list_subscriptions_by_instance_id(
        &self,
        instance_id: &str,
    ) -> Result<CommerceSubscriptionList> {
        let path = join_path(PATH, &["subscriptions", instance_id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    pub async fn list_subscriptions_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<CommerceSubscriptionList> {
        let path = join_path(PATH, &["subscriptions", "user", user_id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    pub async fn get_subscription_by_id(&self, id: &str) -> Result<CommerceSubscription> {
        let path = join_path(PATH, &["subscriptions", id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    pub async fn list_invoices_by_instance_id(
        &self,
        instance_id: &str,
    ) -> Result<CommerceInvoiceList> {
        let path = join_path(PATH, &["invoices", "instance", instance_id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    pub async fn get_invoice_by_id(&self, id: &str) -> Result<CommerceInvoice> {
        let path = join_path(PATH, &["invoices", id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    pub async fn list_payment_attempts_by_instance_id(
        &self,
        instance_id: &str,
    ) -> Result<CommercePaymentAttemptList> {
        let path = join_path(PATH, &["payment_attempts", "instance", instance_id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    pub async fn get_payment_attempt_by_id(&self, id: &str) -> Result<CommercePaymentAttempt> {
        let path = join_path(PATH, &["payment_attempts", id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    /// Products of an instance, each with its plans
    pub async fn list_products_by_instance_id(
        &self,
        instance_id: &str,
    ) -> Result<PaginatedList<CommerceProductWithPlans>> {
        let path = join_path(PATH, &["products", "instance", instance_id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    pub async fn get_plan_by_id(&self, id: &str) -> Result<CommercePlan> {
        let path = join_path(PATH, &["plans", id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    /// Start connecting a payment gateway; follow the returned URL to finish
    pub async fn create_integration(
        &self,
        params: &CreateCommerceIntegrationParams,
    ) -> Result<CommerceIntegrationResponse> {
        let path = join_path(PATH, &["integrations"])?;
        let request = ApiRequest::post(path).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }
}

// Shared CRUD calls for the per-resource commerce clients. `resource` is the
// path segment below `/commerce`.

async fn create<P, T>(backend: &dyn Backend, resource: &str, params: &P) -> Result<T>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let path = join_path(PATH, &[resource])?;
    call_json(backend, ApiRequest::post(path).with_json(params)?).await
}

async fn list<T>(backend: &dyn Backend, resource: &str, query: &impl ToQuery) -> Result<PaginatedList<T>>
where
    T: DeserializeOwned,
{
    let path = join_path(PATH, &[resource])?;
    call_json(backend, ApiRequest::get(path).with_query(query)).await
}

async fn get<T>(backend: &dyn Backend, resource: &str, id: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let path = join_path(PATH, &[resource, id])?;
    call_json(backend, ApiRequest::get(path)).await
}

async fn update<P, T>(backend: &dyn Backend, resource: &str, id: &str, params: &P) -> Result<T>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let path = join_path(PATH, &[resource, id])?;
    call_json(backend, ApiRequest::put(path).with_json(params)?).await
}
