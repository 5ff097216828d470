//! Commerce (billing) resources
//!
//! The commerce API is still evolving, so every field is optional.

use super::PaginatedList;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceProduct {
    pub id: Option<String>,
    pub object: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub currency: Option<String>,
    pub subscriber_type: Option<Vec<String>>,
    pub owner_entity_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceProductWithPlans {
    #[serde(flatten)]
    pub product: CommerceProduct,
    pub plans: Option<Vec<CommercePlan>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercePlan {
    pub id: Option<String>,
    pub object: Option<String>,
    pub name: Option<String>,
    pub product_id: Option<String>,
    /// Amount in the currency's minor unit
    pub base_amount: Option<i64>,
    pub is_recurring: Option<bool>,
    pub period: Option<String>,
    pub interval: Option<i32>,
    pub billing_cycles: Option<i32>,
    pub subscriber_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceFeature {
    pub id: Option<String>,
    pub object: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub public: Option<bool>,
    pub plan_ids: Option<Vec<String>>,
}

/// Entity a customer record refers to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceCustomerEntity {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceCustomer {
    pub entity: Option<CommerceCustomerEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceSubscription {
    pub id: Option<String>,
    pub object: Option<String>,
    pub customer: Option<CommerceCustomer>,
    pub plan: Option<CommercePlan>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceInvoice {
    pub id: Option<String>,
    pub object: Option<String>,
    pub subscription: Option<CommerceSubscription>,
    pub amount: Option<i64>,
    pub status: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercePaymentAttempt {
    pub id: Option<String>,
    pub object: Option<String>,
    pub invoice: Option<CommerceInvoice>,
    pub amount: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercePaymentSource {
    pub id: Option<String>,
    pub object: Option<String>,
    pub owner_id: Option<String>,
    pub gateway_id: Option<String>,
    pub processor: Option<String>,
    pub last4: Option<String>,
    pub card_type: Option<String>,
    pub status: Option<String>,
}

/// The party paying for a subscription
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercePayer {
    pub id: Option<String>,
    pub object: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// The party receiving payments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercePayee {
    pub id: Option<String>,
    pub object: Option<String>,
    pub gateway_type: Option<String>,
    pub gateway_external_id: Option<String>,
    pub gateway_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceIntegration {
    pub id: Option<String>,
    pub object: Option<String>,
    pub integration_id: Option<String>,
    pub integration_type: Option<String>,
    pub status: Option<String>,
}

/// Returned when an integration is created; `url` continues the gateway onboarding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceIntegrationResponse {
    pub id: Option<String>,
    pub object: Option<String>,
    pub url: Option<String>,
}

pub type CommerceProductList = PaginatedList<CommerceProduct>;
pub type CommercePlanList = PaginatedList<CommercePlan>;
pub type CommerceFeatureList = PaginatedList<CommerceFeature>;
pub type CommerceSubscriptionList = PaginatedList<CommerceSubscription>;
pub type CommerceInvoiceList = PaginatedList<CommerceInvoice>;
pub type CommercePaymentAttemptList = PaginatedList<CommercePaymentAttempt>;
pub type CommercePaymentSourceList = PaginatedList<CommercePaymentSource>;
pub type CommercePayerList = PaginatedList<CommercePayer>;
pub type CommercePayeeList = PaginatedList<CommercePayee>;
pub type CommerceIntegrationList = PaginatedList<CommerceIntegration>;
