use super::null_default;
use serde::{Deserialize, Serialize};

/// Svix application backing the instance's webhooks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvixWebhook {
    /// URL of the Svix dashboard for the instance
    #[serde(deserialize_with = "null_default")]
    pub svix_url: String,
}
