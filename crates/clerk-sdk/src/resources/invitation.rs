use super::null_default;
use serde::{Deserialize, Serialize};

/// Invitation to sign up to the instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invitation {
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub email_address: String,
    pub public_metadata: serde_json::Value,
    #[serde(deserialize_with = "null_default")]
    pub revoked: bool,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    pub url: Option<String>,
    pub expires_at: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: i64,
}
