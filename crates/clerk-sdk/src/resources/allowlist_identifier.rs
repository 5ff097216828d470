use super::null_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowlistIdentifier {
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub identifier: String,
    #[serde(deserialize_with = "null_default")]
    pub identifier_type: String,
    pub invitation_id: Option<String>,
    pub instance_id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: i64,
}
