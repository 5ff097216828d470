use super::null_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthApplication {
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub instance_id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub client_id: String,
    /// Only returned on creation and after a secret rotation
    pub client_secret: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub public: bool,
    #[serde(deserialize_with = "null_default")]
    pub scopes: String,
    #[serde(deserialize_with = "null_default")]
    pub callback_url: String,
    #[serde(deserialize_with = "null_default")]
    pub discovery_url: String,
    #[serde(deserialize_with = "null_default")]
    pub authorize_url: String,
    #[serde(deserialize_with = "null_default")]
    pub token_fetch_url: String,
    #[serde(deserialize_with = "null_default")]
    pub user_info_url: String,
    #[serde(deserialize_with = "null_default")]
    pub token_introspection_url: String,
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: i64,
}
