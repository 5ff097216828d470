use super::null_default;
use serde::{Deserialize, Serialize};

/// Mapping from SAML assertion attributes to user fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamlConnectionAttributeMapping {
    #[serde(deserialize_with = "null_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_default")]
    pub email_address: String,
    #[serde(deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_default")]
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamlConnection {
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_default")]
    pub provider: String,
    pub idp_entity_id: Option<String>,
    pub idp_sso_url: Option<String>,
    pub idp_certificate: Option<String>,
    pub idp_metadata_url: Option<String>,
    pub idp_metadata: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub acs_url: String,
    #[serde(deserialize_with = "null_default")]
    pub sp_entity_id: String,
    #[serde(deserialize_with = "null_default")]
    pub sp_metadata_url: String,
    pub organization_id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub attribute_mapping: SamlConnectionAttributeMapping,
    #[serde(deserialize_with = "null_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_default")]
    pub user_count: i64,
    #[serde(deserialize_with = "null_default")]
    pub sync_user_attributes: bool,
    #[serde(deserialize_with = "null_default")]
    pub allow_subdomains: bool,
    #[serde(deserialize_with = "null_default")]
    pub allow_idp_initiated: bool,
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: i64,
}
