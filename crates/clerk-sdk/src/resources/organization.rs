use super::null_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub has_image: bool,
    pub members_count: Option<i64>,
    pub pending_invitations_count: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub max_allowed_memberships: i64,
    #[serde(deserialize_with = "null_default")]
    pub admin_delete_enabled: bool,
    pub public_metadata: serde_json::Value,
    pub private_metadata: serde_json::Value,
    pub created_by: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: i64,
}

/// Organization fields visible to its members and invitees
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicOrganizationData {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub has_image: bool,
}

/// User fields exposed through an organization membership
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicUserData {
    #[serde(deserialize_with = "null_default")]
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub has_image: bool,
    #[serde(deserialize_with = "null_default")]
    pub identifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationMembership {
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    pub organization: Option<Organization>,
    #[serde(deserialize_with = "null_default")]
    pub permissions: Vec<String>,
    pub public_metadata: serde_json::Value,
    pub private_metadata: serde_json::Value,
    #[serde(deserialize_with = "null_default")]
    pub role: String,
    pub role_name: Option<String>,
    pub public_user_data: Option<PublicUserData>,
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationInvitation {
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub email_address: String,
    #[serde(deserialize_with = "null_default")]
    pub role: String,
    #[serde(deserialize_with = "null_default")]
    pub role_name: String,
    #[serde(deserialize_with = "null_default")]
    pub organization_id: String,
    pub public_organization_data: Option<PublicOrganizationData>,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    pub public_metadata: serde_json::Value,
    pub private_metadata: serde_json::Value,
    pub url: Option<String>,
    pub expires_at: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: i64,
}
