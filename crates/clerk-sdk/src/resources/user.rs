use super::null_default;
use serde::{Deserialize, Serialize};

/// Verification state of an identifier or external account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Verification {
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub strategy: String,
    pub attempts: Option<i64>,
    pub expire_at: Option<i64>,
    pub external_verification_redirect_url: Option<String>,
}

/// Identifier that another identifier is linked to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedIdentification {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_default")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailAddress {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub email_address: String,
    #[serde(deserialize_with = "null_default")]
    pub reserved: bool,
    pub verification: Option<Verification>,
    #[serde(deserialize_with = "null_default")]
    pub linked_to: Vec<LinkedIdentification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneNumber {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_default")]
    pub reserved_for_second_factor: bool,
    #[serde(deserialize_with = "null_default")]
    pub default_second_factor: bool,
    #[serde(deserialize_with = "null_default")]
    pub reserved: bool,
    pub verification: Option<Verification>,
    #[serde(deserialize_with = "null_default")]
    pub linked_to: Vec<LinkedIdentification>,
    #[serde(deserialize_with = "null_default")]
    pub backup_codes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Web3Wallet {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub web3_wallet: String,
    pub verification: Option<Verification>,
}

/// Account at an OAuth provider linked to a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalAccount {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub provider: String,
    #[serde(deserialize_with = "null_default")]
    pub identification_id: String,
    #[serde(deserialize_with = "null_default")]
    pub provider_user_id: String,
    #[serde(deserialize_with = "null_default")]
    pub approved_scopes: String,
    #[serde(deserialize_with = "null_default")]
    pub email_address: String,
    #[serde(deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_default")]
    pub avatar_url: String,
    pub image_url: Option<String>,
    pub username: Option<String>,
    pub public_metadata: serde_json::Value,
    pub label: Option<String>,
    pub verification: Option<Verification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub has_image: bool,
    pub primary_email_address_id: Option<String>,
    pub primary_phone_number_id: Option<String>,
    pub primary_web3_wallet_id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub password_enabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub two_factor_enabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub totp_enabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub backup_code_enabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub email_addresses: Vec<EmailAddress>,
    #[serde(deserialize_with = "null_default")]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(deserialize_with = "null_default")]
    pub web3_wallets: Vec<Web3Wallet>,
    #[serde(deserialize_with = "null_default")]
    pub external_accounts: Vec<ExternalAccount>,
    pub public_metadata: serde_json::Value,
    pub private_metadata: serde_json::Value,
    pub unsafe_metadata: serde_json::Value,
    pub external_id: Option<String>,
    pub last_sign_in_at: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub banned: bool,
    #[serde(deserialize_with = "null_default")]
    pub locked: bool,
    pub lockout_expires_in_seconds: Option<i64>,
    pub verification_attempts_remaining: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub delete_self_enabled: bool,
    #[serde(deserialize_with = "null_default")]
    pub create_organization_enabled: bool,
    pub create_organizations_limit: Option<i64>,
    pub last_active_at: Option<i64>,
    pub legal_accepted_at: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: i64,
}

impl User {
    /// The user's primary email address, if one is set
    pub fn primary_email_address(&self) -> Option<&EmailAddress> {
        let primary = self.primary_email_address_id.as_deref()?;
        self.email_addresses.iter().find(|e| e.id == primary)
    }
}

/// Users matching a list query, with the total match count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserList {
    #[serde(deserialize_with = "null_default")]
    pub users: Vec<User>,
    #[serde(deserialize_with = "null_default")]
    pub total_count: i64,
}

/// OAuth access token a user holds at a provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthAccessToken {
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    #[serde(deserialize_with = "null_default")]
    pub external_account_id: String,
    #[serde(deserialize_with = "null_default")]
    pub provider_user_id: String,
    #[serde(deserialize_with = "null_default")]
    pub token: String,
    #[serde(deserialize_with = "null_default")]
    pub provider: String,
    pub public_metadata: serde_json::Value,
    pub label: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub scopes: Vec<String>,
    pub token_secret: Option<String>,
    pub expires_at: Option<i64>,
}

/// Returned when a user's second factors are removed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultifactorAuthentication {
    #[serde(deserialize_with = "null_default")]
    pub user_id: String,
}

/// Time-based one-time password enrollment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Totp {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    pub secret: Option<String>,
    pub uri: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub verified: bool,
    #[serde(deserialize_with = "null_default")]
    pub backup_codes: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: i64,
}
