use super::null_default;
use serde::{Deserialize, Serialize};

/// Public key published in the instance JWKS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonWebKey {
    #[serde(rename = "kid")]
    #[serde(deserialize_with = "null_default")]
    pub key_id: String,
    #[serde(rename = "alg")]
    #[serde(deserialize_with = "null_default")]
    pub algorithm: String,
    #[serde(rename = "kty")]
    #[serde(deserialize_with = "null_default")]
    pub key_type: String,
    #[serde(rename = "use")]
    #[serde(deserialize_with = "null_default")]
    pub key_use: String,
    /// RSA modulus, base64url
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    /// RSA exponent, base64url
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonWebKeySet {
    #[serde(deserialize_with = "null_default")]
    pub keys: Vec<JsonWebKey>,
}

impl JsonWebKeySet {
    /// Find a key by its key ID
    pub fn find(&self, kid: &str) -> Option<&JsonWebKey> {
        self.keys.iter().find(|k| k.key_id == kid)
    }
}
