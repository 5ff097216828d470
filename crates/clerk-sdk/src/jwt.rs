//! Session token verification
//!
//! Clerk session tokens are JWTs signed with one of the instance's keys. Use
//! [`verify`] to check the signature and claims, or [`decode`] to read the
//! claims of a token without any verification.

use crate::api::jwks::JwksClient;
use crate::error::{Error, Result};
use crate::resources::null_default;
use crate::resources::JsonWebKey;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{decode_header, Algorithm, DecodingKey, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

const STANDARD_CLAIMS: [&str; 7] = ["iss", "sub", "aud", "exp", "nbf", "iat", "jti"];

/// Registered JWT claims (RFC 7519 section 4.1)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisteredClaims {
    #[serde(rename = "iss", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(rename = "sub", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(
        rename = "aud",
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub audience: Vec<String>,
    #[serde(rename = "exp", default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<i64>,
    #[serde(rename = "nbf", default, skip_serializing_if = "Option::is_none")]
    pub not_before: Option<i64>,
    #[serde(rename = "iat", default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,
    #[serde(rename = "jti", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// `aud` may be a single string or an array of strings
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(aud)) => vec![aud],
        Some(OneOrMany::Many(aud)) => aud,
        None => Vec::new(),
    })
}

/// Claims of a verified Clerk session token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub registered: RegisteredClaims,

    #[serde(rename = "sid", default, deserialize_with = "null_default")]
    pub session_id: String,

    /// Origin that requested the token
    #[serde(rename = "azp", default, deserialize_with = "null_default")]
    pub authorized_party: String,

    #[serde(rename = "org_id", default, skip_serializing_if = "Option::is_none")]
    pub active_organization_id: Option<String>,
    #[serde(rename = "org_slug", default, skip_serializing_if = "Option::is_none")]
    pub active_organization_slug: Option<String>,
    #[serde(rename = "org_role", default, skip_serializing_if = "Option::is_none")]
    pub active_organization_role: Option<String>,
    #[serde(
        rename = "org_permissions",
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub active_organization_permissions: Vec<String>,

    /// Set when the session is an impersonation
    #[serde(rename = "act", default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<serde_json::Value>,

    /// Every claim not covered above, e.g. from a JWT template
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionClaims {
    /// The user the session belongs to
    pub fn user_id(&self) -> Option<&str> {
        self.registered.subject.as_deref()
    }

    /// Check whether the active organization grants `permission`
    pub fn has_permission(&self, permission: &str) -> bool {
        self.active_organization_permissions
            .iter()
            .any(|p| p == permission)
    }

    /// Deserialize the custom claims into `T`
    pub fn custom_claims<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(serde_json::Value::Object(
            self.extra.clone(),
        ))?)
    }
}

/// Claims of a token read without verification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub registered: RegisteredClaims,

    /// Everything except the registered claims
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Inputs to [`verify`]
#[derive(Debug, Clone, Default)]
pub struct VerifyParams {
    pub token: String,
    /// Key to verify with. When unset the instance JWKS is fetched and the
    /// key is picked by the token's `kid`.
    pub jwk: Option<JsonWebKey>,
    /// Allowed clock skew for `exp`, `nbf` and `iat`, in whole seconds.
    /// Fractions of a second are dropped.
    pub leeway: Duration,
    /// Satellite domains skip issuer validation
    pub is_satellite: bool,
    /// When set, replaces the token issuer for issuer validation
    pub proxy_url: Option<String>,
    authorized_parties: HashSet<String>,
}

impl VerifyParams {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    pub fn with_jwk(mut self, jwk: JsonWebKey) -> Self {
        self.jwk = Some(jwk);
        self
    }

    /// Set the clock skew allowance; only whole seconds count
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// Restrict the `azp` claim to the given origins
    pub fn set_authorized_parties<I, S>(&mut self, parties: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authorized_parties = parties.into_iter().map(Into::into).collect();
    }

    pub fn authorized_parties(&self) -> &HashSet<String> {
        &self.authorized_parties
    }
}

/// Verify a session token and return its claims.
///
/// Fails if the token has no `kid`, the key cannot be found, the header
/// algorithm differs from the key's, the signature is invalid, the token is
/// outside its validity window, the issuer is not a Clerk issuer, or the
/// `azp` claim is not an authorized party.
pub async fn verify(jwks: &JwksClient, params: &VerifyParams) -> Result<SessionClaims> {
    let header = decode_header(&params.token)?;
    let kid = header
        .kid
        .as_deref()
        .filter(|kid| !kid.is_empty())
        .ok_or_else(|| Error::InvalidToken("missing kid header".to_string()))?;

    let jwk = match &params.jwk {
        Some(jwk) => jwk.clone(),
        None => {
            let set = jwks.get().await?;
            set.find(kid)
                .cloned()
                .ok_or_else(|| Error::JwkNotFound(kid.to_string()))?
        }
    };

    let algorithm = Algorithm::from_str(&jwk.algorithm)
        .map_err(|_| Error::InvalidSigningAlgorithm(jwk.algorithm.clone()))?;
    if algorithm != header.alg {
        return Err(Error::InvalidSigningAlgorithm(jwk.algorithm.clone()));
    }

    let key = decoding_key(&jwk)?;
    let leeway = params.leeway.as_secs();

    let mut validation = Validation::new(algorithm);
    validation.leeway = leeway;
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let claims = jsonwebtoken::decode::<SessionClaims>(&params.token, &key, &validation)?.claims;

    if let Some(iat) = claims.registered.issued_at {
        let now = chrono::Utc::now().timestamp();
        if iat > now.saturating_add(i64::try_from(leeway).unwrap_or(i64::MAX)) {
            return Err(Error::InvalidToken("token issued in the future".to_string()));
        }
    }

    let issuer = match params.proxy_url.as_deref() {
        Some(proxy_url) if !proxy_url.is_empty() => proxy_url,
        _ => claims.registered.issuer.as_deref().unwrap_or_default(),
    };
    if !params.is_satellite && !is_valid_issuer(issuer) {
        return Err(Error::InvalidIssuer(issuer.to_string()));
    }

    if !claims.authorized_party.is_empty()
        && !params.authorized_parties.is_empty()
        && !params.authorized_parties.contains(&claims.authorized_party)
    {
        return Err(Error::InvalidAuthorizedParty(claims.authorized_party.clone()));
    }

    debug!(session_id = %claims.session_id, "session token verified");
    Ok(claims)
}

/// Read a token's claims without verifying its signature or validity.
///
/// Never trust the result for authorization decisions.
pub fn decode(token: &str) -> Result<Claims> {
    decode_header(token)?;

    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| Error::InvalidToken("malformed token".to_string()))?;
    let payload = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| Error::InvalidToken(format!("invalid payload encoding: {}", e)))?;

    let mut claims: Claims = serde_json::from_slice(&payload)?;
    for key in STANDARD_CLAIMS {
        claims.extra.remove(key);
    }
    Ok(claims)
}

fn decoding_key(jwk: &JsonWebKey) -> Result<DecodingKey> {
    let missing = |component: &str| {
        Error::InvalidToken(format!(
            "{} key {} missing '{}' component",
            jwk.key_type, jwk.key_id, component
        ))
    };

    match jwk.key_type.as_str() {
        "RSA" => {
            let n = jwk.n.as_deref().ok_or_else(|| missing("n"))?;
            let e = jwk.e.as_deref().ok_or_else(|| missing("e"))?;
            Ok(DecodingKey::from_rsa_components(n, e)?)
        }
        "EC" => {
            let x = jwk.x.as_deref().ok_or_else(|| missing("x"))?;
            let y = jwk.y.as_deref().ok_or_else(|| missing("y"))?;
            Ok(DecodingKey::from_ec_components(x, y)?)
        }
        other => Err(Error::InvalidToken(format!("unsupported key type {}", other))),
    }
}

fn is_valid_issuer(issuer: &str) -> bool {
    issuer.starts_with("https://clerk.") || issuer.contains(".clerk.accounts")
}
