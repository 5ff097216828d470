//! Webhook signature validation
//!
//! Clerk delivers webhooks through Svix. Each delivery carries three headers:
//! a message ID, a Unix timestamp, and one or more `v1,<base64>` HMAC-SHA256
//! signatures of `{id}.{timestamp}.{body}`.
//!
//! ## Example
//!
//! ```rust
//! use clerk_sdk::webhook::{WebhookHeaders, WebhookValidator};
//!
//! # fn main() -> clerk_sdk::Result<()> {
//! let validator = WebhookValidator::new("whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw")?;
//! let body = br#"{"type":"user.created","object":"event","data":{}}"#;
//!
//! // A real handler reads these from the request
//! let (signature, timestamp) = validator.sign("msg_1", body)?;
//! let headers = WebhookHeaders {
//!     id: "msg_1".to_string(),
//!     timestamp,
//!     signature,
//! };
//!
//! let event = validator.verify_event(&headers, body)?;
//! assert_eq!(event.event_type, "user.created");
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::resources::null_default;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

pub const ID_HEADER: &str = "svix-id";
pub const TIMESTAMP_HEADER: &str = "svix-timestamp";
pub const SIGNATURE_HEADER: &str = "svix-signature";

const SECRET_PREFIX: &str = "whsec_";
const SIGNATURE_VERSION: &str = "v1";

/// Webhook signature validator
#[derive(Clone)]
pub struct WebhookValidator {
    key: Vec<u8>,
    /// Maximum distance between the delivery timestamp and now, either way
    /// (default: 300 seconds)
    pub tolerance: Duration,
}

impl std::fmt::Debug for WebhookValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookValidator")
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

impl WebhookValidator {
    /// Create a validator from the endpoint's signing secret (`whsec_...`)
    pub fn new(secret: &str) -> Result<Self> {
        let encoded = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
        let key = BASE64
            .decode(encoded)
            .map_err(|e| Error::Config(format!("Invalid webhook signing secret: {}", e)))?;
        Ok(Self::from_key(key))
    }

    /// Create a validator from the raw (decoded) signing key
    pub fn from_key(key: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            tolerance: Duration::from_secs(300),
        }
    }

    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate a delivery.
    ///
    /// `signature` may list several space-separated signatures; the delivery
    /// is valid if any `v1` entry matches.
    pub fn validate(&self, headers: &WebhookHeaders, body: &[u8]) -> Result<()> {
        let ts: i64 = headers.timestamp.trim().parse().map_err(|_| {
            Error::InvalidSignature(format!("Invalid timestamp format: {}", headers.timestamp))
        })?;
        self.validate_timestamp(ts)?;

        let expected = self.compute_signature(&headers.id, &headers.timestamp, body)?;
        let expected = expected.as_bytes();

        let matched = headers
            .signature
            .split_whitespace()
            .filter_map(|entry| entry.split_once(','))
            .filter(|(version, _)| *version == SIGNATURE_VERSION)
            .any(|(_, signature)| bool::from(signature.as_bytes().ct_eq(expected)));

        if !matched {
            return Err(Error::InvalidSignature("No matching signature found".to_string()));
        }
        Ok(())
    }

    /// Validate a delivery and decode its event payload
    pub fn verify_event(&self, headers: &WebhookHeaders, body: &[u8]) -> Result<WebhookEvent> {
        self.validate(headers, body)?;
        Ok(serde_json::from_slice(body)?)
    }

    fn validate_timestamp(&self, timestamp: i64) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let tolerance = i64::try_from(self.tolerance.as_secs()).unwrap_or(i64::MAX);

        if timestamp < now.saturating_sub(tolerance) {
            return Err(Error::TimestampExpired);
        }
        if timestamp > now.saturating_add(tolerance) {
            return Err(Error::TimestampInFuture);
        }
        Ok(())
    }

    /// Base64 signature of a delivery, without the version prefix
    pub fn compute_signature(&self, id: &str, timestamp: &str, body: &[u8]) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|e| Error::Config(format!("Invalid webhook signing key: {}", e)))?;

        mac.update(id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(body);

        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }

    /// Sign `body` as if delivered now, for tests.
    ///
    /// Returns the `svix-signature` header value and the timestamp.
    pub fn sign(&self, id: &str, body: &[u8]) -> Result<(String, String)> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.compute_signature(id, &timestamp, body)?;
        Ok((format!("{},{}", SIGNATURE_VERSION, signature), timestamp))
    }
}

/// Svix headers of a webhook delivery
#[derive(Debug, Clone, Default)]
pub struct WebhookHeaders {
    pub id: String,
    pub timestamp: String,
    pub signature: String,
}

impl WebhookHeaders {
    /// Extract the webhook headers through a header lookup function.
    ///
    /// Works with any HTTP framework's header map.
    pub fn from_headers<F>(get_header: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let id = get_header(ID_HEADER).ok_or_else(|| Error::MissingHeader(ID_HEADER.to_string()))?;

        let timestamp = get_header(TIMESTAMP_HEADER)
            .ok_or_else(|| Error::MissingHeader(TIMESTAMP_HEADER.to_string()))?;

        let signature = get_header(SIGNATURE_HEADER)
            .ok_or_else(|| Error::MissingHeader(SIGNATURE_HEADER.to_string()))?;

        Ok(Self {
            id,
            timestamp,
            signature,
        })
    }
}

/// Envelope of every Clerk webhook event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookEvent {
    /// Event type, e.g. `user.created`
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub event_type: String,
    #[serde(deserialize_with = "null_default")]
    pub object: String,
    /// The resource the event is about
    pub data: serde_json::Value,
    pub timestamp: Option<i64>,
    pub instance_id: Option<String>,
}

impl WebhookEvent {
    /// Deserialize the event data into a resource type
    pub fn data_as<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw";

    fn signed_headers(validator: &WebhookValidator, body: &[u8]) -> WebhookHeaders {
        let (signature, timestamp) = validator.sign("msg_1", body).unwrap();
        WebhookHeaders {
            id: "msg_1".to_string(),
            timestamp,
            signature,
        }
    }

    #[test]
    fn test_signature_computation() {
        let validator = WebhookValidator::new(SECRET).unwrap();
        let sig1 = validator.compute_signature("msg_1", "1704067200", b"body").unwrap();
        let sig2 = validator.compute_signature("msg_1", "1704067200", b"body").unwrap();
        let sig3 = validator.compute_signature("msg_2", "1704067200", b"body").unwrap();

        assert_eq!(sig1, sig2);
        assert_ne!(sig1, sig3);
    }

    #[test]
    fn test_sign_and_validate() {
        let validator = WebhookValidator::new(SECRET).unwrap();
        let body = b"test webhook payload";
        let headers = signed_headers(&validator, body);

        assert!(validator.validate(&headers, body).is_ok());
    }

    #[test]
    fn test_any_listed_signature_matches() {
        let validator = WebhookValidator::new(SECRET).unwrap();
        let body = b"payload";
        let mut headers = signed_headers(&validator, body);
        headers.signature = format!("v1,bm90LWl0 v2,ignored {}", headers.signature);

        assert!(validator.validate(&headers, body).is_ok());
    }

    #[test]
    fn test_invalid_signature() {
        let validator = WebhookValidator::new(SECRET).unwrap();
        let body = b"test body";
        let mut headers = signed_headers(&validator, body);
        headers.signature = "v1,aW52YWxpZA==".to_string();

        let result = validator.validate(&headers, body);
        assert!(matches!(result, Err(Error::InvalidSignature(_))));
    }

    #[test]
    fn test_tampered_body() {
        let validator = WebhookValidator::new(SECRET).unwrap();
        let headers = signed_headers(&validator, b"original");

        let result = validator.validate(&headers, b"tampered");
        assert!(matches!(result, Err(Error::InvalidSignature(_))));
    }

    #[test]
    fn test_timestamp_window() {
        let validator = WebhookValidator::new(SECRET).unwrap();
        let body = b"body";
        let now = chrono::Utc::now().timestamp();

        let old = (now - 600).to_string();
        let headers = WebhookHeaders {
            id: "msg_1".to_string(),
            signature: format!(
                "v1,{}",
                validator.compute_signature("msg_1", &old, body).unwrap()
            ),
            timestamp: old,
        };
        assert!(matches!(
            validator.validate(&headers, body),
            Err(Error::TimestampExpired)
        ));

        let future = (now + 600).to_string();
        let headers = WebhookHeaders {
            id: "msg_1".to_string(),
            signature: format!(
                "v1,{}",
                validator.compute_signature("msg_1", &future, body).unwrap()
            ),
            timestamp: future,
        };
        assert!(matches!(
            validator.validate(&headers, body),
            Err(Error::TimestampInFuture)
        ));
    }

    #[test]
    fn test_huge_tolerance_accepts_any_timestamp() {
        let validator = WebhookValidator::new(SECRET)
            .unwrap()
            .with_tolerance(Duration::from_secs(u64::MAX));
        let body = b"body";

        for ts in ["0", "9999999999"] {
            let headers = WebhookHeaders {
                id: "msg_1".to_string(),
                signature: format!(
                    "v1,{}",
                    validator.compute_signature("msg_1", ts, body).unwrap()
                ),
                timestamp: ts.to_string(),
            };
            assert!(validator.validate(&headers, body).is_ok());
        }
    }

    #[test]
    fn test_invalid_secret() {
        assert!(matches!(
            WebhookValidator::new("whsec_***not base64***"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_headers_from_lookup() {
        let headers = WebhookHeaders::from_headers(|name| match name {
            ID_HEADER => Some("msg_1".to_string()),
            TIMESTAMP_HEADER => Some("1704067200".to_string()),
            _ => None,
        });

        assert!(matches!(headers, Err(Error::MissingHeader(h)) if h == SIGNATURE_HEADER));
    }

    #[test]
    fn test_verify_event() {
        let validator = WebhookValidator::new(SECRET).unwrap();
        let body = br#"{"type":"user.deleted","object":"event","data":{"id":"user_1","deleted":true}}"#;
        let headers = signed_headers(&validator, body);

        let event = validator.verify_event(&headers, body).unwrap();
        assert_eq!(event.event_type, "user.deleted");
        let deleted: crate::resources::DeletedResource = event.data_as().unwrap();
        assert!(deleted.deleted);
    }
}
