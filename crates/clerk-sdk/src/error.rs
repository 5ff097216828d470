//! Error types for the Clerk SDK

use crate::resources::null_default;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Clerk SDK operations
pub type Result<T> = std::result::Result<T, Error>;

/// A single error entry returned by the Clerk Backend API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, deserialize_with = "null_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_default")]
    pub long_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// Error envelope for every non-2xx response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// HTTP status code of the response
    #[serde(skip)]
    pub status: u16,

    #[serde(default, deserialize_with = "null_default")]
    pub errors: Vec<ApiError>,

    #[serde(rename = "clerk_trace_id", default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ApiErrorResponse {
    /// Decode an error envelope from a response body.
    ///
    /// Bodies that are not a valid envelope still produce an error carrying
    /// the status code, with an empty error list.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let mut response: ApiErrorResponse = serde_json::from_slice(body).unwrap_or_default();
        response.status = status;
        response
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(trace_id) = &self.trace_id {
            write!(f, " (trace {})", trace_id)?;
        }
        for err in &self.errors {
            write!(f, "; {}", err.code)?;
            if !err.long_message.is_empty() {
                write!(f, ": {}", err.long_message)?;
            } else if !err.message.is_empty() {
                write!(f, ": {}", err.message)?;
            }
        }
        Ok(())
    }
}

/// Error types for the Clerk SDK
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-2xx status
    #[error("API error: {0}")]
    Api(ApiErrorResponse),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file could not be read
    #[error("Failed to read config file: {0}")]
    ConfigFile(#[from] std::io::Error),

    /// Config file is not valid TOML
    #[error("Failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A path parameter was empty
    #[error("Invalid request path: {0}")]
    InvalidPath(String),

    /// Token could not be decoded or its signature/claims are invalid
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Token is structurally unusable
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token header algorithm does not match the signing key
    #[error("Invalid signing algorithm {0}")]
    InvalidSigningAlgorithm(String),

    /// Token issuer is not a Clerk issuer
    #[error("Invalid issuer {0}")]
    InvalidIssuer(String),

    /// Token azp claim is not one of the authorized parties
    #[error("Invalid authorized party {0}")]
    InvalidAuthorizedParty(String),

    /// No key in the JWKS matches the token kid
    #[error("No JWK found for kid {0}")]
    JwkNotFound(String),

    /// Webhook signature validation failed
    #[error("Invalid webhook signature: {0}")]
    InvalidSignature(String),

    /// Webhook timestamp expired
    #[error("Webhook timestamp expired")]
    TimestampExpired,

    /// Webhook timestamp in future
    #[error("Webhook timestamp in future")]
    TimestampInFuture,

    /// Missing required header
    #[error("Missing required header: {0}")]
    MissingHeader(String),
}

impl Error {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(response) => Some(response.status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Trace ID Clerk attached to an API error
    pub fn trace_id(&self) -> Option<&str> {
        match self {
            Error::Api(response) => response.trace_id.as_deref(),
            _ => None,
        }
    }

    /// The API error envelope, if this is an API error
    pub fn api_error(&self) -> Option<&ApiErrorResponse> {
        match self {
            Error::Api(response) => Some(response),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if a caller may reasonably retry the request
    pub fn is_retryable(&self) -> bool {
        matches!(self.status(), Some(429) | Some(500..=599))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_from_body() {
        let body = br#"{"errors":[{"code":"form_identifier_not_found","message":"not found","long_message":"User not found"}],"clerk_trace_id":"trace_123"}"#;
        let response = ApiErrorResponse::from_body(404, body);

        assert_eq!(response.status, 404);
        assert_eq!(response.trace_id.as_deref(), Some("trace_123"));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].code, "form_identifier_not_found");
    }

    #[test]
    fn test_error_envelope_with_null_fields() {
        let body = br#"{"errors":[{"code":"session_exists","message":null,"long_message":null,"meta":null}],"clerk_trace_id":null}"#;
        let response = ApiErrorResponse::from_body(400, body);

        assert_eq!(response.errors[0].code, "session_exists");
        assert!(response.errors[0].long_message.is_empty());
        assert!(response.trace_id.is_none());
    }

    #[test]
    fn test_error_envelope_from_garbage_body() {
        let response = ApiErrorResponse::from_body(502, b"<html>bad gateway</html>");

        assert_eq!(response.status, 502);
        assert!(response.errors.is_empty());
        assert!(response.trace_id.is_none());
    }

    #[test]
    fn test_status_helpers() {
        let not_found = Error::Api(ApiErrorResponse {
            status: 404,
            ..Default::default()
        });
        assert!(not_found.is_not_found());
        assert!(!not_found.is_retryable());

        let rate_limited = Error::Api(ApiErrorResponse {
            status: 429,
            ..Default::default()
        });
        assert!(rate_limited.is_retryable());

        assert_eq!(Error::TimestampExpired.status(), None);
    }

    #[test]
    fn test_display_includes_trace_and_codes() {
        let err = Error::Api(ApiErrorResponse {
            status: 422,
            errors: vec![ApiError {
                code: "form_param_missing".to_string(),
                long_message: "email_address is missing".to_string(),
                ..Default::default()
            }],
            trace_id: Some("abc".to_string()),
        });

        let text = err.to_string();
        assert!(text.contains("HTTP 422"));
        assert!(text.contains("trace abc"));
        assert!(text.contains("form_param_missing: email_address is missing"));
    }
}
