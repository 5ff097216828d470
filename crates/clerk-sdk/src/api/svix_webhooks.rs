//! Svix webhooks API
//!
//! Enables and manages the Svix application that delivers the instance's
//! webhooks. See [`crate::webhook`] for verifying deliveries.

use crate::backend::{call_json, ApiRequest};
use crate::error::Result;
use crate::resources::SvixWebhook;

const PATH: &str = "/webhooks/svix";
const URL_PATH: &str = "/webhooks/svix_url";

resource_client!(
    /// Client for the `/webhooks/svix` endpoints
    SvixWebhookClient
);

impl SvixWebhookClient {
    /// Create the Svix application and return its dashboard URL
    pub async fn create(&self) -> Result<SvixWebhook> {
        call_json(self.backend.as_ref(), ApiRequest::post(PATH)).await
    }

    /// Delete the Svix application
    pub async fn delete(&self) -> Result<SvixWebhook> {
        call_json(self.backend.as_ref(), ApiRequest::delete(PATH)).await
    }

    /// Generate a fresh dashboard URL
    pub async fn refresh_url(&self) -> Result<SvixWebhook> {
        call_json(self.backend.as_ref(), ApiRequest::post(URL_PATH)).await
    }
}
