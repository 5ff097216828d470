//! JWKS API

use crate::backend::{call_json, ApiRequest};
use crate::error::Result;
use crate::resources::JsonWebKeySet;

const PATH: &str = "/jwks";

resource_client!(
    /// Client for the instance JSON Web Key Set
    JwksClient
);

impl JwksClient {
    /// Fetch the instance's public signing keys.
    ///
    /// Every call goes to the network; callers verifying many tokens should
    /// keep the returned set themselves.
    pub async fn get(&self) -> Result<JsonWebKeySet> {
        tracing::debug!("fetching JWKS");
        call_json(self.backend.as_ref(), ApiRequest::get(PATH)).await
    }
}
