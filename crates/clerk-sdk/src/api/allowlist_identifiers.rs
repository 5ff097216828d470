//! Allowlist identifiers API

use crate::backend::{call_json, join_path, ApiRequest};
use crate::error::Result;
use crate::params::{ListParams, ToQuery};
use crate::resources::{AllowlistIdentifier, DeletedResource, PaginatedList};
use serde::Serialize;

const PATH: &str = "/allowlist_identifiers";

resource_client!(
    /// Client for the `/allowlist_identifiers` endpoints
    AllowlistIdentifierClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAllowlistIdentifierParams {
    /// Email address, phone number, domain or web3 wallet
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<bool>,
}

impl AllowlistIdentifierClient {
    pub async fn create(
        &self,
        params: &CreateAllowlistIdentifierParams,
    ) -> Result<AllowlistIdentifier> {
        let request = ApiRequest::post(PATH).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn delete(&self, id: &str) -> Result<DeletedResource> {
        let path = join_path(PATH, &[id])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    pub async fn list(&self, pagination: ListParams) -> Result<PaginatedList<AllowlistIdentifier>> {
        let mut q = pagination.to_query();
        q.set("paginated", "true");
        call_json(self.backend.as_ref(), ApiRequest::get(PATH).with_query(&q)).await
    }
}
