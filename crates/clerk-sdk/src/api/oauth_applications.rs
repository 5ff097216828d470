//! OAuth applications API

use crate::backend::{call_json, join_path, ApiRequest};
use crate::error::Result;
use crate::params::ListParams;
use crate::resources::{DeletedResource, OAuthApplication, PaginatedList};
use serde::Serialize;

const PATH: &str = "/oauth_applications";

resource_client!(
    /// Client for the `/oauth_applications` endpoints
    OAuthApplicationClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOAuthApplicationParams {
    pub name: String,
    pub callback_url: String,
    /// Space-separated scopes
    pub scopes: String,
    pub public: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOAuthApplicationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<String>,
}

impl OAuthApplicationClient {
    pub async fn get(&self, id: &str) -> Result<OAuthApplication> {
        let path = join_path(PATH, &[id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    pub async fn list(&self, pagination: ListParams) -> Result<PaginatedList<OAuthApplication>> {
        let request = ApiRequest::get(PATH).with_query(&pagination);
        call_json(self.backend.as_ref(), request).await
    }

    /// Create an application; the response is the only one carrying the client secret
    pub async fn create(&self, params: &CreateOAuthApplicationParams) -> Result<OAuthApplication> {
        let request = ApiRequest::post(PATH).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &UpdateOAuthApplicationParams,
    ) -> Result<OAuthApplication> {
        let path = join_path(PATH, &[id])?;
        let request = ApiRequest::patch(path).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn delete(&self, id: &str) -> Result<DeletedResource> {
        let path = join_path(PATH, &[id])?;
        call_json(self.backend.as_ref(), ApiRequest::delete(path)).await
    }

    /// Issue a new client secret, invalidating the old one
    pub async fn rotate_client_secret(&self, id: &str) -> Result<OAuthApplication> {
        let path = join_path(PATH, &[id, "rotate_secret"])?;
        call_json(self.backend.as_ref(), ApiRequest::post(path)).await
    }
}
