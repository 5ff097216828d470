//! Commerce features

use crate::backend::{join_path, ApiRequest};
use crate::error::Result;
use crate::params::{ListParams, ToQuery};
use crate::resources::{CommerceFeature, CommerceFeatureList};
use serde::Serialize;

const RESOURCE: &str = "features";

resource_client!(
    /// Client for `/commerce/features`
    CommerceFeatureClient
);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommerceFeatureParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Plans the feature is attached to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommerceFeatureParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

impl CommerceFeatureClient {
    pub async fn create(&self, params: &CreateCommerceFeatureParams) -> Result<CommerceFeature> {
        super::create(self.backend.as_ref(), RESOURCE, params).await
    }

    pub async fn list(&self, pagination: ListParams) -> Result<CommerceFeatureList> {
        super::list(self.backend.as_ref(), RESOURCE, &pagination).await
    }

    /// Features attached to one plan
    pub async fn list_by_plan_id(
        &self,
        plan_id: &str,
        pagination: ListParams,
    ) -> Result<CommerceFeatureList> {
        let mut q = pagination.to_query();
        q.set("plan_id", plan_id);
        super::list(self.backend.as_ref(), RESOURCE, &q).await
    }

    pub async fn get(&self, id: &str) -> Result<CommerceFeature> {
        super::get(self.backend.as_ref(), RESOURCE, id).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &UpdateCommerceFeatureParams,
    ) -> Result<CommerceFeature> {
        super::update(self.backend.as_ref(), RESOURCE, id, params).await
    }

    /// Delete a feature. The endpoint answers with an empty body.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = join_path(super::PATH, &[RESOURCE, id])?;
        self.backend.call(ApiRequest::delete(path)).await?;
        Ok(())
    }
}
