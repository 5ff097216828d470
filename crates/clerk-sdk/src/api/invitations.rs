//! Invitations API

use crate::backend::{call_json, join_path, ApiRequest};
use crate::error::Result;
use crate::params::{ListParams, Query, ToQuery};
use crate::resources::{Invitation, PaginatedList};
use serde::Serialize;

const PATH: &str = "/invitations";

resource_client!(
    /// Client for the `/invitations` endpoints
    InvitationClient
);

#[derive(Debug, Clone, Default)]
pub struct ListInvitationsParams {
    pub pagination: ListParams,
    pub order_by: Option<String>,
    pub query: Option<String>,
    pub statuses: Vec<String>,
}

impl ToQuery for ListInvitationsParams {
    fn to_query(&self) -> Query {
        let mut q = self.pagination.to_query();
        q.set("paginated", "true")
            .set_opt("order_by", self.order_by.as_deref())
            .set_opt("query", self.query.as_deref())
            .add_all("status", &self.statuses);
        q
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInvitationParams {
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<bool>,
    /// Create the invitation even if one is already pending for the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_existing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_days: Option<i64>,
}

impl InvitationClient {
    /// List invitations; the response is always the paginated envelope
    pub async fn list(&self, params: &ListInvitationsParams) -> Result<PaginatedList<Invitation>> {
        let request = ApiRequest::get(PATH).with_query(params);
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn create(&self, params: &CreateInvitationParams) -> Result<Invitation> {
        let request = ApiRequest::post(PATH).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    /// Create several invitations in one request
    pub async fn bulk_create(&self, params: &[CreateInvitationParams]) -> Result<Vec<Invitation>> {
        let path = join_path(PATH, &["bulk"])?;
        let request = ApiRequest::post(path).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn revoke(&self, id: &str) -> Result<Invitation> {
        let path = join_path(PATH, &[id, "revoke"])?;
        call_json(self.backend.as_ref(), ApiRequest::post(path)).await
    }
}
