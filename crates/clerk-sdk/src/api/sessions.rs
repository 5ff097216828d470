//! Sessions API

use crate::backend::{call_json, join_path, ApiRequest};
use crate::error::Result;
use crate::params::{ListParams, Query, ToQuery};
use crate::resources::{PaginatedList, Session, SessionStatus, SessionToken};
use serde::Serialize;

const PATH: &str = "/sessions";

resource_client!(
    /// Client for the `/sessions` endpoints
    SessionClient
);

#[derive(Debug, Clone, Default)]
pub struct ListSessionsParams {
    pub pagination: ListParams,
    pub client_id: Option<String>,
    pub user_id: Option<String>,
    pub status: Option<SessionStatus>,
}

impl ToQuery for ListSessionsParams {
    fn to_query(&self) -> Query {
        let mut q = self.pagination.to_query();
        q.set_opt("client_id", self.client_id.as_deref())
            .set_opt("user_id", self.user_id.as_deref())
            .set_opt("status", self.status.as_ref().map(SessionStatus::as_str));
        q
    }
}

#[derive(Debug, Serialize)]
struct VerifyBody<'a> {
    token: &'a str,
}

impl SessionClient {
    pub async fn list(&self, params: &ListSessionsParams) -> Result<PaginatedList<Session>> {
        let request = ApiRequest::get(PATH).with_query(params);
        call_json(self.backend.as_ref(), request).await
    }

    pub async fn get(&self, id: &str) -> Result<Session> {
        let path = join_path(PATH, &[id])?;
        call_json(self.backend.as_ref(), ApiRequest::get(path)).await
    }

    /// Mark the session as revoked; the user is signed out of it
    pub async fn revoke(&self, id: &str) -> Result<Session> {
        let path = join_path(PATH, &[id, "revoke"])?;
        call_json(self.backend.as_ref(), ApiRequest::post(path)).await
    }

    /// Check that `token` is a valid token for the session
    pub async fn verify(&self, id: &str, token: &str) -> Result<Session> {
        let path = join_path(PATH, &[id, "verify"])?;
        let request = ApiRequest::post(path).with_json(&VerifyBody { token })?;
        call_json(self.backend.as_ref(), request).await
    }

    /// Mint a session token from the JWT template `template`
    pub async fn create_token_from_template(
        &self,
        id: &str,
        template: &str,
    ) -> Result<SessionToken> {
        let path = join_path(PATH, &[id, "token", template])?;
        call_json(self.backend.as_ref(), ApiRequest::post(path)).await
    }
}
