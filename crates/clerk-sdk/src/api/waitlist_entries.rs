//! Waitlist entries API

use crate::backend::{call_json, ApiRequest};
use crate::error::Result;
use crate::params::{ListParams, Query, ToQuery};
use crate::resources::{PaginatedList, WaitlistEntry};
use serde::Serialize;

const PATH: &str = "/waitlist_entries";

resource_client!(
    /// Client for the `/waitlist_entries` endpoints
    WaitlistEntryClient
);

#[derive(Debug, Clone, Default)]
pub struct ListWaitlistEntriesParams {
    pub pagination: ListParams,
    pub order_by: Option<String>,
    pub query: Option<String>,
    pub statuses: Vec<String>,
}

impl ToQuery for ListWaitlistEntriesParams {
    fn to_query(&self) -> Query {
        let mut q = self.pagination.to_query();
        q.set_opt("order_by", self.order_by.as_deref())
            .set_opt("query", self.query.as_deref())
            .add_all("status", &self.statuses);
        q
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateWaitlistEntryParams {
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<bool>,
}

impl WaitlistEntryClient {
    pub async fn list(
        &self,
        params: &ListWaitlistEntriesParams,
    ) -> Result<PaginatedList<WaitlistEntry>> {
        let request = ApiRequest::get(PATH).with_query(params);
        call_json(self.backend.as_ref(), request).await
    }

    /// Add an email address to the waitlist
    pub async fn create(&self, params: &CreateWaitlistEntryParams) -> Result<WaitlistEntry> {
        let request = ApiRequest::post(PATH).with_json(params)?;
        call_json(self.backend.as_ref(), request).await
    }
}
