//! Resource types returned by the Clerk Backend API
//!
//! These are plain deserialization targets. Every field the API may omit is
//! optional or defaulted, and unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

mod allowlist_identifier;
mod commerce;
mod invitation;
mod jwks;
mod oauth_application;
mod organization;
mod saml_connection;
mod session;
mod svix_webhook;
mod user;
mod waitlist_entry;

pub use allowlist_identifier::*;
pub use commerce::*;
pub use invitation::*;
pub use jwks::*;
pub use oauth_application::*;
pub use organization::*;
pub use saml_connection::*;
pub use session::*;
pub use svix_webhook::*;
pub use user::*;
pub use waitlist_entry::*;

/// Deserialize an explicit `null` as the type's default, the same as a
/// missing key. The API sends `null` for many empty lists and strings.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returned by endpoints that delete a resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletedResource {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub object: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub deleted: bool,
}

/// Result of a count endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalCount {
    #[serde(default, deserialize_with = "null_default")]
    pub object: String,
    #[serde(default, deserialize_with = "null_default")]
    pub total_count: i64,
}

/// A page of resources plus the total number of matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedList<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_default")]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "null_default")]
    pub total_count: i64,
}

impl<T> Default for PaginatedList<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total_count: 0,
        }
    }
}

impl<T> PaginatedList<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for PaginatedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
