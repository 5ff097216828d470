//! Per-resource API clients
//!
//! Each client maps its methods one-to-one onto Backend API endpoints. All
//! clients are cheap to clone and share one [`Backend`](crate::Backend).

/// Declares a resource client struct holding a shared backend.
macro_rules! resource_client {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            backend: std::sync::Arc<dyn crate::backend::Backend>,
        }

        impl $name {
            pub fn new(backend: std::sync::Arc<dyn crate::backend::Backend>) -> Self {
                Self { backend }
            }

            /// Create a client with its own HTTP backend
            pub fn from_config(config: crate::config::Config) -> crate::error::Result<Self> {
                let backend = crate::backend::HttpBackend::new(config)?;
                Ok(Self::new(std::sync::Arc::new(backend)))
            }
        }
    };
}

pub mod allowlist_identifiers;
pub mod commerce;
pub mod invitations;
pub mod jwks;
pub mod oauth_applications;
pub mod organization_invitations;
pub mod organization_memberships;
pub mod organizations;
pub mod saml_connections;
pub mod sessions;
pub mod svix_webhooks;
pub mod users;
pub mod waitlist_entries;
