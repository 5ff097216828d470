//! # Clerk SDK for Rust
//!
//! Rust client for the Clerk Backend API, the server-side API of the Clerk
//! user management platform.
//!
//! ## Features
//!
//! - **Resource clients**: users, sessions, organizations, invitations,
//!   allowlists, waitlists, OAuth applications, SAML connections, commerce
//! - **Token verification**: session JWTs checked against the instance JWKS
//! - **Webhook validation**: Svix signature verification for incoming events
//! - **Pluggable transport**: every call goes through the [`Backend`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clerk_sdk::api::users::ListUsersParams;
//! use clerk_sdk::{ClerkClient, Config, ListParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClerkClient::new(Config::new("sk_test_..."))?;
//!
//!     let params = ListUsersParams {
//!         pagination: ListParams::new(10, 0),
//!         ..Default::default()
//!     };
//!     let list = client.users().list(&params).await?;
//!     println!("{} of {} users", list.users.len(), list.total_count);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod jwt;
pub mod params;
pub mod resources;
pub mod webhook;

// Re-export main types
pub use backend::{ApiRequest, Backend, HttpBackend, MultipartFile};
pub use client::ClerkClient;
pub use config::Config;
pub use error::{ApiError, ApiErrorResponse, Error, Result};
pub use params::{ListParams, Query, ToQuery};
pub use resources::*;
