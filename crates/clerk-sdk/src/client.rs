//! High-level Clerk client

use crate::api::allowlist_identifiers::AllowlistIdentifierClient;
use crate::api::commerce::features::CommerceFeatureClient;
use crate::api::commerce::integrations::CommerceIntegrationClient;
use crate::api::commerce::invoices::CommerceInvoiceClient;
use crate::api::commerce::payees::CommercePayeeClient;
use crate::api::commerce::payers::CommercePayerClient;
use crate::api::commerce::payment_attempts::CommercePaymentAttemptClient;
use crate::api::commerce::payment_sources::CommercePaymentSourceClient;
use crate::api::commerce::plans::CommercePlanClient;
use crate::api::commerce::products::CommerceProductClient;
use crate::api::commerce::subscriptions::CommerceSubscriptionClient;
use crate::api::commerce::CommerceClient;
use crate::api::invitations::InvitationClient;
use crate::api::jwks::JwksClient;
use crate::api::oauth_applications::OAuthApplicationClient;
use crate::api::organization_invitations::OrganizationInvitationClient;
use crate::api::organization_memberships::OrganizationMembershipClient;
use crate::api::organizations::OrganizationClient;
use crate::api::saml_connections::SamlConnectionClient;
use crate::api::sessions::SessionClient;
use crate::api::svix_webhooks::SvixWebhookClient;
use crate::api::users::UserClient;
use crate::api::waitlist_entries::WaitlistEntryClient;
use crate::backend::{Backend, HttpBackend};
use crate::config::Config;
use crate::error::Result;
use crate::jwt::{self, SessionClaims, VerifyParams};
use std::sync::Arc;

/// Clerk Backend API client
///
/// Owns one [`Backend`] and hands out resource clients that share it.
/// Cloning is cheap.
#[derive(Debug, Clone)]
pub struct ClerkClient {
    backend: Arc<dyn Backend>,
}

impl ClerkClient {
    /// Create a client over HTTP after validating the configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_backend(Arc::new(HttpBackend::new(config)?)))
    }

    /// Create a client from `clerk.toml` and `CLERK_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(Config::load()?)
    }

    /// Create a client over a custom transport
    pub fn with_backend(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.backend)
    }

    pub fn users(&self) -> UserClient {
        UserClient::new(self.backend())
    }

    pub fn sessions(&self) -> SessionClient {
        SessionClient::new(self.backend())
    }

    pub fn organizations(&self) -> OrganizationClient {
        OrganizationClient::new(self.backend())
    }

    pub fn organization_memberships(&self) -> OrganizationMembershipClient {
        OrganizationMembershipClient::new(self.backend())
    }

    pub fn organization_invitations(&self) -> OrganizationInvitationClient {
        OrganizationInvitationClient::new(self.backend())
    }

    pub fn invitations(&self) -> InvitationClient {
        InvitationClient::new(self.backend())
    }

    pub fn allowlist_identifiers(&self) -> AllowlistIdentifierClient {
        AllowlistIdentifierClient::new(self.backend())
    }

    pub fn waitlist_entries(&self) -> WaitlistEntryClient {
        WaitlistEntryClient::new(self.backend())
    }

    pub fn oauth_applications(&self) -> OAuthApplicationClient {
        OAuthApplicationClient::new(self.backend())
    }

    pub fn saml_connections(&self) -> SamlConnectionClient {
        SamlConnectionClient::new(self.backend())
    }

    pub fn svix_webhooks(&self) -> SvixWebhookClient {
        SvixWebhookClient::new(self.backend())
    }

    pub fn jwks(&self) -> JwksClient {
        JwksClient::new(self.backend())
    }

    pub fn commerce(&self) -> CommerceClient {
        CommerceClient::new(self.backend())
    }

    pub fn commerce_products(&self) -> CommerceProductClient {
        CommerceProductClient::new(self.backend())
    }

    pub fn commerce_plans(&self) -> CommercePlanClient {
        CommercePlanClient::new(self.backend())
    }

    pub fn commerce_features(&self) -> CommerceFeatureClient {
        CommerceFeatureClient::new(self.backend())
    }

    pub fn commerce_subscriptions(&self) -> CommerceSubscriptionClient {
        CommerceSubscriptionClient::new(self.backend())
    }

    pub fn commerce_invoices(&self) -> CommerceInvoiceClient {
        CommerceInvoiceClient::new(self.backend())
    }

    pub fn commerce_payment_attempts(&self) -> CommercePaymentAttemptClient {
        CommercePaymentAttemptClient::new(self.backend())
    }

    pub fn commerce_payment_sources(&self) -> CommercePaymentSourceClient {
        CommercePaymentSourceClient::new(self.backend())
    }

    pub fn commerce_payers(&self) -> CommercePayerClient {
        CommercePayerClient::new(self.backend())
    }

    pub fn commerce_payees(&self) -> CommercePayeeClient {
        CommercePayeeClient::new(self.backend())
    }

    pub fn commerce_integrations(&self) -> CommerceIntegrationClient {
        CommerceIntegrationClient::new(self.backend())
    }

    /// Verify a session token, fetching the JWKS through this client when
    /// `params` carries no key
    pub async fn verify_token(&self, params: &VerifyParams) -> Result<SessionClaims> {
        jwt::verify(&self.jwks(), params).await
    }
}
