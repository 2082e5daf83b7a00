//! Port interfaces for SSO providers
//!
//! These traits define the boundary between the OAuth dispatch layer and a
//! concrete SSO provider implementation. Every operation is synchronous and
//! stateless: providers operate only on their inputs and allocate only their
//! own output, so concurrent login attempts need no coordination.

use daakia_domain::{Config, Result, SsoSettings, User};

/// Contract a registered SSO provider exposes to the dispatch layer
pub trait OAuthProvider: Send + Sync {
    /// Maps a decoded userinfo payload into a [`User`] record, applying the
    /// provider's fallback and validation rules.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload is not valid JSON or when a claim
    /// required by the deployment's login policy is missing or invalid. On
    /// any error no user record must be persisted or used downstream.
    fn user_from_json(&self, data: &[u8]) -> Result<User>;

    /// Returns the provider's section of the server configuration.
    ///
    /// Pure passthrough; the configuration loader guarantees well-formedness.
    fn sso_settings<'a>(&self, config: &'a Config, service: &str) -> &'a SsoSettings;

    /// Extracts a user from a raw ID token, for providers that support it.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider supports ID-token extraction and
    /// the token is unusable.
    fn user_from_id_token(&self, id_token: &str) -> Result<User>;

    /// Whether two records refer to the same external identity.
    fn is_same_user(&self, db_user: &User, oauth_user: &User) -> bool;
}
