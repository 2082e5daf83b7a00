//! OpenID Connect claims mapping
//!
//! Transforms a decoded userinfo payload into a [`User`] record. Claims are
//! provider-controlled and untyped, so every field is extracted with an
//! explicit type check and skipped silently on mismatch. The mapping order
//! matters: later steps only fill fields earlier steps left empty, and the
//! auth-data fallback chain runs last so it can draw on the mapped email and
//! username.

use std::sync::Arc;

use daakia_domain::constants::{
    CLAIM_DAAKIA_JWT_TOKEN, CLAIM_EMAIL, CLAIM_FIRST_NAME, CLAIM_LAST_NAME, CLAIM_NAME,
    CLAIM_NICKNAME, CLAIM_ORGANIZATION_NAME, CLAIM_SUB, CLAIM_USERNAME, OPENID_AUTH_DATA_PREFIX,
    SERVICE_OPENID,
};
use daakia_domain::{Config, Result, SsoSettings, User};
use serde_json::{Map, Value};

use super::organizations;
use crate::sso::ports::OAuthProvider;
use crate::sso::registry::ProviderRegistry;

/// Claim-mapping policy knobs that differ across observed deployments
#[derive(Debug, Clone, Copy)]
pub struct MapperPolicy {
    /// Fall back to the `nickname` claim when no `username` claim is
    /// present. An explicit `username` claim always wins.
    pub nickname_fallback: bool,
    /// Require object-form organization entries to carry a non-empty
    /// `organization_name` field. When cleared, any object with a non-empty
    /// string field is accepted. Legacy plain-string entries are accepted
    /// under both settings.
    pub require_named_org_objects: bool,
}

impl Default for MapperPolicy {
    fn default() -> Self {
        Self { nickname_fallback: true, require_named_org_objects: true }
    }
}

/// OpenID Connect SSO provider
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenIdProvider {
    policy: MapperPolicy,
}

impl OpenIdProvider {
    /// Creates a provider with an explicit mapping policy.
    #[must_use]
    pub const fn new(policy: MapperPolicy) -> Self {
        Self { policy }
    }

    /// Maps decoded claims into a user record.
    ///
    /// Infallible by design: unusable claims are skipped, and the auth-data
    /// fallback chain guarantees `auth_data` is populated on every return.
    /// Required-claim enforcement happens separately in
    /// [`organizations::validate_required_claims`].
    fn map_claims(&self, claims: &Map<String, Value>) -> User {
        let mut user = User::default();

        if let Some(sub) = str_claim(claims, CLAIM_SUB) {
            user.auth_data = Some(sub.to_string());
        }

        if let Some(email) = str_claim(claims, CLAIM_EMAIL) {
            user.email = email.to_lowercase();
        }

        if let Some(name) = str_claim(claims, CLAIM_NAME) {
            let parts: Vec<&str> = name.split(' ').collect();
            if let Some(first) = parts.first() {
                user.first_name = (*first).to_string();
            }
            if parts.len() > 1 {
                user.last_name = parts[1..].join(" ");
            }
        }

        // Explicit given/family name claims win over the name split
        if let Some(given) = str_claim(claims, CLAIM_FIRST_NAME) {
            user.first_name = given.to_string();
        }
        if let Some(family) = str_claim(claims, CLAIM_LAST_NAME) {
            user.last_name = family.to_string();
        }

        if let Some(username) = str_claim(claims, CLAIM_USERNAME) {
            user.username = username.to_string();
        }
        if self.policy.nickname_fallback && user.username.is_empty() {
            if let Some(nickname) = str_claim(claims, CLAIM_NICKNAME) {
                user.username = nickname.to_string();
            }
        }
        if user.username.is_empty() && !user.email.is_empty() {
            user.username = user.email.split('@').next().unwrap_or("").to_string();
        }

        // Auth data must never be empty: the dispatch layer keys OAuth
        // identity lookups on it. Prefer `sub`, then email, then a value
        // synthesized from the username.
        if user.auth_data.as_deref().map_or(true, str::is_empty) {
            user.auth_data = if user.email.is_empty() {
                Some(format!("{OPENID_AUTH_DATA_PREFIX}{}", user.username.trim()))
            } else {
                Some(user.email.clone())
            };
        }

        if let Some(token) = str_claim(claims, CLAIM_DAAKIA_JWT_TOKEN) {
            user.set_prop(CLAIM_DAAKIA_JWT_TOKEN, token);
        }

        if let Some(org) = claims.get(CLAIM_ORGANIZATION_NAME) {
            if let Some(normalized) = organizations::normalize(org, self.policy) {
                user.set_prop(CLAIM_ORGANIZATION_NAME, normalized);
            }
        }

        user
    }
}

impl OAuthProvider for OpenIdProvider {
    fn user_from_json(&self, data: &[u8]) -> Result<User> {
        let claims: Map<String, Value> = serde_json::from_slice(data)?;
        tracing::debug!(claim_count = claims.len(), "decoded openid userinfo claims");

        let user = self.map_claims(&claims);
        organizations::validate_required_claims(&user, self.policy)?;

        tracing::debug!(
            auth_data = user.auth_data.as_deref().unwrap_or(""),
            email = %user.email,
            username = %user.username,
            "mapped openid user",
        );
        Ok(user)
    }

    fn sso_settings<'a>(&self, config: &'a Config, _service: &str) -> &'a SsoSettings {
        &config.openid_settings
    }

    fn user_from_id_token(&self, _id_token: &str) -> Result<User> {
        // ID-token decoding and signature validation live in the
        // token-exchange layer; this provider only maps userinfo and must
        // not fabricate identity data from an unverified token.
        Ok(User::default())
    }

    fn is_same_user(&self, db_user: &User, oauth_user: &User) -> bool {
        // An identity with no auth data can never match another record, even
        // when both sides are empty and thus trivially equal strings.
        match (db_user.auth_data.as_deref(), oauth_user.auth_data.as_deref()) {
            (Some(a), Some(b)) => !a.is_empty() && !b.is_empty() && a == b,
            _ => false,
        }
    }
}

/// Registers the OpenID provider in the given registry under its fixed
/// service identifier. Called once at process start.
pub fn register_openid_provider(registry: &ProviderRegistry) {
    registry.register(SERVICE_OPENID, Arc::new(OpenIdProvider::default()));
}

/// Extracts a claim as a non-empty string, skipping absent claims and any
/// other value type.
fn str_claim<'a>(claims: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    match claims.get(name) {
        Some(Value::String(value)) if !value.is_empty() => Some(value.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the claims mapper.
    use serde_json::json;

    use super::*;

    fn claims(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    /// Validates the primary identity mapping for the full-payload scenario.
    ///
    /// Assertions:
    /// - Confirms `auth_data` equals the `sub` claim.
    /// - Confirms the email is lower-cased.
    /// - Confirms `name` splits into first token and rejoined remainder.
    /// - Confirms the username claim is taken as-is.
    #[test]
    fn test_map_standard_claims() {
        let provider = OpenIdProvider::default();
        let user = provider.map_claims(&claims(json!({
            "sub": "idp-12345",
            "email": "Ada@Example.COM",
            "name": "Ada Lovelace Byron",
            "username": "ada"
        })));

        assert_eq!(user.auth_data.as_deref(), Some("idp-12345"));
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace Byron");
        assert_eq!(user.username, "ada");
    }

    /// Validates that explicit given/family name claims override the
    /// `name`-split derivation.
    #[test]
    fn test_explicit_name_claims_override_split() {
        let provider = OpenIdProvider::default();
        let user = provider.map_claims(&claims(json!({
            "name": "Ada Lovelace",
            "first_name": "Augusta",
            "last_name": "King"
        })));

        assert_eq!(user.first_name, "Augusta");
        assert_eq!(user.last_name, "King");
    }

    /// Validates username derivation order.
    ///
    /// Assertions:
    /// - Ensures `username` beats `nickname`.
    /// - Ensures `nickname` fills in when `username` is absent.
    /// - Ensures the email local-part is the final fallback.
    #[test]
    fn test_username_fallback_chain() {
        let provider = OpenIdProvider::default();

        let user = provider
            .map_claims(&claims(json!({"username": "ada", "nickname": "countess"})));
        assert_eq!(user.username, "ada");

        let user = provider.map_claims(&claims(json!({"nickname": "countess"})));
        assert_eq!(user.username, "countess");

        let user = provider.map_claims(&claims(json!({"email": "ada@example.com"})));
        assert_eq!(user.username, "ada");
    }

    /// Validates that the nickname fallback can be disabled by policy.
    #[test]
    fn test_nickname_fallback_disabled_by_policy() {
        let provider = OpenIdProvider::new(MapperPolicy {
            nickname_fallback: false,
            ..MapperPolicy::default()
        });

        let user = provider
            .map_claims(&claims(json!({"nickname": "countess", "email": "ada@example.com"})));
        assert_eq!(user.username, "ada");
    }

    /// Validates the auth-data fallback chain.
    ///
    /// Assertions:
    /// - Ensures a missing `sub` falls back to the lower-cased email.
    /// - Ensures a missing `sub` and email synthesizes from the trimmed
    ///   username.
    /// - Ensures `auth_data` is populated even for an empty payload.
    #[test]
    fn test_auth_data_fallback_chain() {
        let provider = OpenIdProvider::default();

        let user = provider.map_claims(&claims(json!({"email": "Ada@Example.COM"})));
        assert_eq!(user.auth_data.as_deref(), Some("ada@example.com"));

        let user = provider.map_claims(&claims(json!({"username": "bob"})));
        assert_eq!(user.auth_data.as_deref(), Some("openid_user_bob"));

        let user = provider.map_claims(&claims(json!({})));
        assert!(user.auth_data.as_deref().is_some_and(|a| !a.is_empty()));
    }

    /// Validates that non-string claim values are skipped silently.
    #[test]
    fn test_non_string_claims_are_skipped() {
        let provider = OpenIdProvider::default();
        let user = provider.map_claims(&claims(json!({
            "sub": 12345,
            "email": ["ada@example.com"],
            "username": "ada"
        })));

        assert_eq!(user.auth_data.as_deref(), Some("openid_user_ada"));
        assert!(user.email.is_empty());
    }

    /// Validates the identity equality rule.
    ///
    /// Assertions:
    /// - Ensures equal non-empty auth data matches.
    /// - Ensures differing auth data does not match.
    /// - Ensures empty or absent auth data never matches, even against
    ///   another empty value.
    #[test]
    fn test_is_same_user() {
        let provider = OpenIdProvider::default();
        let with = |auth_data: Option<&str>| User {
            auth_data: auth_data.map(str::to_string),
            ..User::default()
        };

        assert!(provider.is_same_user(&with(Some("idp-1")), &with(Some("idp-1"))));
        assert!(!provider.is_same_user(&with(Some("idp-1")), &with(Some("idp-2"))));
        assert!(!provider.is_same_user(&with(None), &with(Some("idp-1"))));
        assert!(!provider.is_same_user(&with(Some("")), &with(Some(""))));
        assert!(!provider.is_same_user(&with(None), &with(None)));
    }
}
