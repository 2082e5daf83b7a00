//! OpenID Connect SSO provider
//!
//! Maps raw OIDC userinfo claims into a [`daakia_domain::User`] record and
//! enforces the deployment's required-claim login policy.

mod organizations;
mod provider;

pub use provider::{register_openid_provider, MapperPolicy, OpenIdProvider};
