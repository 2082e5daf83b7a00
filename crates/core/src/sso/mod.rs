//! Single sign-on provider plumbing
//!
//! The dispatch layer resolves a provider by service name from the
//! [`registry::ProviderRegistry`] and drives a login attempt through the
//! [`ports::OAuthProvider`] contract. The OpenID Connect implementation
//! lives in [`openid`].

pub mod openid;
pub mod ports;
pub mod registry;
