//! # Daakia Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The OAuth provider port consumed by the dispatch layer
//! - The injectable provider registry
//! - The OpenID Connect claims mapper
//!
//! ## Architecture Principles
//! - Only depends on `daakia-domain`
//! - No database, HTTP, or token-exchange code
//! - All external collaborators via traits
//! - Pure, testable business logic

pub mod sso;

// Re-export specific items to avoid ambiguity
pub use sso::openid::{register_openid_provider, MapperPolicy, OpenIdProvider};
pub use sso::ports::OAuthProvider;
pub use sso::registry::ProviderRegistry;
