//! Application constants
//!
//! Centralized location for all domain-level constants used by the SSO core.

// Service identifiers
pub const SERVICE_OPENID: &str = "openid";

// Standard OpenID Connect userinfo claims
pub const CLAIM_SUB: &str = "sub";
pub const CLAIM_EMAIL: &str = "email";
pub const CLAIM_NAME: &str = "name";
pub const CLAIM_FIRST_NAME: &str = "first_name";
pub const CLAIM_LAST_NAME: &str = "last_name";
pub const CLAIM_USERNAME: &str = "username";
pub const CLAIM_NICKNAME: &str = "nickname";

// Custom claims required by the Daakia login policy
pub const CLAIM_DAAKIA_JWT_TOKEN: &str = "daakia_jwt_token";
pub const CLAIM_ORGANIZATION_NAME: &str = "organization_name";

// Prefix for auth data synthesized from the username when the provider
// supplies neither `sub` nor `email`
pub const OPENID_AUTH_DATA_PREFIX: &str = "openid_user_";
