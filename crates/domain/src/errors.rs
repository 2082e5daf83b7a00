//! Error types used throughout the SSO core

use thiserror::Error;

use crate::constants::{CLAIM_DAAKIA_JWT_TOKEN, CLAIM_ORGANIZATION_NAME};

/// Operation name reported to the dispatch layer for claim-mapping failures.
pub const OP_GET_USER_FROM_JSON: &str = "GetUserFromJSON";

/// Stable machine-readable code: the session/linking token claim is absent.
pub const CODE_MISSING_TOKEN: &str = "missing_token";
/// Stable machine-readable code: the organization claim is absent or empty.
pub const CODE_MISSING_ORG: &str = "missing_org";
/// Stable machine-readable code: the organization claim has no valid entry.
pub const CODE_INVALID_ORG: &str = "invalid_org";

/// Main error type for SSO claim mapping
#[derive(Error, Debug)]
pub enum AuthError {
    /// The userinfo payload was not valid JSON. Propagated verbatim; the
    /// login attempt is aborted before any field mapping takes place.
    #[error("failed to decode userinfo payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required custom claim was missing, empty, or structurally empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AuthError {
    /// Returns the validation failure, if this is one.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Decode(_) => None,
        }
    }
}

/// How a required claim failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// The claim is absent or empty.
    MissingRequiredClaim,
    /// The claim is present but structurally invalid.
    InvalidClaim,
}

/// Structured validation failure surfaced to the dispatch layer as a
/// 400-class application error with a stable code and the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("GetUserFromJSON: claim `{field}` rejected ({code})")]
pub struct ValidationError {
    /// Failure category.
    pub kind: ValidationKind,
    /// Name of the offending claim.
    pub field: &'static str,
    /// Machine-readable error code.
    pub code: &'static str,
}

impl ValidationError {
    /// The session/linking token claim is absent or empty.
    #[must_use]
    pub const fn missing_token() -> Self {
        Self {
            kind: ValidationKind::MissingRequiredClaim,
            field: CLAIM_DAAKIA_JWT_TOKEN,
            code: CODE_MISSING_TOKEN,
        }
    }

    /// The organization claim is absent, empty, or an empty array.
    #[must_use]
    pub const fn missing_org() -> Self {
        Self {
            kind: ValidationKind::MissingRequiredClaim,
            field: CLAIM_ORGANIZATION_NAME,
            code: CODE_MISSING_ORG,
        }
    }

    /// The organization claim is an array with no valid entry.
    #[must_use]
    pub const fn invalid_org() -> Self {
        Self {
            kind: ValidationKind::InvalidClaim,
            field: CLAIM_ORGANIZATION_NAME,
            code: CODE_INVALID_ORG,
        }
    }

    /// Operation name for the dispatch layer's error contract.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        OP_GET_USER_FROM_JSON
    }

    /// HTTP status for the dispatch layer's error contract. Validation
    /// failures are never retried, so this is always a client error.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        400
    }
}

/// Result type alias for SSO operations
pub type Result<T> = std::result::Result<T, AuthError>;
