//! Organization claim normalization and required-claim validation
//!
//! The `organization_name` claim arrives in one of three shapes depending on
//! the identity provider generation: a plain string, a legacy array of
//! strings, or an array of objects carrying at least an `organization_name`
//! field plus role/active metadata. Normalization reduces all of them to a
//! single stored string form; validation then decides whether the login may
//! proceed.

use daakia_domain::constants::{CLAIM_DAAKIA_JWT_TOKEN, CLAIM_ORGANIZATION_NAME};
use daakia_domain::{User, ValidationError};
use serde_json::Value;

use super::provider::MapperPolicy;

/// Normalizes an `organization_name` claim value into its stored form.
///
/// A non-empty string is stored verbatim. An array is filtered to its valid
/// entries (see [`is_valid_entry`]) and re-serialized as a JSON array string;
/// invalid entries are dropped silently. Returns `None` when nothing
/// survives, in which case the prop key is omitted entirely.
pub(super) fn normalize(value: &Value, policy: MapperPolicy) -> Option<String> {
    match value {
        Value::String(org) if !org.is_empty() => Some(org.clone()),
        Value::Array(items) => {
            let retained: Vec<&Value> =
                items.iter().filter(|item| is_valid_entry(item, policy)).collect();
            if retained.is_empty() {
                None
            } else {
                serde_json::to_string(&retained).ok()
            }
        }
        _ => None,
    }
}

/// Whether a single organization entry is usable.
///
/// Object entries must carry a non-empty `organization_name` under the
/// default policy; role/active metadata rides along untouched. Legacy
/// plain-string entries are accepted whenever non-empty.
fn is_valid_entry(entry: &Value, policy: MapperPolicy) -> bool {
    match entry {
        // Legacy format: bare organization name
        Value::String(name) => !name.is_empty(),
        Value::Object(fields) => {
            if policy.require_named_org_objects {
                matches!(
                    fields.get(CLAIM_ORGANIZATION_NAME),
                    Some(Value::String(name)) if !name.is_empty()
                )
            } else {
                fields
                    .values()
                    .any(|field| matches!(field, Value::String(v) if !v.is_empty()))
            }
        }
        _ => false,
    }
}

/// Enforces the deployment's required-claim login policy on a mapped record.
///
/// Runs after mapping and before the record is returned: the session/linking
/// token must be present, and the normalized organization value must contain
/// at least one valid entry. Validation never retries; the provider's claims
/// will not change within a login attempt.
pub(super) fn validate_required_claims(
    user: &User,
    policy: MapperPolicy,
) -> Result<(), ValidationError> {
    if user.get_prop(CLAIM_DAAKIA_JWT_TOKEN).is_none() {
        return Err(ValidationError::missing_token());
    }

    let org = user.get_prop(CLAIM_ORGANIZATION_NAME).unwrap_or_default();
    if org.is_empty() || org == "[]" {
        return Err(ValidationError::missing_org());
    }

    // A string claim stored verbatim may itself hold a JSON array; apply the
    // same per-entry rule the normalizer uses.
    if let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(org) {
        if !entries.iter().any(|entry| is_valid_entry(entry, policy)) {
            return Err(ValidationError::invalid_org());
        }
    }

    Ok(())
}
