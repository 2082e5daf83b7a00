//! User record types
//!
//! User record constructed from SSO claims and handed to the persistence
//! layer. Constructed fresh per login attempt; never cached or mutated by
//! the SSO core after mapping completes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// User record produced by SSO claim mapping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    /// Provider-stable identity key used to match this external identity to
    /// an internal account across logins. Never empty after a successful
    /// mapping.
    pub auth_data: Option<String>,
    /// Email address, lower-cased when present.
    pub email: String,
    /// Login name. Empty only when neither a username-like claim nor an
    /// email was usable.
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Auxiliary provider-specific attributes. Only populated keys are set;
    /// values are never stored as empty strings.
    #[serde(default)]
    pub props: HashMap<String, String>,
}

impl User {
    /// Stores an auxiliary attribute, discarding empty values so the props
    /// bag only ever carries populated keys.
    pub fn set_prop(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.props.insert(key.into(), value);
        }
    }

    /// Gets an auxiliary attribute value.
    #[must_use]
    pub fn get_prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }
}
