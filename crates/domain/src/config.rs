//! Configuration management
//!
//! Server configuration subset consumed by the SSO core. Loading and
//! validating the full server configuration is a collaborator concern; these
//! types are assumed well-formed by the time they reach the provider.

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub openid_settings: SsoSettings,
}

/// Settings for a single SSO service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SsoSettings {
    pub enable: bool,
    pub id: String,
    pub secret: String,
    pub scope: String,
    pub auth_endpoint: String,
    pub token_endpoint: String,
    pub user_api_endpoint: String,
    pub discovery_endpoint: String,
    pub button_text: String,
    pub button_color: String,
}

impl Default for SsoSettings {
    fn default() -> Self {
        Self {
            enable: false,
            id: String::new(),
            secret: String::new(),
            scope: "profile openid email".to_string(),
            auth_endpoint: String::new(),
            token_endpoint: String::new(),
            user_api_endpoint: String::new(),
            discovery_endpoint: String::new(),
            button_text: String::new(),
            button_color: "#145DBF".to_string(),
        }
    }
}
