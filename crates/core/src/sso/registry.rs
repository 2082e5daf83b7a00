//! Provider registry
//!
//! Injectable lookup table mapping a service name to its SSO provider.
//! Registration happens once at process start; lookups afterwards are
//! concurrent reads. Held behind an `RwLock` so the single startup write is
//! synchronized with any in-flight reads.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::ports::OAuthProvider;

/// Process-wide SSO provider lookup table, injected into the dispatch layer
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<HashMap<String, Arc<dyn OAuthProvider>>>,
}

impl ProviderRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider under a service name, replacing any previous
    /// registration for that service.
    pub fn register(&self, service: impl Into<String>, provider: Arc<dyn OAuthProvider>) {
        let service = service.into();
        tracing::info!(service = %service, "registered SSO provider");
        self.providers.write().insert(service, provider);
    }

    /// Looks up the provider registered for a service name.
    #[must_use]
    pub fn get(&self, service: &str) -> Option<Arc<dyn OAuthProvider>> {
        self.providers.read().get(service).cloned()
    }

    /// Returns the registered service names.
    #[must_use]
    pub fn services(&self) -> Vec<String> {
        self.providers.read().keys().cloned().collect()
    }
}
