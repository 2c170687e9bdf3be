//! Completion service trait and registry.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Result, ServiceError};
use crate::types::{CompletionRequest, CompletionStream};

/// A hosted text-completion backend.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Stable identifier used for registry lookup and logging.
    fn service_id(&self) -> &str;

    /// Models this service can route requests to.
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Run a completion to the end and return the generated text.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;

    /// Run a completion as an incremental chunk stream.
    async fn complete_streaming(&self, request: CompletionRequest) -> Result<CompletionStream>;
}

/// Registry of service implementations, keyed by service ID.
///
/// Constructed explicitly by the caller and passed where needed; there is
/// no process-wide instance.
#[derive(Default, Clone)]
pub struct ServiceRegistry {
    services: HashMap<String, Arc<dyn CompletionService>>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service under the given ID. Returns `self` for chaining.
    pub fn register<S: CompletionService + 'static>(
        mut self,
        id: impl Into<String>,
        service: S,
    ) -> Self {
        self.services.insert(id.into(), Arc::new(service));
        self
    }

    /// Look up a service by ID.
    pub fn get_service(&self, id: &str) -> Result<Arc<dyn CompletionService>> {
        self.services
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::ServiceNotFound(id.to_string()))
    }

    /// List all registered service IDs.
    pub fn list_services(&self) -> Vec<String> {
        self.services.keys().cloned().collect()
    }
}
