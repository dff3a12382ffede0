//! Shared application state for axum handlers.

use std::sync::Arc;

use skillbridge_app::ports::StateSource;
use skillbridge_app::services::discovery_service::DiscoveryService;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the state source itself does not need
/// to be `Clone`; only the `Arc` is cloned.
pub struct AppState<S> {
    /// Discovery and state report service.
    pub discovery_service: Arc<DiscoveryService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            discovery_service: Arc::clone(&self.discovery_service),
        }
    }
}

impl<S> AppState<S>
where
    S: StateSource + 'static,
{
    /// Create a new application state from the discovery service.
    pub fn new(discovery_service: DiscoveryService<S>) -> Self {
        Self {
            discovery_service: Arc::new(discovery_service),
        }
    }
}
