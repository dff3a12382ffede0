//! In-memory fixtures shared by handler tests.

use std::sync::Arc;

use skillbridge_app::ports::StateSource;
use skillbridge_app::registry::AdapterRegistry;
use skillbridge_app::services::discovery_service::DiscoveryService;
use skillbridge_domain::config::{AlexaConfig, HostInfo};
use skillbridge_domain::entity::EntitySnapshot;
use skillbridge_domain::error::SkillBridgeError;

use crate::state::AppState;

pub struct StubStates(pub Vec<EntitySnapshot>);

impl StateSource for StubStates {
    fn host_info(&self) -> HostInfo {
        HostInfo::new("Home Assistant", "2024.6.0")
    }

    fn all_states(&self) -> Result<Vec<EntitySnapshot>, SkillBridgeError> {
        Ok(self.0.clone())
    }
}

pub fn test_state(states: Vec<EntitySnapshot>) -> AppState<StubStates> {
    AppState::new(DiscoveryService::new(
        StubStates(states),
        Arc::new(AdapterRegistry::with_defaults().unwrap()),
        AlexaConfig::default(),
    ))
}
