//! State source port: read access to the host's live entity states.

use skillbridge_domain::config::HostInfo;
use skillbridge_domain::entity::EntitySnapshot;
use skillbridge_domain::error::SkillBridgeError;

/// Read-only view of the host platform's entity states.
///
/// Implementations return fresh snapshots on every call; the application
/// layer never caches them.
pub trait StateSource: Send + Sync {
    /// Name and version of the host platform.
    fn host_info(&self) -> HostInfo;

    /// Every entity currently known, in host order.
    ///
    /// # Errors
    ///
    /// Returns [`SkillBridgeError::Source`] when the states cannot be read.
    fn all_states(&self) -> Result<Vec<EntitySnapshot>, SkillBridgeError>;

    /// A single entity by its `domain.object_id` identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SkillBridgeError::Source`] when the states cannot be read.
    fn get_state(&self, entity_id: &str) -> Result<Option<EntitySnapshot>, SkillBridgeError> {
        Ok(self
            .all_states()?
            .into_iter()
            .find(|state| state.entity_id == entity_id))
    }
}
