//! Discovery service: which entities Alexa may see, and what they report.

use std::sync::Arc;

use skillbridge_domain::capability::PropertyValue;
use skillbridge_domain::config::{AlexaConfig, HostInfo};
use skillbridge_domain::discovery::EndpointDiscovery;
use skillbridge_domain::entity::EntitySnapshot;
use skillbridge_domain::error::{NotFoundError, SkillBridgeError};

use crate::entity_adapter::{AdapterContext, EntityAdapter};
use crate::ports::StateSource;
use crate::registry::AdapterRegistry;

/// Adapt every discoverable entity of `states`, preserving their order.
///
/// An entity is left out when its id is never exposed, when no adapter is
/// registered for its domain, or when its adapter has no interfaces.
#[must_use]
pub fn discoverable_entities<'a>(
    registry: &AdapterRegistry,
    host: &'a HostInfo,
    config: &'a AlexaConfig,
    states: &'a [EntitySnapshot],
) -> Vec<Box<dyn EntityAdapter + 'a>> {
    states
        .iter()
        .filter_map(|entity| adapt_discoverable(registry, AdapterContext::new(host, config, entity)))
        .collect()
}

fn adapt_discoverable<'a>(
    registry: &AdapterRegistry,
    ctx: AdapterContext<'a>,
) -> Option<Box<dyn EntityAdapter + 'a>> {
    let entity_id = ctx.entity.entity_id.as_str();
    if ctx.config.is_never_exposed(entity_id) {
        tracing::debug!(entity_id, "skipping never exposed entity");
        return None;
    }
    let Some(adapter) = registry.adapt(ctx) else {
        tracing::debug!(entity_id, domain = ctx.entity.domain(), "no adapter for domain");
        return None;
    };
    if adapter.interfaces().is_empty() {
        tracing::debug!(entity_id, "entity has no capability interfaces");
        return None;
    }
    Some(adapter)
}

/// Application service answering discovery and state report queries.
pub struct DiscoveryService<S> {
    source: S,
    registry: Arc<AdapterRegistry>,
    config: AlexaConfig,
}

impl<S: StateSource> DiscoveryService<S> {
    /// Create a new service reading entities from `source`.
    pub fn new(source: S, registry: Arc<AdapterRegistry>, config: AlexaConfig) -> Self {
        Self {
            source,
            registry,
            config,
        }
    }

    /// Discovery documents of every discoverable entity, in host order.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the state source.
    pub fn discovery_documents(&self) -> Result<Vec<EndpointDiscovery>, SkillBridgeError> {
        let host = self.source.host_info();
        let states = self.source.all_states()?;
        let documents: Vec<EndpointDiscovery> =
            discoverable_entities(&self.registry, &host, &self.config, &states)
                .iter()
                .map(|adapter| adapter.serialize_discovery())
                .collect();
        tracing::debug!(
            entities = states.len(),
            endpoints = documents.len(),
            "discovery completed"
        );
        Ok(documents)
    }

    /// Current proactively reported property values of one entity.
    ///
    /// # Errors
    ///
    /// Returns [`SkillBridgeError::NotFound`] when the entity does not exist
    /// or is not discoverable, [`SkillBridgeError::Capability`] when a
    /// property cannot be read, or an error from the state source.
    pub fn endpoint_properties(
        &self,
        entity_id: &str,
    ) -> Result<Vec<PropertyValue>, SkillBridgeError> {
        let not_found = || NotFoundError {
            entity: "Endpoint",
            id: entity_id.to_string(),
        };

        let host = self.source.host_info();
        let entity = self.source.get_state(entity_id)?.ok_or_else(not_found)?;
        let adapter = adapt_discoverable(
            &self.registry,
            AdapterContext::new(&host, &self.config, &entity),
        )
        .ok_or_else(not_found)?;

        let properties = adapter.serialize_properties().collect::<Result<Vec<_>, _>>()?;
        Ok(properties)
    }
}
