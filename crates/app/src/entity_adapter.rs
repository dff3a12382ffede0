//! Entity adapter: an entity expressed in Alexa's terms.
//!
//! Request handlers and the discovery pipeline manipulate entities only
//! through [`EntityAdapter`]. Concrete adapters (see
//! [`entity_adapters`](crate::entity_adapters)) provide the display
//! categories and capability interfaces of their domain; everything else
//! comes from the provided methods.

use skillbridge_domain::alexa_id::{sanitize, strip_forbidden};
use skillbridge_domain::capability::{CapabilityInterface, PropertyIter};
use skillbridge_domain::config::{AlexaConfig, EntityOverrides, HostInfo};
use skillbridge_domain::discovery::{AdditionalAttributes, Cookie, EndpointDiscovery};
use skillbridge_domain::entity::EntitySnapshot;

/// Everything an adapter reads: host identity, configuration and the
/// entity snapshot. Adapters borrow all three for the duration of a call.
#[derive(Debug, Clone, Copy)]
pub struct AdapterContext<'a> {
    pub host: &'a HostInfo,
    pub config: &'a AlexaConfig,
    pub entity: &'a EntitySnapshot,
}

impl<'a> AdapterContext<'a> {
    #[must_use]
    pub fn new(host: &'a HostInfo, config: &'a AlexaConfig, entity: &'a EntitySnapshot) -> Self {
        Self {
            host,
            config,
            entity,
        }
    }

    /// User overrides configured for this entity.
    #[must_use]
    pub fn overrides(&self) -> Option<&'a EntityOverrides> {
        self.config.overrides(&self.entity.entity_id)
    }
}

/// An adaptation of one entity to the Alexa Smart Home API.
pub trait EntityAdapter {
    /// The context this adapter was built from.
    fn context(&self) -> AdapterContext<'_>;

    /// Display categories used when the user configured none.
    fn default_display_categories(&self) -> Vec<String>;

    /// Supported capability interfaces, in declaration order.
    ///
    /// Each call builds the list afresh. An empty list means the entity is
    /// not discoverable.
    fn interfaces(&self) -> Vec<Box<dyn CapabilityInterface<'_> + '_>>;

    /// The host entity id, unmodified.
    fn entity_id(&self) -> &str {
        &self.context().entity.entity_id
    }

    /// Configured name, else the entity's display name, without the
    /// characters Alexa rejects.
    fn friendly_name(&self) -> String {
        let ctx = self.context();
        match ctx.overrides().and_then(|o| o.name.as_deref()) {
            Some(name) => strip_forbidden(name),
            None => strip_forbidden(&ctx.entity.name()),
        }
    }

    /// Configured description, else `"<entity_id> via <platform>"`.
    fn description(&self) -> String {
        let ctx = self.context();
        match ctx
            .overrides()
            .and_then(|o| o.description.as_deref())
            .filter(|description| !description.is_empty())
        {
            Some(description) => strip_forbidden(description),
            None => strip_forbidden(&format!("{} via {}", self.entity_id(), ctx.host.name)),
        }
    }

    /// The Alexa endpoint id.
    fn alexa_id(&self) -> String {
        sanitize(self.entity_id())
    }

    /// Configured display category, else the adapter defaults.
    fn display_categories(&self) -> Vec<String> {
        match self
            .context()
            .overrides()
            .and_then(|o| o.display_categories.as_ref())
        {
            Some(category) => vec![category.clone()],
            None => self.default_display_categories(),
        }
    }

    /// Current values of every proactively reported property, in interface
    /// order.
    ///
    /// Each value is read from the entity only when the iterator reaches it.
    /// Failures are yielded to the caller as they occur.
    fn serialize_properties(&self) -> PropertyIter<'_> {
        Box::new(
            self.interfaces()
                .into_iter()
                .filter(|interface| interface.properties_proactively_reported())
                .flat_map(|interface| interface.serialize_properties()),
        )
    }

    /// Describe the entity for an `Alexa.Discovery` response.
    ///
    /// Only interfaces available in the configured locale are described. An
    /// interface that fails to serialize is logged and left out.
    fn serialize_discovery(&self) -> EndpointDiscovery {
        let ctx = self.context();
        let locale = ctx.config.locale.as_str();

        let capabilities = self
            .interfaces()
            .iter()
            .filter(|interface| interface.supported_locales().iter().any(|l| *l == locale))
            .filter_map(|interface| match interface.serialize_discovery() {
                Ok(discovery) => Some(discovery),
                Err(err) => {
                    tracing::error!(
                        interface = interface.name(),
                        entity_id = self.entity_id(),
                        error = %err,
                        "error serializing capability discovery"
                    );
                    None
                }
            })
            .collect();

        EndpointDiscovery {
            display_categories: self.display_categories(),
            cookie: Cookie::new(),
            endpoint_id: self.alexa_id(),
            friendly_name: self.friendly_name(),
            description: self.description(),
            manufacturer_name: ctx.host.name.clone(),
            additional_attributes: AdditionalAttributes {
                manufacturer: ctx.host.name.clone(),
                model: ctx.entity.domain().to_string(),
                software_version: ctx.host.version.clone(),
                custom_identifier: self.entity_id().to_string(),
            },
            capabilities,
        }
    }
}
