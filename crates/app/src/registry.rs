//! Adapter registry: which entity domains can be exposed, and how.
//!
//! The registry is built once during startup and shared read-only
//! afterwards (typically behind an `Arc`).

use std::collections::HashMap;

use skillbridge_domain::error::RegistryError;
use skillbridge_domain::media_player;

use crate::entity_adapter::{AdapterContext, EntityAdapter};
use crate::entity_adapters;

/// Builds the adapter for one entity of a registered domain.
pub type AdapterConstructor = for<'a> fn(AdapterContext<'a>) -> Box<dyn EntityAdapter + 'a>;

/// Mapping from entity domain to adapter constructor.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: HashMap<String, AdapterConstructor>,
}

impl AdapterRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every adapter shipped with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDomain`] if two bundled adapters
    /// claim the same domain.
    pub fn with_defaults() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(media_player::DOMAIN, entity_adapters::media_player::construct)?;
        Ok(registry)
    }

    /// Register the adapter for `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDomain`] when `domain` already has an
    /// adapter; the existing registration is kept.
    pub fn register(
        &mut self,
        domain: impl Into<String>,
        constructor: AdapterConstructor,
    ) -> Result<(), RegistryError> {
        let domain = domain.into();
        if self.adapters.contains_key(&domain) {
            return Err(RegistryError::DuplicateDomain(domain));
        }
        tracing::debug!(domain = %domain, "registered entity adapter");
        self.adapters.insert(domain, constructor);
        Ok(())
    }

    /// The constructor for `domain`, or `None` when the domain is not exposable.
    #[must_use]
    pub fn lookup(&self, domain: &str) -> Option<AdapterConstructor> {
        self.adapters.get(domain).copied()
    }

    /// Build the adapter for the entity in `ctx`, if its domain is registered.
    #[must_use]
    pub fn adapt<'a>(&self, ctx: AdapterContext<'a>) -> Option<Box<dyn EntityAdapter + 'a>> {
        self.lookup(ctx.entity.domain()).map(|construct| construct(ctx))
    }

    /// Registered domains, sorted.
    #[must_use]
    pub fn domains(&self) -> Vec<&str> {
        let mut domains: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        domains.sort_unstable();
        domains
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("domains", &self.domains())
            .finish()
    }
}
