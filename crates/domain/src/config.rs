//! Exposure configuration: per-entity overrides and process-wide settings.

use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

/// Name of the host platform, used as manufacturer and in descriptions.
pub const DEFAULT_PLATFORM_NAME: &str = "Home Assistant";

/// Entities no cloud integration may ever expose.
pub const CLOUD_NEVER_EXPOSED_ENTITIES: [&str; 1] = ["group.all_locks"];

/// Per-entity overrides set by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntityOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub display_categories: Option<String>,
}

/// Settings consulted while describing entities to Alexa.
///
/// `never_exposed` always starts from [`CLOUD_NEVER_EXPOSED_ENTITIES`]; user
/// entries extend it (see [`AlexaConfig::never_expose`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlexaConfig {
    /// Active skill locale, e.g. `en-US`.
    pub locale: String,
    /// Entity ids that are never discovered.
    pub never_exposed: BTreeSet<String>,
    /// Overrides keyed by entity id.
    pub entity_config: HashMap<String, EntityOverrides>,
}

impl Default for AlexaConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            never_exposed: CLOUD_NEVER_EXPOSED_ENTITIES
                .iter()
                .map(ToString::to_string)
                .collect(),
            entity_config: HashMap::new(),
        }
    }
}

impl AlexaConfig {
    /// Overrides for `entity_id`, if any were configured.
    #[must_use]
    pub fn overrides(&self, entity_id: &str) -> Option<&EntityOverrides> {
        self.entity_config.get(entity_id)
    }

    /// Add user entries to the never exposed list.
    #[must_use]
    pub fn never_expose<I, S>(mut self, entity_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.never_exposed.extend(entity_ids.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn is_never_exposed(&self, entity_id: &str) -> bool {
        self.never_exposed.contains(entity_id)
    }
}

/// Identity of the host platform the entities come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub name: String,
    pub version: String,
}

impl HostInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for HostInfo {
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORM_NAME, "unknown")
    }
}
