//! Entity snapshot: a read-only view of one host entity.
//!
//! Snapshots are produced by a state source (see the `app` crate's ports)
//! and never mutated by the adapter layer.

mod attribute_value;
mod state;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use attribute_value::AttributeValue;
pub use state::EntityState;

use crate::error::{SkillBridgeError, ValidationError};

/// Well-known attribute names shared by most domains.
pub mod attr {
    pub const FRIENDLY_NAME: &str = "friendly_name";
    pub const DEVICE_CLASS: &str = "device_class";
    pub const SUPPORTED_FEATURES: &str = "supported_features";
}

/// The state of one entity at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Host identifier, `domain.object_id`.
    pub entity_id: String,
    pub state: EntityState,
    #[serde(default)]
    pub attributes: HashMap<String, AttributeValue>,
}

impl EntitySnapshot {
    /// Create a builder for constructing an [`EntitySnapshot`].
    #[must_use]
    pub fn builder() -> EntitySnapshotBuilder {
        EntitySnapshotBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SkillBridgeError::Validation`] when `entity_id` is empty or
    /// not of the form `domain.object_id`.
    pub fn validate(&self) -> Result<(), SkillBridgeError> {
        if self.entity_id.is_empty() {
            return Err(ValidationError::EmptyEntityId.into());
        }
        match self.entity_id.split_once('.') {
            Some((domain, object_id)) if !domain.is_empty() && !object_id.is_empty() => Ok(()),
            _ => Err(ValidationError::MalformedEntityId(self.entity_id.clone()).into()),
        }
    }

    /// The entity domain, i.e. the part of the id before the first dot.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.entity_id
            .split_once('.')
            .map_or(self.entity_id.as_str(), |(domain, _)| domain)
    }

    /// The part of the id after the first dot.
    #[must_use]
    pub fn object_id(&self) -> &str {
        self.entity_id
            .split_once('.')
            .map_or("", |(_, object_id)| object_id)
    }

    /// Display name: the `friendly_name` attribute, else the object id with
    /// underscores turned into spaces.
    #[must_use]
    pub fn name(&self) -> String {
        match self.attribute_str(attr::FRIENDLY_NAME) {
            Some(name) => name.to_string(),
            None => self.object_id().replace('_', " "),
        }
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Look up a string attribute. Other variants yield `None`.
    #[must_use]
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(AttributeValue::as_str)
    }

    /// Look up a list-of-strings attribute, skipping non-string items.
    ///
    /// A missing or non-list attribute yields an empty list.
    #[must_use]
    pub fn attribute_str_list(&self, key: &str) -> Vec<&str> {
        self.attribute(key)
            .map(AttributeValue::as_str_list)
            .unwrap_or_default()
    }

    /// The `supported_features` bitmask; absent or non-integer means `0`.
    #[must_use]
    pub fn supported_features(&self) -> u32 {
        self.attribute(attr::SUPPORTED_FEATURES)
            .and_then(AttributeValue::as_i64)
            .and_then(|bits| u32::try_from(bits).ok())
            .unwrap_or(0)
    }
}

/// Step-by-step builder for [`EntitySnapshot`].
#[derive(Debug, Default)]
pub struct EntitySnapshotBuilder {
    entity_id: Option<String>,
    state: Option<EntityState>,
    attributes: HashMap<String, AttributeValue>,
}

impl EntitySnapshotBuilder {
    #[must_use]
    pub fn entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: EntityState) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn attributes(mut self, attributes: HashMap<String, AttributeValue>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Consume the builder, validate, and return an [`EntitySnapshot`].
    ///
    /// # Errors
    ///
    /// Returns [`SkillBridgeError::Validation`] if `entity_id` is missing or
    /// malformed.
    pub fn build(self) -> Result<EntitySnapshot, SkillBridgeError> {
        let snapshot = EntitySnapshot {
            entity_id: self.entity_id.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            attributes: self.attributes,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }
}
