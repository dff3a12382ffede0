use serde_json::{Map, Value, json};

use super::{CapabilityInterface, PropertyIter, PropertyValue};
use crate::entity::EntitySnapshot;
use crate::error::CapabilityError;
use crate::media_player::attr;

/// Sound modes Alexa accepts for `Alexa.EqualizerController`.
const VALID_SOUND_MODES: [&str; 5] = ["MOVIE", "MUSIC", "NIGHT", "SPORT", "TV"];

const LOCALES: &[&str] = &[
    "de-DE", "en-AU", "en-CA", "en-GB", "en-IN", "en-US", "es-ES", "es-MX", "es-US", "fr-CA",
    "fr-FR", "it-IT", "ja-JP",
];

fn sound_mode(name: &str) -> Option<&'static str> {
    let upper = name.to_uppercase();
    VALID_SOUND_MODES.iter().copied().find(|mode| *mode == upper)
}

/// `Alexa.EqualizerController`: selecting a sound mode.
///
/// The interface derives its supported modes from the entity itself; the
/// adapter only decides whether to emit it.
#[derive(Debug, Clone, Copy)]
pub struct EqualizerController<'a> {
    entity: &'a EntitySnapshot,
}

impl<'a> EqualizerController<'a> {
    #[must_use]
    pub fn new(entity: &'a EntitySnapshot) -> Self {
        Self { entity }
    }

    fn supported_modes(&self) -> Vec<&'static str> {
        self.entity
            .attribute_str_list(attr::SOUND_MODE_LIST)
            .into_iter()
            .filter_map(sound_mode)
            .collect()
    }

    fn mode(&self) -> Option<Result<PropertyValue, CapabilityError>> {
        let current = self.entity.attribute(attr::SOUND_MODE)?;
        match current.as_str() {
            Some(current) => {
                sound_mode(current).map(|mode| Ok(PropertyValue::new(self.name(), "mode", mode)))
            }
            None => Some(Err(CapabilityError::InvalidAttribute {
                interface: self.name(),
                attribute: attr::SOUND_MODE,
            })),
        }
    }
}

impl<'a> CapabilityInterface<'a> for EqualizerController<'a> {
    fn name(&self) -> &'static str {
        "Alexa.EqualizerController"
    }

    fn supported_locales(&self) -> &'static [&'static str] {
        LOCALES
    }

    fn properties_supported(&self) -> &'static [&'static str] {
        &["mode"]
    }

    fn properties_retrievable(&self) -> bool {
        true
    }

    fn discovery_extra(&self) -> Result<Map<String, Value>, CapabilityError> {
        let modes = self.supported_modes();
        let mut extra = Map::new();
        if !modes.is_empty() {
            let supported: Vec<Value> = modes
                .into_iter()
                .map(|name| json!({ "name": name }))
                .collect();
            extra.insert(
                "configurations".to_string(),
                json!({ "modes": { "supported": supported } }),
            );
        }
        Ok(extra)
    }

    fn serialize_properties(&self) -> PropertyIter<'a> {
        let this = *self;
        Box::new(std::iter::once_with(move || this.mode()).flatten())
    }
}
