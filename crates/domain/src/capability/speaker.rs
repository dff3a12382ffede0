use super::{CapabilityInterface, PropertyIter, PropertyValue};
use crate::entity::EntitySnapshot;
use crate::error::CapabilityError;
use crate::media_player::attr;

/// `Alexa.Speaker`: absolute volume and mute control.
#[derive(Debug, Clone, Copy)]
pub struct Speaker<'a> {
    entity: &'a EntitySnapshot,
}

impl<'a> Speaker<'a> {
    #[must_use]
    pub fn new(entity: &'a EntitySnapshot) -> Self {
        Self { entity }
    }

    /// Volume in percent. `None` while the player does not report a level
    /// (typically when it is off).
    #[allow(clippy::cast_possible_truncation)]
    fn volume(&self) -> Option<Result<PropertyValue, CapabilityError>> {
        let level = self.entity.attribute(attr::VOLUME_LEVEL)?;
        let percent = level
            .as_f64()
            .filter(|level| level.is_finite())
            .map(|level| (level * 100.0).round().clamp(0.0, 100.0))
            .ok_or(CapabilityError::InvalidAttribute {
                interface: self.name(),
                attribute: attr::VOLUME_LEVEL,
            });
        Some(percent.map(|percent| PropertyValue::new(self.name(), "volume", percent as i64)))
    }

    fn muted(&self) -> Result<PropertyValue, CapabilityError> {
        let muted = match self.entity.attribute(attr::IS_VOLUME_MUTED) {
            None => false,
            Some(value) => value
                .as_bool()
                .ok_or(CapabilityError::InvalidAttribute {
                    interface: self.name(),
                    attribute: attr::IS_VOLUME_MUTED,
                })?,
        };
        Ok(PropertyValue::new(self.name(), "muted", muted))
    }
}

impl<'a> CapabilityInterface<'a> for Speaker<'a> {
    fn name(&self) -> &'static str {
        "Alexa.Speaker"
    }

    fn properties_supported(&self) -> &'static [&'static str] {
        &["volume", "muted"]
    }

    fn properties_proactively_reported(&self) -> bool {
        true
    }

    fn properties_retrievable(&self) -> bool {
        true
    }

    fn serialize_properties(&self) -> PropertyIter<'a> {
        let this = *self;
        Box::new(
            std::iter::once_with(move || this.volume())
                .flatten()
                .chain(std::iter::once_with(move || this.muted())),
        )
    }
}

/// `Alexa.StepSpeaker`: relative volume steps only, no reported state.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepSpeaker;

impl CapabilityInterface<'_> for StepSpeaker {
    fn name(&self) -> &'static str {
        "Alexa.StepSpeaker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::AttributeValue;

    fn volume_snapshot(level: impl Into<AttributeValue>) -> EntitySnapshot {
        EntitySnapshot::builder()
            .entity_id("media_player.kitchen")
            .attribute(attr::VOLUME_LEVEL, level)
            .build()
            .unwrap()
    }

    #[test]
    fn should_report_volume_as_percentage_and_muted() {
        let entity = volume_snapshot(0.35);
        let values: Vec<_> = Speaker::new(&entity)
            .serialize_properties()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].name, "volume");
        assert_eq!(values[0].value, 35);
        assert_eq!(values[1].name, "muted");
        assert_eq!(values[1].value, false);
    }

    #[test]
    fn should_skip_volume_when_level_missing() {
        let entity = EntitySnapshot::builder()
            .entity_id("media_player.kitchen")
            .attribute(attr::IS_VOLUME_MUTED, true)
            .build()
            .unwrap();
        let values: Vec<_> = Speaker::new(&entity)
            .serialize_properties()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].value, true);
    }

    #[test]
    fn should_fail_when_volume_level_is_not_numeric() {
        let entity = volume_snapshot("loud");
        let first = Speaker::new(&entity).serialize_properties().next().unwrap();
        assert_eq!(
            first,
            Err(CapabilityError::InvalidAttribute {
                interface: "Alexa.Speaker",
                attribute: attr::VOLUME_LEVEL,
            })
        );
    }

    #[test]
    fn should_serialize_step_speaker_without_properties() {
        let discovery = StepSpeaker.serialize_discovery().unwrap();
        assert_eq!(discovery.interface, "Alexa.StepSpeaker");
        assert!(discovery.properties.is_none());
    }
}
