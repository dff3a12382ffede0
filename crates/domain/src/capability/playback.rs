use serde_json::{Map, Value, json};

use super::{CapabilityInterface, PropertyIter, PropertyValue};
use crate::entity::{EntitySnapshot, EntityState};
use crate::error::CapabilityError;
use crate::media_player::MediaPlayerFeatures;

/// `Alexa.PlaybackController`: transport controls (play, pause, …).
#[derive(Debug, Clone, Copy)]
pub struct PlaybackController<'a> {
    entity: &'a EntitySnapshot,
}

impl<'a> PlaybackController<'a> {
    #[must_use]
    pub fn new(entity: &'a EntitySnapshot) -> Self {
        Self { entity }
    }

    /// Alexa operation names backed by a supported feature bit.
    #[must_use]
    pub fn supported_operations(&self) -> Vec<&'static str> {
        const OPERATIONS: [(MediaPlayerFeatures, &str); 5] = [
            (MediaPlayerFeatures::PLAY, "Play"),
            (MediaPlayerFeatures::PAUSE, "Pause"),
            (MediaPlayerFeatures::STOP, "Stop"),
            (MediaPlayerFeatures::NEXT_TRACK, "Next"),
            (MediaPlayerFeatures::PREVIOUS_TRACK, "Previous"),
        ];

        let features = MediaPlayerFeatures::from_bits(self.entity.supported_features());
        OPERATIONS
            .iter()
            .filter(|(bit, _)| features.contains(*bit))
            .map(|(_, operation)| *operation)
            .collect()
    }
}

impl<'a> CapabilityInterface<'a> for PlaybackController<'a> {
    fn name(&self) -> &'static str {
        "Alexa.PlaybackController"
    }

    fn discovery_extra(&self) -> Result<Map<String, Value>, CapabilityError> {
        let mut extra = Map::new();
        extra.insert(
            "supportedOperations".to_string(),
            json!(self.supported_operations()),
        );
        Ok(extra)
    }
}

/// `Alexa.PlaybackStateReporter`: reports whether media is playing.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackStateReporter<'a> {
    entity: &'a EntitySnapshot,
}

impl<'a> PlaybackStateReporter<'a> {
    #[must_use]
    pub fn new(entity: &'a EntitySnapshot) -> Self {
        Self { entity }
    }

    fn playback_state(&self) -> &'static str {
        match self.entity.state {
            EntityState::Playing => "PLAYING",
            EntityState::Paused => "PAUSED",
            _ => "STOPPED",
        }
    }
}

impl<'a> CapabilityInterface<'a> for PlaybackStateReporter<'a> {
    fn name(&self) -> &'static str {
        "Alexa.PlaybackStateReporter"
    }

    fn properties_supported(&self) -> &'static [&'static str] {
        &["playbackState"]
    }

    fn properties_proactively_reported(&self) -> bool {
        true
    }

    fn properties_retrievable(&self) -> bool {
        true
    }

    fn serialize_properties(&self) -> PropertyIter<'a> {
        let this = *self;
        Box::new(std::iter::once_with(move || {
            Ok(PropertyValue::new(
                this.name(),
                "playbackState",
                json!({ "state": this.playback_state() }),
            ))
        }))
    }
}
