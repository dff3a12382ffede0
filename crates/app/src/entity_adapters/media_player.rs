//! Media player adapter for TVs, receivers and speakers.
//!
//! The capability interfaces follow from the `supported_features` bitmask:
//!
//! | Feature bits | Interfaces |
//! |--------------|------------|
//! | *(always)* | `PowerController` |
//! | `VOLUME_SET`, else `VOLUME_STEP` | `Speaker`, else `StepSpeaker` |
//! | any of play/pause/stop/next/previous | `PlaybackController` + `PlaybackStateReporter` |
//! | `SEEK` | `SeekController` |
//! | `SELECT_SOURCE` with a recognized source | `InputController` |
//! | `PLAY_MEDIA` | `ChannelController` + `RemoteVideoPlayer` |
//! | `SELECT_SOUND_MODE` with a recognized sound mode | `EqualizerController` |
//! | *(always)* | `Launcher`, `EndpointHealth`, `Alexa` |

use skillbridge_domain::capability::{
    Alexa, CapabilityInterface, ChannelController, EndpointHealth, EqualizerController,
    InputController, Launcher, PlaybackController, PlaybackStateReporter, PowerController,
    RemoteVideoPlayer, SeekController, Speaker, StepSpeaker, valid_inputs,
};
use skillbridge_domain::display_category::DisplayCategory;
use skillbridge_domain::entity::attr::DEVICE_CLASS;
use skillbridge_domain::media_player::{DEVICE_CLASS_SPEAKER, MediaPlayerFeatures, attr};

use crate::entity_adapter::{AdapterContext, EntityAdapter};

/// Adapter for `media_player` entities.
#[derive(Debug, Clone, Copy)]
pub struct MediaPlayerAdapter<'a> {
    ctx: AdapterContext<'a>,
}

impl<'a> MediaPlayerAdapter<'a> {
    #[must_use]
    pub fn new(ctx: AdapterContext<'a>) -> Self {
        Self { ctx }
    }

    fn features(&self) -> MediaPlayerFeatures {
        MediaPlayerFeatures::from_bits(self.ctx.entity.supported_features())
    }

    /// Whether the list attribute names at least one input Alexa recognizes.
    fn has_valid_inputs(&self, list_attribute: &str) -> bool {
        !valid_inputs(self.ctx.entity.attribute_str_list(list_attribute)).is_empty()
    }
}

/// Registry constructor for [`MediaPlayerAdapter`].
#[must_use]
pub fn construct(ctx: AdapterContext<'_>) -> Box<dyn EntityAdapter + '_> {
    Box::new(MediaPlayerAdapter::new(ctx))
}

impl EntityAdapter for MediaPlayerAdapter<'_> {
    fn context(&self) -> AdapterContext<'_> {
        self.ctx
    }

    fn default_display_categories(&self) -> Vec<String> {
        if self.ctx.entity.attribute_str(DEVICE_CLASS) == Some(DEVICE_CLASS_SPEAKER) {
            vec![DisplayCategory::Speaker.into()]
        } else {
            vec![DisplayCategory::Tv.into()]
        }
    }

    fn interfaces(&self) -> Vec<Box<dyn CapabilityInterface<'_> + '_>> {
        let entity = self.ctx.entity;
        let features = self.features();

        let mut interfaces: Vec<Box<dyn CapabilityInterface<'_> + '_>> =
            vec![Box::new(PowerController::new(entity))];

        if features.contains(MediaPlayerFeatures::VOLUME_SET) {
            interfaces.push(Box::new(Speaker::new(entity)));
        } else if features.contains(MediaPlayerFeatures::VOLUME_STEP) {
            interfaces.push(Box::new(StepSpeaker));
        }

        if features.intersects(MediaPlayerFeatures::PLAYBACK) {
            interfaces.push(Box::new(PlaybackController::new(entity)));
            interfaces.push(Box::new(PlaybackStateReporter::new(entity)));
        }

        if features.contains(MediaPlayerFeatures::SEEK) {
            interfaces.push(Box::new(SeekController));
        }

        if features.contains(MediaPlayerFeatures::SELECT_SOURCE)
            && self.has_valid_inputs(attr::INPUT_SOURCE_LIST)
        {
            interfaces.push(Box::new(InputController::new(entity)));
        }

        if features.contains(MediaPlayerFeatures::PLAY_MEDIA) {
            interfaces.push(Box::new(ChannelController));
            interfaces.push(Box::new(RemoteVideoPlayer));
        }

        // Sound modes are gated with the same source-name allow-list as inputs.
        if features.contains(MediaPlayerFeatures::SELECT_SOUND_MODE)
            && self.has_valid_inputs(attr::SOUND_MODE_LIST)
        {
            interfaces.push(Box::new(EqualizerController::new(entity)));
        }

        interfaces.push(Box::new(Launcher));
        interfaces.push(Box::new(EndpointHealth::new(entity)));
        interfaces.push(Box::new(Alexa));
        interfaces
    }
}

#[cfg(test)]
mod tests {
    use skillbridge_domain::config::{AlexaConfig, HostInfo};
    use skillbridge_domain::entity::attr::SUPPORTED_FEATURES;
    use skillbridge_domain::entity::{EntitySnapshot, EntitySnapshotBuilder, EntityState};

    use super::*;

    fn player(features: MediaPlayerFeatures) -> EntitySnapshotBuilder {
        EntitySnapshot::builder()
            .entity_id("media_player.lounge_tv")
            .state(EntityState::Playing)
            .attribute(SUPPORTED_FEATURES, i64::from(features.bits()))
    }

    fn interface_names(entity: &EntitySnapshot) -> Vec<&'static str> {
        let host = HostInfo::default();
        let config = AlexaConfig::default();
        let adapter = MediaPlayerAdapter::new(AdapterContext::new(&host, &config, entity));
        adapter.interfaces().iter().map(|i| i.name()).collect()
    }

    fn default_categories(entity: &EntitySnapshot) -> Vec<String> {
        let host = HostInfo::default();
        let config = AlexaConfig::default();
        MediaPlayerAdapter::new(AdapterContext::new(&host, &config, entity))
            .default_display_categories()
    }

    #[test]
    fn should_emit_mandatory_interfaces_without_features() {
        let entity = player(MediaPlayerFeatures::default()).build().unwrap();
        assert_eq!(
            interface_names(&entity),
            vec![
                "Alexa.PowerController",
                "Alexa.Launcher",
                "Alexa.EndpointHealth",
                "Alexa",
            ]
        );
    }

    #[test]
    fn should_treat_missing_bitmask_as_no_features() {
        let entity = EntitySnapshot::builder()
            .entity_id("media_player.radio")
            .build()
            .unwrap();
        assert_eq!(interface_names(&entity).len(), 4);
    }

    #[test]
    fn should_describe_lounge_tv_example() {
        let features = MediaPlayerFeatures::PLAY
            | MediaPlayerFeatures::PAUSE
            | MediaPlayerFeatures::VOLUME_SET;
        let entity = player(features).build().unwrap();
        let host = HostInfo::default();
        let config = AlexaConfig::default();
        let adapter = MediaPlayerAdapter::new(AdapterContext::new(&host, &config, &entity));

        assert_eq!(adapter.alexa_id(), "media_player#lounge_tv");
        assert_eq!(adapter.default_display_categories(), vec!["TV"]);
        assert_eq!(
            interface_names(&entity),
            vec![
                "Alexa.PowerController",
                "Alexa.Speaker",
                "Alexa.PlaybackController",
                "Alexa.PlaybackStateReporter",
                "Alexa.Launcher",
                "Alexa.EndpointHealth",
                "Alexa",
            ]
        );
    }

    #[test]
    fn should_prefer_speaker_over_step_speaker() {
        let entity = player(MediaPlayerFeatures::VOLUME_SET | MediaPlayerFeatures::VOLUME_STEP)
            .build()
            .unwrap();
        let names = interface_names(&entity);
        assert!(names.contains(&"Alexa.Speaker"));
        assert!(!names.contains(&"Alexa.StepSpeaker"));
    }

    #[test]
    fn should_emit_step_speaker_for_volume_step_only() {
        let entity = player(MediaPlayerFeatures::VOLUME_STEP).build().unwrap();
        let names = interface_names(&entity);
        assert_eq!(names[1], "Alexa.StepSpeaker");
        assert!(!names.contains(&"Alexa.Speaker"));
    }

    #[test]
    fn should_couple_playback_controller_and_state_reporter() {
        for bit in [
            MediaPlayerFeatures::PLAY,
            MediaPlayerFeatures::PAUSE,
            MediaPlayerFeatures::STOP,
            MediaPlayerFeatures::NEXT_TRACK,
            MediaPlayerFeatures::PREVIOUS_TRACK,
        ] {
            let entity = player(bit).build().unwrap();
            let names = interface_names(&entity);
            assert_eq!(names[1], "Alexa.PlaybackController");
            assert_eq!(names[2], "Alexa.PlaybackStateReporter");
        }
    }

    #[test]
    fn should_emit_seek_controller() {
        let entity = player(MediaPlayerFeatures::SEEK).build().unwrap();
        assert!(interface_names(&entity).contains(&"Alexa.SeekController"));
    }

    #[test]
    fn should_emit_input_controller_for_recognized_sources() {
        let entity = player(MediaPlayerFeatures::SELECT_SOURCE)
            .attribute(attr::INPUT_SOURCE_LIST, vec!["HDMI 1", "Netflix"])
            .build()
            .unwrap();
        assert!(interface_names(&entity).contains(&"Alexa.InputController"));
    }

    #[test]
    fn should_skip_input_controller_without_recognized_sources() {
        for sources in [vec![], vec!["Netflix", "Spotify"]] {
            let entity = player(MediaPlayerFeatures::SELECT_SOURCE)
                .attribute(attr::INPUT_SOURCE_LIST, sources)
                .build()
                .unwrap();
            assert!(!interface_names(&entity).contains(&"Alexa.InputController"));
        }
    }

    #[test]
    fn should_skip_input_controller_when_source_list_missing() {
        let entity = player(MediaPlayerFeatures::SELECT_SOURCE).build().unwrap();
        assert_eq!(interface_names(&entity).len(), 4);
    }

    #[test]
    fn should_ignore_source_list_without_select_source_bit() {
        let entity = player(MediaPlayerFeatures::default())
            .attribute(attr::INPUT_SOURCE_LIST, vec!["HDMI 1"])
            .build()
            .unwrap();
        assert!(!interface_names(&entity).contains(&"Alexa.InputController"));
    }

    #[test]
    fn should_emit_channel_and_video_player_for_play_media() {
        let entity = player(MediaPlayerFeatures::PLAY_MEDIA).build().unwrap();
        let names = interface_names(&entity);
        assert_eq!(names[1], "Alexa.ChannelController");
        assert_eq!(names[2], "Alexa.RemoteVideoPlayer");
    }

    #[test]
    fn should_gate_equalizer_on_recognized_sound_modes() {
        let gated = player(MediaPlayerFeatures::SELECT_SOUND_MODE)
            .attribute(attr::SOUND_MODE_LIST, vec!["TV", "Stereo"])
            .build()
            .unwrap();
        assert!(interface_names(&gated).contains(&"Alexa.EqualizerController"));

        let ungated = player(MediaPlayerFeatures::SELECT_SOUND_MODE)
            .attribute(attr::SOUND_MODE_LIST, vec!["Stereo", "Pure Direct"])
            .build()
            .unwrap();
        assert!(!interface_names(&ungated).contains(&"Alexa.EqualizerController"));
    }

    #[test]
    fn should_order_every_interface_deterministically() {
        let all = MediaPlayerFeatures::from_bits(u32::MAX);
        let entity = player(all)
            .attribute(attr::INPUT_SOURCE_LIST, vec!["HDMI 1"])
            .attribute(attr::SOUND_MODE_LIST, vec!["TV"])
            .build()
            .unwrap();
        assert_eq!(
            interface_names(&entity),
            vec![
                "Alexa.PowerController",
                "Alexa.Speaker",
                "Alexa.PlaybackController",
                "Alexa.PlaybackStateReporter",
                "Alexa.SeekController",
                "Alexa.InputController",
                "Alexa.ChannelController",
                "Alexa.RemoteVideoPlayer",
                "Alexa.EqualizerController",
                "Alexa.Launcher",
                "Alexa.EndpointHealth",
                "Alexa",
            ]
        );
    }

    #[test]
    fn should_categorize_speaker_device_class_as_speaker() {
        let entity = player(MediaPlayerFeatures::default())
            .attribute(DEVICE_CLASS, "speaker")
            .build()
            .unwrap();
        assert_eq!(default_categories(&entity), vec!["SPEAKER"]);
    }

    #[test]
    fn should_categorize_other_device_classes_as_tv() {
        let tv = player(MediaPlayerFeatures::default())
            .attribute(DEVICE_CLASS, "receiver")
            .build()
            .unwrap();
        assert_eq!(default_categories(&tv), vec!["TV"]);

        let unclassified = player(MediaPlayerFeatures::default()).build().unwrap();
        assert_eq!(default_categories(&unclassified), vec!["TV"]);
    }

    #[test]
    fn should_report_speaker_and_playback_properties() {
        let entity = player(MediaPlayerFeatures::VOLUME_SET | MediaPlayerFeatures::PLAY)
            .attribute(attr::VOLUME_LEVEL, 0.5)
            .build()
            .unwrap();
        let host = HostInfo::default();
        let config = AlexaConfig::default();
        let adapter = MediaPlayerAdapter::new(AdapterContext::new(&host, &config, &entity));

        let names: Vec<_> = adapter
            .serialize_properties()
            .map(|value| value.map(|v| (v.namespace, v.name)))
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            names,
            vec![
                ("Alexa.PowerController".to_string(), "powerState".to_string()),
                ("Alexa.Speaker".to_string(), "volume".to_string()),
                ("Alexa.Speaker".to_string(), "muted".to_string()),
                (
                    "Alexa.PlaybackStateReporter".to_string(),
                    "playbackState".to_string()
                ),
                (
                    "Alexa.EndpointHealth".to_string(),
                    "connectivity".to_string()
                ),
            ]
        );
    }

    #[test]
    fn should_serialize_full_discovery_document() {
        let entity = player(MediaPlayerFeatures::PLAY | MediaPlayerFeatures::VOLUME_STEP)
            .attribute("friendly_name", "Lounge TV")
            .build()
            .unwrap();
        let host = HostInfo::new("Home Assistant", "2024.6.0");
        let config = AlexaConfig::default();
        let adapter = MediaPlayerAdapter::new(AdapterContext::new(&host, &config, &entity));

        let json = serde_json::to_value(adapter.serialize_discovery()).unwrap();

        assert_eq!(json["endpointId"], "media_player#lounge_tv");
        assert_eq!(json["friendlyName"], "Lounge TV");
        assert_eq!(json["description"], "media_player.lounge_tv via Home Assistant");
        assert_eq!(json["displayCategories"], serde_json::json!(["TV"]));
        assert_eq!(json["capabilities"].as_array().unwrap().len(), 7);
        assert_eq!(json["capabilities"][0]["interface"], "Alexa.PowerController");
    }
}
