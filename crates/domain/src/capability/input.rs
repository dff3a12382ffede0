use serde_json::{Map, Value, json};

use super::{CapabilityInterface, PropertyIter, PropertyValue};
use crate::entity::EntitySnapshot;
use crate::error::CapabilityError;
use crate::media_player::attr;

/// Normalized source names Alexa recognizes, mapped to the input name
/// declared in discovery.
const VALID_SOURCE_NAMES: &[(&str, &str)] = &[
    ("antenna", "TUNER"),
    ("antennatv", "TUNER"),
    ("aux", "AUX 1"),
    ("aux1", "AUX 1"),
    ("aux2", "AUX 2"),
    ("aux3", "AUX 3"),
    ("aux4", "AUX 4"),
    ("aux5", "AUX 5"),
    ("aux6", "AUX 6"),
    ("aux7", "AUX 7"),
    ("bluray", "BLURAY"),
    ("blurayplayer", "BLURAY"),
    ("cable", "CABLE"),
    ("cd", "CD"),
    ("coax", "COAX 1"),
    ("coax1", "COAX 1"),
    ("coax2", "COAX 2"),
    ("composite", "COMPOSITE 1"),
    ("composite1", "COMPOSITE 1"),
    ("dvd", "DVD"),
    ("game", "GAME"),
    ("gameconsole", "GAME"),
    ("hdradio", "HD RADIO"),
    ("hdmi", "HDMI 1"),
    ("hdmi1", "HDMI 1"),
    ("hdmi2", "HDMI 2"),
    ("hdmi3", "HDMI 3"),
    ("hdmi4", "HDMI 4"),
    ("hdmi5", "HDMI 5"),
    ("hdmi6", "HDMI 6"),
    ("hdmi7", "HDMI 7"),
    ("hdmi8", "HDMI 8"),
    ("hdmi9", "HDMI 9"),
    ("hdmi10", "HDMI 10"),
    ("hdmiarc", "HDMI ARC"),
    ("input", "INPUT 1"),
    ("input1", "INPUT 1"),
    ("input2", "INPUT 2"),
    ("input3", "INPUT 3"),
    ("input4", "INPUT 4"),
    ("input5", "INPUT 5"),
    ("input6", "INPUT 6"),
    ("input7", "INPUT 7"),
    ("input8", "INPUT 8"),
    ("input9", "INPUT 9"),
    ("input10", "INPUT 10"),
    ("ipod", "IPOD"),
    ("line", "LINE 1"),
    ("line1", "LINE 1"),
    ("line2", "LINE 2"),
    ("line3", "LINE 3"),
    ("line4", "LINE 4"),
    ("line5", "LINE 5"),
    ("line6", "LINE 6"),
    ("line7", "LINE 7"),
    ("mediaplayer", "MEDIA PLAYER"),
    ("optical", "OPTICAL 1"),
    ("optical1", "OPTICAL 1"),
    ("optical2", "OPTICAL 2"),
    ("phono", "PHONO"),
    ("playstation", "PLAYSTATION"),
    ("playstation3", "PLAYSTATION 3"),
    ("playstation4", "PLAYSTATION 4"),
    ("satellite", "SATELLITE"),
    ("satellitetv", "SATELLITE"),
    ("smartcast", "SMARTCAST"),
    ("tuner", "TUNER"),
    ("tv", "TV"),
    ("usbdac", "USB DAC"),
    ("video", "VIDEO 1"),
    ("video1", "VIDEO 1"),
    ("video2", "VIDEO 2"),
    ("video3", "VIDEO 3"),
    ("video4", "VIDEO 4"),
    ("video5", "VIDEO 5"),
    ("video6", "VIDEO 6"),
    ("video7", "VIDEO 7"),
    ("vga", "VGA"),
    ("xbox", "XBOX"),
];

fn normalize(source: &str) -> String {
    source
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn lookup(source: &str) -> Option<&'static str> {
    let normalized = normalize(source);
    VALID_SOURCE_NAMES
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, input)| *input)
}

/// Map host source names onto the inputs Alexa recognizes.
///
/// Unrecognized names are dropped, order is preserved.
pub fn valid_inputs<'s>(sources: impl IntoIterator<Item = &'s str>) -> Vec<&'static str> {
    sources.into_iter().filter_map(lookup).collect()
}

/// `Alexa.InputController`: switching between the player's sources.
#[derive(Debug, Clone, Copy)]
pub struct InputController<'a> {
    entity: &'a EntitySnapshot,
}

impl<'a> InputController<'a> {
    #[must_use]
    pub fn new(entity: &'a EntitySnapshot) -> Self {
        Self { entity }
    }

    /// The current input. `None` while no recognizable source is selected.
    fn input(&self) -> Option<Result<PropertyValue, CapabilityError>> {
        let source = self.entity.attribute(attr::INPUT_SOURCE)?;
        match source.as_str() {
            Some(source) => {
                lookup(source).map(|input| Ok(PropertyValue::new(self.name(), "input", input)))
            }
            None => Some(Err(CapabilityError::InvalidAttribute {
                interface: self.name(),
                attribute: attr::INPUT_SOURCE,
            })),
        }
    }
}

impl<'a> CapabilityInterface<'a> for InputController<'a> {
    fn name(&self) -> &'static str {
        "Alexa.InputController"
    }

    fn properties_supported(&self) -> &'static [&'static str] {
        &["input"]
    }

    fn properties_retrievable(&self) -> bool {
        true
    }

    fn discovery_extra(&self) -> Result<Map<String, Value>, CapabilityError> {
        let inputs: Vec<Value> =
            valid_inputs(self.entity.attribute_str_list(attr::INPUT_SOURCE_LIST))
                .into_iter()
                .map(|name| json!({ "name": name }))
                .collect();

        let mut extra = Map::new();
        extra.insert("inputs".to_string(), Value::Array(inputs));
        Ok(extra)
    }

    fn serialize_properties(&self) -> PropertyIter<'a> {
        let this = *self;
        Box::new(std::iter::once_with(move || this.input()).flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> EntitySnapshot {
        EntitySnapshot::builder()
            .entity_id("media_player.receiver")
            .attribute(attr::INPUT_SOURCE_LIST, vec!["HDMI-1", "Chromecast", "tv", "Aux 2"])
            .attribute(attr::INPUT_SOURCE, "hdmi_1")
            .build()
            .unwrap()
    }

    #[test]
    fn should_normalize_and_keep_recognized_sources_in_order() {
        assert_eq!(
            valid_inputs(["HDMI-1", "Chromecast", "tv", "Aux 2", "Video_3"]),
            vec!["HDMI 1", "TV", "AUX 2", "VIDEO 3"]
        );
    }

    #[test]
    fn should_return_empty_list_for_unrecognized_sources() {
        assert!(valid_inputs(["Netflix", "Spotify"]).is_empty());
        assert!(valid_inputs(std::iter::empty()).is_empty());
    }

    #[test]
    fn should_declare_inputs_in_discovery() {
        let entity = player();
        let json =
            serde_json::to_value(InputController::new(&entity).serialize_discovery().unwrap())
                .unwrap();
        assert_eq!(
            json["inputs"],
            json!([{"name": "HDMI 1"}, {"name": "TV"}, {"name": "AUX 2"}])
        );
        assert_eq!(json["properties"]["proactivelyReported"], false);
    }

    #[test]
    fn should_report_current_input() {
        let entity = player();
        let value = InputController::new(&entity)
            .serialize_properties()
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(value.value, "HDMI 1");
    }

    #[test]
    fn should_skip_unrecognized_current_input() {
        let entity = EntitySnapshot::builder()
            .entity_id("media_player.receiver")
            .attribute(attr::INPUT_SOURCE, "Spotify")
            .build()
            .unwrap();
        assert_eq!(InputController::new(&entity).serialize_properties().count(), 0);
    }

    #[test]
    fn should_fail_when_current_input_is_not_a_string() {
        let entity = EntitySnapshot::builder()
            .entity_id("media_player.receiver")
            .attribute(attr::INPUT_SOURCE, 3_i64)
            .build()
            .unwrap();
        let first = InputController::new(&entity).serialize_properties().next();
        assert!(matches!(
            first,
            Some(Err(CapabilityError::InvalidAttribute { .. }))
        ));
    }
}
