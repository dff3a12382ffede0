//! Alexa capability interfaces.
//!
//! An interface is a protocol-level unit of functionality an endpoint
//! declares during discovery (`Alexa.PowerController`, `Alexa.Speaker`, …)
//! and, for some of them, a set of properties reported back to Alexa.
//!
//! Interfaces borrow the [`EntitySnapshot`](crate::entity::EntitySnapshot)
//! they describe and never mutate it.

mod alexa;
mod endpoint_health;
mod equalizer;
mod input;
mod launcher;
mod playback;
mod power;
mod seek;
mod speaker;
mod video;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use alexa::Alexa;
pub use endpoint_health::EndpointHealth;
pub use equalizer::EqualizerController;
pub use input::{InputController, valid_inputs};
pub use launcher::Launcher;
pub use playback::{PlaybackController, PlaybackStateReporter};
pub use power::PowerController;
pub use seek::SeekController;
pub use speaker::{Speaker, StepSpeaker};
pub use video::{ChannelController, RemoteVideoPlayer};

use crate::error::CapabilityError;
use crate::time::{Timestamp, now};

/// Locales most interfaces are available in.
pub const DEFAULT_LOCALES: &[&str] = &[
    "de-DE", "en-AU", "en-CA", "en-GB", "en-IN", "en-US", "es-ES", "es-MX", "es-US", "fr-CA",
    "fr-FR", "hi-IN", "it-IT", "ja-JP", "pt-BR",
];

/// Lazily produced property values. Each item is pulled from the interface
/// only when the consumer asks for it.
pub type PropertyIter<'a> = Box<dyn Iterator<Item = Result<PropertyValue, CapabilityError>> + 'a>;

/// Contract every Alexa capability interface implements.
///
/// `'a` is the lifetime of the entity the interface describes. Property
/// iterators borrow the entity rather than the interface, so they can outlive
/// the interface value that produced them.
pub trait CapabilityInterface<'a> {
    /// Interface name, e.g. `Alexa.PowerController`.
    fn name(&self) -> &'static str;

    /// Locales in which Alexa supports this interface.
    fn supported_locales(&self) -> &'static [&'static str] {
        DEFAULT_LOCALES
    }

    /// Names of the properties this interface reports.
    fn properties_supported(&self) -> &'static [&'static str] {
        &[]
    }

    /// Whether property changes are pushed to Alexa.
    fn properties_proactively_reported(&self) -> bool {
        false
    }

    /// Whether Alexa may query the properties.
    fn properties_retrievable(&self) -> bool {
        false
    }

    /// Interface-specific discovery fields (`inputs`, `configurations`, …).
    ///
    /// # Errors
    ///
    /// Returns a [`CapabilityError`] when the entity attributes cannot be
    /// described.
    fn discovery_extra(&self) -> Result<Map<String, Value>, CapabilityError> {
        Ok(Map::new())
    }

    /// Serialize the capability entry of a discovery document.
    ///
    /// # Errors
    ///
    /// Propagates [`discovery_extra`](Self::discovery_extra) failures.
    fn serialize_discovery(&self) -> Result<CapabilityDiscovery, CapabilityError> {
        let supported = self.properties_supported();
        let properties = (!supported.is_empty()).then(|| PropertiesDescription {
            supported: supported
                .iter()
                .map(|name| SupportedProperty {
                    name: (*name).to_string(),
                })
                .collect(),
            proactively_reported: self.properties_proactively_reported(),
            retrievable: self.properties_retrievable(),
        });

        Ok(CapabilityDiscovery {
            kind: "AlexaInterface".to_string(),
            interface: self.name().to_string(),
            version: "3".to_string(),
            properties,
            extra: self.discovery_extra()?,
        })
    }

    /// Current values of the supported properties.
    fn serialize_properties(&self) -> PropertyIter<'a> {
        Box::new(std::iter::empty())
    }
}

/// One entry of the `capabilities` list of a discovery document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityDiscovery {
    #[serde(rename = "type")]
    pub kind: String,
    pub interface: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertiesDescription>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesDescription {
    pub supported: Vec<SupportedProperty>,
    pub proactively_reported: bool,
    pub retrievable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedProperty {
    pub name: String,
}

/// A property value in Alexa's context format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    pub namespace: String,
    pub name: String,
    pub value: Value,
    pub time_of_sample: Timestamp,
    pub uncertainty_in_milliseconds: u32,
}

impl PropertyValue {
    /// A value sampled now.
    #[must_use]
    pub fn new(namespace: &str, name: &str, value: impl Into<Value>) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            value: value.into(),
            time_of_sample: now(),
            uncertainty_in_milliseconds: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl CapabilityInterface<'_> for Bare {
        fn name(&self) -> &'static str {
            "Alexa.Bare"
        }
    }

    struct WithProperty;

    impl CapabilityInterface<'_> for WithProperty {
        fn name(&self) -> &'static str {
            "Alexa.WithProperty"
        }

        fn properties_supported(&self) -> &'static [&'static str] {
            &["level"]
        }

        fn properties_retrievable(&self) -> bool {
            true
        }
    }

    #[test]
    fn should_serialize_bare_interface_without_properties() {
        let json = serde_json::to_value(Bare.serialize_discovery().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "AlexaInterface",
                "interface": "Alexa.Bare",
                "version": "3"
            })
        );
    }

    #[test]
    fn should_serialize_properties_block() {
        let json = serde_json::to_value(WithProperty.serialize_discovery().unwrap()).unwrap();
        assert_eq!(
            json["properties"],
            serde_json::json!({
                "supported": [{"name": "level"}],
                "proactivelyReported": false,
                "retrievable": true
            })
        );
    }

    #[test]
    fn should_yield_no_properties_by_default() {
        assert_eq!(Bare.serialize_properties().count(), 0);
        assert!(Bare.supported_locales().contains(&"en-US"));
    }

    #[test]
    fn should_serialize_property_value_in_context_format() {
        let value = PropertyValue::new("Alexa.PowerController", "powerState", "ON");
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["namespace"], "Alexa.PowerController");
        assert_eq!(json["name"], "powerState");
        assert_eq!(json["value"], "ON");
        assert_eq!(json["uncertaintyInMilliseconds"], 0);
        assert!(json["timeOfSample"].is_string());
    }
}
