use serde_json::json;

use super::{CapabilityInterface, PropertyIter, PropertyValue};
use crate::entity::EntitySnapshot;

/// `Alexa.EndpointHealth`: reachability of the endpoint.
#[derive(Debug, Clone, Copy)]
pub struct EndpointHealth<'a> {
    entity: &'a EntitySnapshot,
}

impl<'a> EndpointHealth<'a> {
    #[must_use]
    pub fn new(entity: &'a EntitySnapshot) -> Self {
        Self { entity }
    }
}

impl<'a> CapabilityInterface<'a> for EndpointHealth<'a> {
    fn name(&self) -> &'static str {
        "Alexa.EndpointHealth"
    }

    fn properties_supported(&self) -> &'static [&'static str] {
        &["connectivity"]
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
            let connectivity = if this.entity.state.is_available() {
                "OK"
            } else {
                "UNREACHABLE"
            };
            Ok(PropertyValue::new(
                this.name(),
                "connectivity",
                json!({ "value": connectivity }),
            ))
        }))
    }
}
