use super::{CapabilityInterface, PropertyIter, PropertyValue};
use crate::entity::EntitySnapshot;

/// `Alexa.PowerController`: reports and toggles the power state.
#[derive(Debug, Clone, Copy)]
pub struct PowerController<'a> {
    entity: &'a EntitySnapshot,
}

impl<'a> PowerController<'a> {
    #[must_use]
    pub fn new(entity: &'a EntitySnapshot) -> Self {
        Self { entity }
    }

    fn power_state(&self) -> &'static str {
        if self.entity.state.is_powered_on() {
            "ON"
        } else {
            "OFF"
        }
    }
}

impl<'a> CapabilityInterface<'a> for PowerController<'a> {
    fn name(&self) -> &'static str {
        "Alexa.PowerController"
    }

    fn properties_supported(&self) -> &'static [&'static str] {
        &["powerState"]
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
                "powerState",
                this.power_state(),
            ))
        }))
    }
}
