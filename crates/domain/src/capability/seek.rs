use super::CapabilityInterface;

/// `Alexa.SeekController`: relative seeking within the current media.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeekController;

impl CapabilityInterface<'_> for SeekController {
    fn name(&self) -> &'static str {
        "Alexa.SeekController"
    }
}
