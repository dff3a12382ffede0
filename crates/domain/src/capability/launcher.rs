use super::CapabilityInterface;

/// `Alexa.Launcher`: launching apps and shortcuts on the device.
#[derive(Debug, Clone, Copy, Default)]
pub struct Launcher;

impl CapabilityInterface<'_> for Launcher {
    fn name(&self) -> &'static str {
        "Alexa.Launcher"
    }
}
