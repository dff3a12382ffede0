use super::CapabilityInterface;

/// The base `Alexa` interface every endpoint declares.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alexa;

impl CapabilityInterface<'_> for Alexa {
    fn name(&self) -> &'static str {
        "Alexa"
    }
}
