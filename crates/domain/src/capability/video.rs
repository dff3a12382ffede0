use super::CapabilityInterface;

/// `Alexa.ChannelController`: changing channels by number or name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelController;

impl CapabilityInterface<'_> for ChannelController {
    fn name(&self) -> &'static str {
        "Alexa.ChannelController"
    }
}

/// `Alexa.RemoteVideoPlayer`: searching and playing video content.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteVideoPlayer;

impl CapabilityInterface<'_> for RemoteVideoPlayer {
    fn name(&self) -> &'static str {
        "Alexa.RemoteVideoPlayer"
    }
}
