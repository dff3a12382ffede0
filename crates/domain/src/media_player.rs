//! Media player domain constants: feature bits and attribute names.

/// Domain name of media player entities.
pub const DOMAIN: &str = "media_player";

/// `device_class` value identifying a speaker.
pub const DEVICE_CLASS_SPEAKER: &str = "speaker";

/// Attribute names read by the media player adapter and its interfaces.
pub mod attr {
    pub const VOLUME_LEVEL: &str = "volume_level";
    pub const IS_VOLUME_MUTED: &str = "is_volume_muted";
    pub const INPUT_SOURCE: &str = "source";
    pub const INPUT_SOURCE_LIST: &str = "source_list";
    pub const SOUND_MODE: &str = "sound_mode";
    pub const SOUND_MODE_LIST: &str = "sound_mode_list";
}

/// The `supported_features` bitmask of a media player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaPlayerFeatures(u32);

impl MediaPlayerFeatures {
    pub const PAUSE: Self = Self(1);
    pub const SEEK: Self = Self(2);
    pub const VOLUME_SET: Self = Self(4);
    pub const VOLUME_MUTE: Self = Self(8);
    pub const PREVIOUS_TRACK: Self = Self(16);
    pub const NEXT_TRACK: Self = Self(32);
    pub const TURN_ON: Self = Self(128);
    pub const TURN_OFF: Self = Self(256);
    pub const PLAY_MEDIA: Self = Self(512);
    pub const VOLUME_STEP: Self = Self(1024);
    pub const SELECT_SOURCE: Self = Self(2048);
    pub const STOP: Self = Self(4096);
    pub const CLEAR_PLAYLIST: Self = Self(8192);
    pub const PLAY: Self = Self(16384);
    pub const SHUFFLE_SET: Self = Self(32768);
    pub const SELECT_SOUND_MODE: Self = Self(65536);

    /// Any of the transport controls.
    pub const PLAYBACK: Self = Self(
        Self::PLAY.0 | Self::PAUSE.0 | Self::STOP.0 | Self::NEXT_TRACK.0 | Self::PREVIOUS_TRACK.0,
    );

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// At least one bit of `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl std::ops::BitOr for MediaPlayerFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
