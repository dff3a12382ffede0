//! Entity state: the current operational state of an entity.

use serde::{Deserialize, Serialize};

/// Discrete operational state of an entity.
///
/// Unrecognized host states deserialize as [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityState {
    On,
    Off,
    Playing,
    Paused,
    Idle,
    Standby,
    Unavailable,
    #[default]
    #[serde(other)]
    Unknown,
}

impl EntityState {
    /// Whether the entity is reachable (anything but [`Unavailable`](Self::Unavailable)).
    #[must_use]
    pub fn is_available(self) -> bool {
        !matches!(self, Self::Unavailable)
    }

    /// Whether the entity should be reported as powered on.
    #[must_use]
    pub fn is_powered_on(self) -> bool {
        !matches!(self, Self::Off | Self::Standby | Self::Unavailable)
    }
}

impl std::fmt::Display for EntityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
            Self::Playing => f.write_str("playing"),
            Self::Paused => f.write_str("paused"),
            Self::Idle => f.write_str("idle"),
            Self::Standby => f.write_str("standby"),
            Self::Unavailable => f.write_str("unavailable"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}
