//! Concrete entity adapters, one per supported entity domain.

pub mod media_player;

pub use media_player::MediaPlayerAdapter;
