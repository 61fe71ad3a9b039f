//! Small playback types shared by the controller, the element and the API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RepeatModeSetting;
use crate::library::Track;

/// What happens when a track finishes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop after the last track.
    Off,
    /// Replay the current track.
    One,
    /// Wrap around to the first track.
    #[default]
    All,
}

impl RepeatMode {
    /// Next mode in the `off -> one -> all -> off` cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Off => Self::One,
            Self::One => Self::All,
            Self::All => Self::Off,
        }
    }
}

impl From<RepeatModeSetting> for RepeatMode {
    fn from(setting: RepeatModeSetting) -> Self {
        match setting {
            RepeatModeSetting::Off => Self::Off,
            RepeatModeSetting::One => Self::One,
            RepeatModeSetting::All => Self::All,
        }
    }
}

/// Why a media element refused to start playing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Autoplay policy: no user gesture has unlocked playback yet.
    #[error("playback was not allowed without a user gesture")]
    NotAllowed,
    /// `play` was called with nothing loaded.
    #[error("no source is loaded")]
    NoSource,
}

/// Serializable view of the controller state.
#[derive(Debug, Clone, Serialize)]
pub struct PlaybackSnapshot {
    pub tracks: Vec<Track>,
    pub current_index: Option<usize>,
    pub current: Option<Track>,
    pub is_playing: bool,
    pub shuffle: bool,
    pub repeat_mode: RepeatMode,
}
