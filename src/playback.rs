//! Playback controller: the shuffle/repeat state machine behind the player.
//!
//! `PlaybackController` owns the playlist position and flags and drives a
//! single `MediaElement`. Play attempts may be rejected by the element;
//! the controller swallows those and simply stays paused.

mod controller;
mod element;
mod types;

pub use controller::PlaybackController;
pub use element::{DeckElement, MediaElement};
pub use types::*;
