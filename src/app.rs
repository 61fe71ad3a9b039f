//! Application state shared by the HTTP handlers.
//!
//! `App` holds the loaded settings, the player, the vote ballot and the
//! vote store behind cheap clonable handles.

mod model;

pub use model::*;
