//! Sprite animation
//!
//! Clip definitions for the character sheet and a playback reference that
//! reports when one-shot clips finish.

mod clip;
mod player;

pub use clip::{ClipCatalog, ClipSpec};
pub use player::{AnimationPlayer, PlaybackState};
