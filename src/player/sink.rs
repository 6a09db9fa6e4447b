//! Outbound requests to the rendering/physics collaborator

/// Which way the sprite faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Mirrored sprite
    Left,
    /// Sheet orientation
    #[default]
    Right,
}

impl Facing {
    /// `-1.0` for left, `1.0` for right
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Receives the controller's fire-and-forget output each frame.
pub trait CharacterSink {
    /// Play a clip. Unless `restart_if_playing`, a clip that is already
    /// current keeps playing from where it is.
    fn play_animation(&mut self, clip: &str, restart_if_playing: bool);

    /// Set horizontal velocity (negative is left).
    fn set_horizontal_velocity(&mut self, velocity: f32);

    /// Kick the character upward with the given magnitude.
    fn apply_vertical_impulse(&mut self, magnitude: f32);

    /// Facing changed.
    fn set_facing(&mut self, _facing: Facing) {}
}
