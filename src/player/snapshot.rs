//! Per-frame physics snapshot consumed by the driver

/// Sign of the vertical velocity in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VelocitySign {
    /// Moving up
    Negative,
    /// Not moving vertically
    #[default]
    Zero,
    /// Moving down (falling)
    Positive,
}

impl VelocitySign {
    /// Classify a vertical velocity.
    #[must_use]
    pub fn from_velocity(velocity: f32) -> Self {
        if velocity > 0.0 {
            Self::Positive
        } else if velocity < 0.0 {
            Self::Negative
        } else {
            Self::Zero
        }
    }
}

/// What the physics collaborator reports about the character each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhysicsSnapshot {
    /// Touching the ground
    pub grounded: bool,
    /// Direction of vertical motion
    pub vertical_velocity: VelocitySign,
}

impl PhysicsSnapshot {
    /// Standing on the ground
    #[must_use]
    pub const fn grounded() -> Self {
        Self {
            grounded: true,
            vertical_velocity: VelocitySign::Zero,
        }
    }

    /// In the air, moving in the given vertical direction
    #[must_use]
    pub const fn airborne(vertical_velocity: VelocitySign) -> Self {
        Self {
            grounded: false,
            vertical_velocity,
        }
    }

    /// Build a snapshot from a body's ground contact and vertical velocity
    #[must_use]
    pub fn from_body(grounded: bool, vertical_velocity: f32) -> Self {
        Self {
            grounded,
            vertical_velocity: VelocitySign::from_velocity(vertical_velocity),
        }
    }

    /// Descending (vertical velocity positive)
    #[must_use]
    pub fn is_falling(&self) -> bool {
        self.vertical_velocity == VelocitySign::Positive
    }
}
