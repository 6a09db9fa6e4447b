//! State and event identifiers
//!
//! Both sets are closed at compile time. Each variant has a dense index so
//! registries and tables can be backed by fixed-size arrays.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// StateId
// ============================================================================

/// Every mode the player character can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StateId {
    /// Standing still
    Idle,
    /// Running left
    MovingLeft,
    /// Running right
    MovingRight,
    /// Airborne after a jump, still rising
    Jumping,
    /// Airborne and descending
    Landing,

    // -------------------------------------------------------------------------
    // Combo tier 1
    // -------------------------------------------------------------------------
    /// Wind-up of the first swing
    Attack1Anticipation,
    /// Hit frames of the first swing
    Attack1Contact,
    /// Follow-through of the first swing
    Attack1Recovery,

    // -------------------------------------------------------------------------
    // Combo tier 2
    // -------------------------------------------------------------------------
    /// Wind-up of the second swing
    Attack2Anticipation,
    /// Hit frames of the second swing
    Attack2Contact,
    /// Follow-through of the second swing
    Attack2Recovery,

    // -------------------------------------------------------------------------
    // Combo tier 3
    // -------------------------------------------------------------------------
    /// Wind-up of the finisher
    Attack3Anticipation,
    /// Hit frames of the finisher
    Attack3Contact,
    /// Follow-through of the finisher
    Attack3Recovery,
}

impl StateId {
    /// Number of states.
    pub const COUNT: usize = 14;

    /// All states in declaration order.
    pub const ALL: [StateId; Self::COUNT] = [
        Self::Idle,
        Self::MovingLeft,
        Self::MovingRight,
        Self::Jumping,
        Self::Landing,
        Self::Attack1Anticipation,
        Self::Attack1Contact,
        Self::Attack1Recovery,
        Self::Attack2Anticipation,
        Self::Attack2Contact,
        Self::Attack2Recovery,
        Self::Attack3Anticipation,
        Self::Attack3Contact,
        Self::Attack3Recovery,
    ];

    /// Dense index in `0..COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// State name for debugging and logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::MovingLeft => "MovingLeft",
            Self::MovingRight => "MovingRight",
            Self::Jumping => "Jumping",
            Self::Landing => "Landing",
            Self::Attack1Anticipation => "Attack1Anticipation",
            Self::Attack1Contact => "Attack1Contact",
            Self::Attack1Recovery => "Attack1Recovery",
            Self::Attack2Anticipation => "Attack2Anticipation",
            Self::Attack2Contact => "Attack2Contact",
            Self::Attack2Recovery => "Attack2Recovery",
            Self::Attack3Anticipation => "Attack3Anticipation",
            Self::Attack3Contact => "Attack3Contact",
            Self::Attack3Recovery => "Attack3Recovery",
        }
    }

    /// Key of the animation clip played while in this state.
    ///
    /// Both movement directions share `"run"`; the sprite is mirrored by facing.
    #[must_use]
    pub const fn clip_key(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::MovingLeft | Self::MovingRight => "run",
            Self::Jumping => "jump",
            Self::Landing => "fall",
            Self::Attack1Anticipation => "attack_1_anticipation",
            Self::Attack1Contact => "attack_1_contact",
            Self::Attack1Recovery => "attack_1_recovery",
            Self::Attack2Anticipation => "attack_2_anticipation",
            Self::Attack2Contact => "attack_2_contact",
            Self::Attack2Recovery => "attack_2_recovery",
            Self::Attack3Anticipation => "attack_3_anticipation",
            Self::Attack3Contact => "attack_3_contact",
            Self::Attack3Recovery => "attack_3_recovery",
        }
    }

    /// Resolve a finished clip back to the attack phase that plays it.
    ///
    /// Only attack clips map uniquely to a state; looping clips return `None`.
    #[must_use]
    pub fn from_clip_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|state| state.is_attack_phase())
            .find(|state| state.clip_key() == key)
    }

    /// Whether this is one of the nine combo phases.
    #[must_use]
    pub const fn is_attack_phase(self) -> bool {
        self.index() >= Self::Attack1Anticipation.index()
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// EventId
// ============================================================================

/// Discrete input or physics signals that may cause a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventId {
    /// Jump key pressed
    Jump,
    /// Touched the ground while descending
    Land,
    /// Vertical velocity turned downward
    Fall,
    /// Left key pressed
    MoveLeft,
    /// Left key released
    MoveLeftReleased,
    /// Right key pressed
    MoveRight,
    /// Right key released
    MoveRightReleased,
    /// Attack key pressed
    Attack,
}

impl EventId {
    /// Number of events.
    pub const COUNT: usize = 8;

    /// All events in declaration order.
    pub const ALL: [EventId; Self::COUNT] = [
        Self::Jump,
        Self::Land,
        Self::Fall,
        Self::MoveLeft,
        Self::MoveLeftReleased,
        Self::MoveRight,
        Self::MoveRightReleased,
        Self::Attack,
    ];

    /// Dense index in `0..COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Event name for debugging and logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jump => "Jump",
            Self::Land => "Land",
            Self::Fall => "Fall",
            Self::MoveLeft => "MoveLeft",
            Self::MoveLeftReleased => "MoveLeftReleased",
            Self::MoveRight => "MoveRight",
            Self::MoveRightReleased => "MoveRightReleased",
            Self::Attack => "Attack",
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
