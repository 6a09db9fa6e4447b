//! Combo/attack policy
//!
//! Decides, when an attack phase's clip finishes, which phase comes next.
//! Contact phases branch on whether attack was pressed again during the
//! phase; every other phase has a fixed successor.

use std::cell::Cell;
use std::rc::Rc;

use crate::state::StateId;

/// Whether attack was re-pressed during the current attack phase.
///
/// Clones share the same flag, so state enter hooks and the driver can both
/// reach it.
#[derive(Debug, Clone, Default)]
pub struct ComboFlag(Rc<Cell<bool>>);

impl ComboFlag {
    /// A cleared flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a re-press.
    pub fn set(&self) {
        self.0.set(true);
    }

    /// Reset to not pressed.
    pub fn clear(&self) {
        self.0.set(false);
    }

    /// Whether a re-press was recorded.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    /// Read and reset.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// Phase that follows `finished`.
///
/// `combo` only matters for the first two contact phases. Returns `None` for
/// states that are not attack phases.
#[must_use]
pub fn next_phase(finished: StateId, combo: bool) -> Option<StateId> {
    use StateId::*;

    let next = match finished {
        Attack1Anticipation => Attack1Contact,
        Attack1Contact if combo => Attack2Anticipation,
        Attack1Contact => Attack1Recovery,
        Attack1Recovery => Idle,

        Attack2Anticipation => Attack2Contact,
        Attack2Contact if combo => Attack3Anticipation,
        Attack2Contact => Attack2Recovery,
        Attack2Recovery => Idle,

        Attack3Anticipation => Attack3Contact,
        Attack3Contact => Attack3Recovery,
        Attack3Recovery => Idle,

        Idle | MovingLeft | MovingRight | Jumping | Landing => return None,
    };
    Some(next)
}
