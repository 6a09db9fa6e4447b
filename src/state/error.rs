//! Configuration errors raised while wiring or forcing states

use std::fmt;

use super::id::StateId;

/// Which side of an operation referenced a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateRole {
    /// Source state of a transition
    From,
    /// Destination state of a transition
    To,
    /// Target of a forced transition
    Target,
    /// Initial state of a machine
    Initial,
}

impl fmt::Display for StateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => write!(f, "\"from\""),
            Self::To => write!(f, "\"to\""),
            Self::Target => write!(f, "target"),
            Self::Initial => write!(f, "initial"),
        }
    }
}

/// A state referenced somewhere it was never registered.
///
/// These are developer bugs, caught at setup or by tests. The operation that
/// reports one leaves the machine untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// State was never registered
    UnregisteredState {
        /// Offending state
        state: StateId,
        /// Where it was referenced
        role: StateRole,
    },
    /// State registered twice
    DuplicateState(StateId),
}

impl ConfigurationError {
    pub(crate) fn unregistered(state: StateId, role: StateRole) -> Self {
        Self::UnregisteredState { state, role }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnregisteredState { state, role } => {
                write!(f, "{role} state {state} not found")
            }
            Self::DuplicateState(state) => write!(f, "state {state} registered twice"),
        }
    }
}

impl std::error::Error for ConfigurationError {}
