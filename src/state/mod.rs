//! Player state machine
//!
//! Closed state/event catalogs, the state registry with enter/leave hooks,
//! the transition table, and the engine that owns the current state.

mod error;
mod id;
mod machine;
mod registry;
mod table;

pub use error::{ConfigurationError, StateRole};
pub use id::{EventId, StateId};
pub use machine::{
    StateChange, StateMachine, StateMachineBuilder, SubscriptionId, TransitionCause,
};
pub use registry::{Hook, State, StateHandle, StateHooks, StateRegistry};
pub use table::TransitionTable;
