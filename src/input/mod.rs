//! Input handling module
//!
//! Raw key state tracking and the mapping from keys to player actions.

mod action;
mod state;

pub use action::{Action, ActionBindings, ActionFrame};
pub use state::Input;
