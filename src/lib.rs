//! Player locomotion and combo-attack controller
//!
//! This crate provides:
//! - A table-driven state machine with enter/leave hooks
//! - A three-tier combo policy driven by animation completion
//! - A per-frame driver turning physics and input into animation and velocity requests
//! - Key bindings, sprite clip definitions and RON/JSON settings

pub mod animation;
pub mod core;
pub mod input;
pub mod player;
pub mod state;

// Re-exports for convenience
pub use winit;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::animation::{AnimationPlayer, ClipCatalog, ClipSpec};
    pub use crate::core::{ControllerSettings, DebugInfo, StateTrace};
    pub use crate::input::{Action, ActionBindings, ActionFrame, Input};
    pub use crate::player::{
        CharacterSink, Facing, PhysicsSnapshot, PlayerController, VelocitySign,
    };
    pub use crate::state::{EventId, StateChange, StateId, StateMachine};
    pub use winit::keyboard::KeyCode;
}
