//! Player controller
//!
//! Wires the state machine to the per-frame collaborators: physics snapshot
//! in, input actions in, clip completions in, animation and velocity
//! requests out.

mod combo;
mod driver;
mod sink;
mod snapshot;

pub use combo::{ComboFlag, next_phase};
pub use driver::{Driver, PlayerController, build_player_machine};
pub use sink::{CharacterSink, Facing};
pub use snapshot::{PhysicsSnapshot, VelocitySign};
