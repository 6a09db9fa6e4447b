//! Core support module
//!
//! Controller settings and diagnostics

mod debug;
mod settings;

pub use debug::{DebugInfo, StateTrace};
pub use settings::{ControllerSettings, SettingsError};
