//! Raw keyboard state
//!
//! Tracks held keys plus per-frame press and release edges. Key repeat does
//! not produce a second press edge.

use std::collections::HashSet;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Keyboard state for one frame
#[derive(Debug, Default)]
pub struct Input {
    /// Currently pressed keys
    pressed_keys: HashSet<KeyCode>,
    /// Keys that were just pressed this frame
    just_pressed_keys: HashSet<KeyCode>,
    /// Keys that were just released this frame
    just_released_keys: HashSet<KeyCode>,
}

impl Input {
    /// Create a new input tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the start of each frame to clear per-frame edges
    pub fn update(&mut self) {
        self.just_pressed_keys.clear();
        self.just_released_keys.clear();
    }

    /// Process a keyboard event
    pub fn process_keyboard(&mut self, key_code: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(key_code) {
                    self.just_pressed_keys.insert(key_code);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&key_code) {
                    self.just_released_keys.insert(key_code);
                }
            }
        }
    }

    /// Shorthand for a key-down event
    pub fn press(&mut self, key_code: KeyCode) {
        self.process_keyboard(key_code, ElementState::Pressed);
    }

    /// Shorthand for a key-up event
    pub fn release(&mut self, key_code: KeyCode) {
        self.process_keyboard(key_code, ElementState::Released);
    }

    /// Check if a key is currently pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Check if a key was just pressed this frame
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed_keys.contains(&key)
    }

    /// Check if a key was just released this frame
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.just_released_keys.contains(&key)
    }
}
