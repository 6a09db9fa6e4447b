//! Key to player action mapping
//!
//! Physical keys map to logical actions so the controller never sees key
//! codes. Several keys may drive one action; an action is held while any of
//! its keys is held.
//!
//! # Example
//!
//! ```ignore
//! let mut bindings = ActionBindings::with_defaults();
//! bindings.bind(KeyCode::KeyK, Action::Attack);
//!
//! let frame = bindings.resolve(&input);
//! if frame.just_pressed(Action::Jump) { /* ... */ }
//! ```

use rustc_hash::FxHashMap;
use winit::keyboard::KeyCode;

use super::state::Input;

// ============================================================================
// Actions
// ============================================================================

/// Logical inputs the player controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Run left
    Left,
    /// Run right
    Right,
    /// Jump
    Jump,
    /// Swing the blade
    Attack,
}

impl Action {
    /// Number of actions.
    pub const COUNT: usize = 4;

    /// All actions.
    pub const ALL: [Action; Self::COUNT] = [Self::Left, Self::Right, Self::Jump, Self::Attack];

    const fn index(self) -> usize {
        self as usize
    }
}

// ============================================================================
// Action Frame
// ============================================================================

/// Action edges and held state sampled for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionFrame {
    pressed: [bool; Action::COUNT],
    released: [bool; Action::COUNT],
    held: [bool; Action::COUNT],
}

impl ActionFrame {
    /// A frame with no input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a down edge; the action is also held.
    #[must_use]
    pub fn press(mut self, action: Action) -> Self {
        self.pressed[action.index()] = true;
        self.held[action.index()] = true;
        self
    }

    /// Mark an up edge; the action is no longer held.
    #[must_use]
    pub fn release(mut self, action: Action) -> Self {
        self.released[action.index()] = true;
        self.held[action.index()] = false;
        self
    }

    /// Mark an action as held without an edge.
    #[must_use]
    pub fn hold(mut self, action: Action) -> Self {
        self.held[action.index()] = true;
        self
    }

    /// Whether the action went down this frame.
    #[must_use]
    pub fn just_pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }

    /// Whether the action went up this frame.
    #[must_use]
    pub fn just_released(&self, action: Action) -> bool {
        self.released[action.index()]
    }

    /// Whether the action is held down.
    #[must_use]
    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }
}

// ============================================================================
// Bindings
// ============================================================================

/// Maps physical keys to actions.
#[derive(Debug, Clone)]
pub struct ActionBindings {
    /// Key to action bindings
    key_bindings: FxHashMap<KeyCode, Action>,
    /// Reverse lookup: action to keys
    action_keys: FxHashMap<Action, Vec<KeyCode>>,
}

impl ActionBindings {
    /// Create empty bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_bindings: FxHashMap::default(),
            action_keys: FxHashMap::default(),
        }
    }

    /// Arrow keys plus A/D, jump on Up/W/Space, attack on X/J.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut bindings = Self::new();

        bindings.bind(KeyCode::ArrowLeft, Action::Left);
        bindings.bind(KeyCode::KeyA, Action::Left);
        bindings.bind(KeyCode::ArrowRight, Action::Right);
        bindings.bind(KeyCode::KeyD, Action::Right);

        bindings.bind(KeyCode::ArrowUp, Action::Jump);
        bindings.bind(KeyCode::KeyW, Action::Jump);
        bindings.bind(KeyCode::Space, Action::Jump);

        bindings.bind(KeyCode::KeyX, Action::Attack);
        bindings.bind(KeyCode::KeyJ, Action::Attack);

        bindings
    }

    /// Bind a key to an action, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        if let Some(old_action) = self.key_bindings.get(&key)
            && let Some(keys) = self.action_keys.get_mut(old_action)
        {
            keys.retain(|k| *k != key);
        }

        self.key_bindings.insert(key, action);
        self.action_keys.entry(action).or_default().push(key);
    }

    /// Unbind a key.
    pub fn unbind(&mut self, key: KeyCode) {
        if let Some(action) = self.key_bindings.remove(&key)
            && let Some(keys) = self.action_keys.get_mut(&action)
        {
            keys.retain(|k| *k != key);
        }
    }

    /// Get the action for a key.
    #[must_use]
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.key_bindings.get(&key).copied()
    }

    /// Get all keys bound to an action.
    #[must_use]
    pub fn get_keys(&self, action: Action) -> &[KeyCode] {
        self.action_keys
            .get(&action)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Sample the action frame from raw key state.
    ///
    /// A release only counts once no other key bound to the action is held.
    #[must_use]
    pub fn resolve(&self, input: &Input) -> ActionFrame {
        let mut frame = ActionFrame::new();
        for action in Action::ALL {
            let keys = self.get_keys(action);
            let i = action.index();
            frame.held[i] = keys.iter().any(|&k| input.is_key_pressed(k));
            frame.pressed[i] = keys.iter().any(|&k| input.is_key_just_pressed(k));
            frame.released[i] =
                !frame.held[i] && keys.iter().any(|&k| input.is_key_just_released(k));
        }
        frame
    }
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self::with_defaults()
    }
}
