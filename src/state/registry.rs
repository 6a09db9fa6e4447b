//! State registry
//!
//! The fixed catalog of registered states and their enter/leave hooks.
//! States are registered once during setup and never removed.

use std::fmt;

use super::error::ConfigurationError;
use super::id::StateId;

/// Zero-argument side effect run on entering or leaving a state.
pub type Hook = Box<dyn FnMut()>;

/// Optional enter and leave hooks for one state.
///
/// Missing hooks behave as no-ops.
#[derive(Default)]
pub struct StateHooks {
    on_enter: Option<Hook>,
    on_leave: Option<Hook>,
}

impl StateHooks {
    /// Hooks that do nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the hook run after the state becomes current.
    #[must_use]
    pub fn on_enter(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Set the hook run before the state stops being current.
    #[must_use]
    pub fn on_leave(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_leave = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for StateHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHooks")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

/// A registered state record.
#[derive(Debug)]
pub struct State {
    id: StateId,
    hooks: StateHooks,
}

impl State {
    /// Identifier of this state.
    #[must_use]
    pub const fn id(&self) -> StateId {
        self.id
    }

    /// Run the enter hook, if any.
    pub fn enter(&mut self) {
        if let Some(hook) = self.hooks.on_enter.as_mut() {
            hook();
        }
    }

    /// Run the leave hook, if any.
    pub fn leave(&mut self) {
        if let Some(hook) = self.hooks.on_leave.as_mut() {
            hook();
        }
    }
}

/// Proof that a state was registered, returned by [`StateRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateHandle(StateId);

impl StateHandle {
    /// The registered state.
    #[must_use]
    pub const fn id(self) -> StateId {
        self.0
    }
}

/// Catalog of registered states, indexed by [`StateId`].
pub struct StateRegistry {
    states: [Option<State>; StateId::COUNT],
}

impl StateRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: std::array::from_fn(|_| None),
        }
    }

    /// Create a registry holding every state with no-op hooks.
    #[must_use]
    pub fn with_all_states() -> Self {
        let mut registry = Self::new();
        for id in StateId::ALL {
            registry.states[id.index()] = Some(State {
                id,
                hooks: StateHooks::none(),
            });
        }
        registry
    }

    /// Register a state with its hooks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateState`] if `id` is already
    /// registered. The existing hooks are kept.
    pub fn register(
        &mut self,
        id: StateId,
        hooks: StateHooks,
    ) -> Result<StateHandle, ConfigurationError> {
        let slot = &mut self.states[id.index()];
        if slot.is_some() {
            log::error!("State {id} registered twice");
            return Err(ConfigurationError::DuplicateState(id));
        }
        *slot = Some(State { id, hooks });
        Ok(StateHandle(id))
    }

    /// Check whether a state was registered.
    #[must_use]
    pub fn contains(&self, id: StateId) -> bool {
        self.states[id.index()].is_some()
    }

    /// Handle for a registered state.
    ///
    /// A miss after setup is a programming error and is logged.
    #[must_use]
    pub fn lookup(&self, id: StateId) -> Option<StateHandle> {
        if self.contains(id) {
            Some(StateHandle(id))
        } else {
            log::warn!("No state {id} found");
            None
        }
    }

    /// Mutable access to a registered state record.
    pub(crate) fn get_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.states[id.index()].as_mut()
    }

    /// Number of registered states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.iter().filter(|s| s.is_some()).count()
    }

    /// Check if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over registered state ids.
    pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().flatten().map(State::id)
    }
}

impl Default for StateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = StateRegistry::new();
        assert!(registry.is_empty());

        let handle = registry.register(StateId::Idle, StateHooks::none()).unwrap();
        assert_eq!(handle.id(), StateId::Idle);
        assert_eq!(registry.lookup(StateId::Idle), Some(handle));
        assert_eq!(registry.lookup(StateId::Jumping), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_keeps_first_hooks() {
        let entered = Rc::new(Cell::new(0));
        let counter = entered.clone();

        let mut registry = StateRegistry::new();
        registry
            .register(
                StateId::Idle,
                StateHooks::none().on_enter(move || counter.set(counter.get() + 1)),
            )
            .unwrap();
        let err = registry
            .register(StateId::Idle, StateHooks::none())
            .unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateState(StateId::Idle));

        registry.get_mut(StateId::Idle).unwrap().enter();
        assert_eq!(entered.get(), 1, "Original enter hook should survive");
    }

    #[test]
    fn test_missing_hooks_are_noops() {
        let mut registry = StateRegistry::with_all_states();
        assert_eq!(registry.len(), StateId::COUNT);

        assert!(registry.lookup(StateId::Landing).is_some());
        let state = registry.get_mut(StateId::Landing).unwrap();
        state.enter();
        state.leave();
        assert_eq!(state.id(), StateId::Landing);
    }
}
