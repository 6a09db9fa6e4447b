//! State machine engine
//!
//! Holds the single current state and applies transitions. Two entry points
//! mutate it:
//!
//! - [`StateMachine::trigger_event`] looks the event up in the transition table
//! - [`StateMachine::force_state`] bypasses the table (combo progression)
//!
//! Both run the same protocol: leave hook of the old state, swap, enter hook
//! of the new state, then notify subscribers. Subscribers therefore only ever
//! see a state whose enter hook has finished.
//!
//! # Example
//!
//! ```ignore
//! let mut builder = StateMachineBuilder::new();
//! builder.register(StateId::Idle, StateHooks::none())?;
//! builder.register(StateId::Jumping, StateHooks::none().on_enter(|| play_whoosh()))?;
//! assert!(builder.add_transition(EventId::Jump, StateId::Idle, StateId::Jumping));
//!
//! let mut machine = builder.build()?;
//! machine.trigger_event(EventId::Jump);
//! assert!(machine.is_in(StateId::Jumping));
//! ```

use std::fmt;

use smallvec::SmallVec;

use super::error::{ConfigurationError, StateRole};
use super::id::{EventId, StateId};
use super::registry::{StateHandle, StateHooks, StateRegistry};
use super::table::TransitionTable;

// ============================================================================
// Notifications
// ============================================================================

/// What caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionCause {
    /// Looked up in the transition table
    Event(EventId),
    /// Requested directly via `force_state`
    Forced,
}

impl fmt::Display for TransitionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(event) => write!(f, "{event}"),
            Self::Forced => write!(f, "forced"),
        }
    }
}

/// A completed change of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    /// State that was left
    pub from: StateId,
    /// State that is now current
    pub to: StateId,
    /// Why the change happened
    pub cause: TransitionCause,
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.cause)
    }
}

/// Identifies a subscription for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&StateChange)>;

// ============================================================================
// Builder
// ============================================================================

/// Setup-time wiring of states and transitions.
///
/// The table can only be mutated here; the built machine is read-only apart
/// from its current state.
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    registry: StateRegistry,
    table: TransitionTable,
}

impl StateMachineBuilder {
    /// Create a builder with no states.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state with its enter/leave hooks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateState`] if already registered.
    pub fn register(
        &mut self,
        id: StateId,
        hooks: StateHooks,
    ) -> Result<StateHandle, ConfigurationError> {
        self.registry.register(id, hooks)
    }

    /// Add an event transition. Returns `false` if either state is unregistered.
    pub fn add_transition(&mut self, event: EventId, from: StateId, to: StateId) -> bool {
        self.table.add_transition(&self.registry, event, from, to)
    }

    /// Add the same event transition from several source states.
    ///
    /// Returns `true` only if every transition was added.
    pub fn add_transitions(&mut self, event: EventId, from: &[StateId], to: StateId) -> bool {
        from.iter()
            .fold(true, |ok, &source| self.add_transition(event, source, to) && ok)
    }

    /// Registered states so far.
    #[must_use]
    pub fn registry(&self) -> &StateRegistry {
        &self.registry
    }

    /// Build a machine starting in [`StateId::Idle`].
    ///
    /// # Errors
    ///
    /// Returns an error if `Idle` was never registered.
    pub fn build(self) -> Result<StateMachine, ConfigurationError> {
        self.build_starting_in(StateId::Idle)
    }

    /// Build a machine starting in `initial`.
    ///
    /// The initial state's enter hook is not run.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` was never registered.
    pub fn build_starting_in(self, initial: StateId) -> Result<StateMachine, ConfigurationError> {
        if !self.registry.contains(initial) {
            log::error!("Initial state {initial} not found");
            return Err(ConfigurationError::unregistered(initial, StateRole::Initial));
        }

        Ok(StateMachine {
            registry: self.registry,
            table: self.table,
            current: initial,
            previous: initial,
            transition_count: 0,
            subscribers: SmallVec::new(),
            next_subscription: 0,
        })
    }
}

// ============================================================================
// State Machine
// ============================================================================

/// Single-active-state machine driven by events and forced transitions.
pub struct StateMachine {
    /// Registered states and hooks
    registry: StateRegistry,
    /// Immutable after build
    table: TransitionTable,
    /// Current active state
    current: StateId,
    /// State active before the last transition
    previous: StateId,
    /// Transitions applied since build
    transition_count: u64,
    /// Change listeners, notified in subscription order
    subscribers: SmallVec<[(SubscriptionId, Subscriber); 4]>,
    next_subscription: u64,
}

impl StateMachine {
    /// Apply the table transition for `event`, if the current state has one.
    ///
    /// Unmapped events are ignored without side effects.
    pub fn trigger_event(&mut self, event: EventId) -> &mut Self {
        match self.table.lookup(event, self.current) {
            Some(next) => self.transition_to(next, TransitionCause::Event(event)),
            None => log::trace!("Ignoring {event} in {}", self.current),
        }
        self
    }

    /// Transition directly to `state`, bypassing the table.
    ///
    /// Forcing the current state still runs its leave and enter hooks.
    ///
    /// # Errors
    ///
    /// Returns an error if `state` was never registered; the current state
    /// is unchanged and no hooks run.
    pub fn force_state(&mut self, state: StateId) -> Result<(), ConfigurationError> {
        if !self.registry.contains(state) {
            log::error!("Cannot force unregistered state {state} (current {})", self.current);
            return Err(ConfigurationError::unregistered(state, StateRole::Target));
        }
        self.transition_to(state, TransitionCause::Forced);
        Ok(())
    }

    fn transition_to(&mut self, next: StateId, cause: TransitionCause) {
        let from = self.current;

        if let Some(state) = self.registry.get_mut(from) {
            state.leave();
        }
        self.previous = from;
        self.current = next;
        if let Some(state) = self.registry.get_mut(next) {
            state.enter();
        }
        self.transition_count += 1;

        let change = StateChange {
            from,
            to: next,
            cause,
        };
        log::debug!("Transition {change}");
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&change);
        }
    }

    /// Get the current state.
    #[must_use]
    pub const fn current_state_id(&self) -> StateId {
        self.current
    }

    /// Get the state active before the last transition.
    #[must_use]
    pub const fn previous_state(&self) -> StateId {
        self.previous
    }

    /// Check if the machine is in `state`.
    #[must_use]
    pub fn is_in(&self, state: StateId) -> bool {
        self.current == state
    }

    /// Number of transitions applied since build.
    #[must_use]
    pub const fn transition_count(&self) -> u64 {
        self.transition_count
    }

    /// The transition table.
    #[must_use]
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// The state registry.
    #[must_use]
    pub fn registry(&self) -> &StateRegistry {
        &self.registry
    }

    /// Listen for state changes.
    ///
    /// Listeners run after the new state's enter hook, in subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(&StateChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }
}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("transitions", &self.table.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
