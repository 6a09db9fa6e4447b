//! Transition table
//!
//! Sparse mapping from `(event, source state)` to destination state. Built
//! once during setup and read on every event. Most pairs are unmapped and the
//! event is simply ignored.

use rustc_hash::FxHashMap;

use super::id::{EventId, StateId};
use super::registry::StateRegistry;

/// Event → (source → destination) mapping.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    transitions: FxHashMap<EventId, FxHashMap<StateId, StateId>>,
}

impl TransitionTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition between two registered states.
    ///
    /// Returns `false` and leaves the table untouched if either side is not
    /// in `registry`. Callers treat `false` as a setup bug. Re-adding a pair
    /// replaces its destination, so every pair keeps at most one.
    pub fn add_transition(
        &mut self,
        registry: &StateRegistry,
        event: EventId,
        from: StateId,
        to: StateId,
    ) -> bool {
        if !registry.contains(from) {
            log::error!("\"From\" state {from} not found (event {event})");
            return false;
        }
        if !registry.contains(to) {
            log::error!("\"To\" state {to} not found (event {event})");
            return false;
        }

        if let Some(previous) = self.transitions.entry(event).or_default().insert(from, to)
            && previous != to
        {
            log::warn!("Transition {event}: {from} -> {previous} replaced by {to}");
        }
        true
    }

    /// Destination for `event` in state `from`, if one is defined.
    #[must_use]
    pub fn lookup(&self, event: EventId, from: StateId) -> Option<StateId> {
        self.transitions.get(&event)?.get(&from).copied()
    }

    /// Number of mapped pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.values().map(|row| row.len()).sum()
    }

    /// Check if no transition is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every mapped `(event, from, to)` triple.
    ///
    /// Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (EventId, StateId, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&event, row)| row.iter().map(move |(&from, &to)| (event, from, to)))
    }

    /// The full event × state grid, including unmapped cells as `None`.
    ///
    /// Rows follow [`EventId::ALL`], columns follow [`StateId::ALL`].
    #[must_use]
    pub fn outcomes(&self) -> [[Option<StateId>; StateId::COUNT]; EventId::COUNT] {
        let mut grid = [[None; StateId::COUNT]; EventId::COUNT];
        for (event, from, to) in self.iter() {
            grid[event.index()][from.index()] = Some(to);
        }
        grid
    }
}
