//! Debug and diagnostics module
//!
//! Collects state-change notifications for an on-screen or log display.

use std::collections::VecDeque;

use crate::state::{StateChange, StateId};

/// Bounded history of state changes
#[derive(Debug)]
pub struct StateTrace {
    /// Most recent changes, oldest first
    entries: VecDeque<StateChange>,
    /// Maximum entries to keep
    max_entries: usize,
    /// Total changes recorded
    total_changes: u64,
}

impl StateTrace {
    /// Create a trace keeping the last `max_entries` changes
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
            total_changes: 0,
        }
    }

    /// Record a state change
    pub fn record(&mut self, change: StateChange) {
        self.total_changes += 1;
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(change);
    }

    /// Most recent change
    pub fn latest(&self) -> Option<&StateChange> {
        self.entries.back()
    }

    /// State after the most recent change
    pub fn current(&self) -> Option<StateId> {
        self.latest().map(|change| change.to)
    }

    /// Iterate retained changes, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &StateChange> {
        self.entries.iter()
    }

    /// Number of retained changes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is retained
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total changes recorded, including evicted ones
    pub fn total_changes(&self) -> u64 {
        self.total_changes
    }

    /// Drop retained changes
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for StateTrace {
    fn default() -> Self {
        Self::new(32)
    }
}

/// Debug overlay information
#[derive(Debug, Default)]
pub struct DebugInfo {
    /// State change history
    pub trace: StateTrace,
    /// Custom debug lines
    custom_lines: Vec<String>,
}

impl DebugInfo {
    /// Create new debug info
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom debug line
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.custom_lines.push(line.into());
    }

    /// Clear custom lines
    pub fn clear_lines(&mut self) {
        self.custom_lines.clear();
    }

    /// Record a state change
    pub fn record_change(&mut self, change: StateChange) {
        self.trace.record(change);
    }

    /// Get all debug lines: current state, history, then custom lines
    pub fn get_all_lines(&self) -> Vec<String> {
        let current = self.trace.current().map_or("-", StateId::name);
        let mut lines = vec![format!(
            "State: {current} ({} changes)",
            self.trace.total_changes()
        )];
        lines.extend(self.trace.iter().map(ToString::to_string));
        lines.extend(self.custom_lines.iter().cloned());
        lines
    }
}
