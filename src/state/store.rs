//! The signal-backed state store.
//!
//! [`Store`] owns the four state fields as `spark-signals` signals:
//!
//! - `multiplicand` / `multiplier` - the selected factors
//! - `has_interacted` - gates whether any cell lights up at all
//! - `show_answer` - equation result visibility
//!
//! Readers get copies. [`Store::snapshot`] returns an [`AppState`] value,
//! never a live reference, so no caller can corrupt the invariants from the
//! outside. Setters are `pub(crate)`: the command layer in
//! [`crate::trainer`] is the only writer, and it validates before writing.
//!
//! Reading the signals inside a `derived` closure registers them as
//! dependencies, so the pipeline deriveds recompute exactly when a field
//! actually changes.

use spark_signals::{signal, Signal};

use crate::config::Config;

// =============================================================================
// AppState - immutable snapshot
// =============================================================================

/// A copy of the store's fields at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    /// Row-axis factor, in `1..=grid_size` once the store exists.
    pub multiplicand: u32,
    /// Column-axis factor, in `1..=grid_size` once the store exists.
    pub multiplier: u32,
    /// False only until the first interaction; while false the grid stays
    /// dark regardless of the factor values.
    pub has_interacted: bool,
    /// Whether the equation result is currently revealed.
    pub show_answer: bool,
}

// =============================================================================
// Store
// =============================================================================

/// The single mutable source of truth for one trainer session.
///
/// Cloning a `Store` clones signal handles, not state: all clones read and
/// write the same underlying fields. That is what lets the pipeline
/// deriveds capture their own handle.
#[derive(Clone)]
pub struct Store {
    grid_size: u32,
    multiplicand: Signal<u32>,
    multiplier: Signal<u32>,
    has_interacted: Signal<bool>,
    show_answer: Signal<bool>,
}

impl Store {
    /// Seed a store from a validated configuration.
    ///
    /// The initial factors count as an interaction, so the initial array is
    /// already lit, and the answer starts visible.
    pub fn new(config: &Config) -> Self {
        Self {
            grid_size: config.grid_size,
            multiplicand: signal(config.initial_multiplicand),
            multiplier: signal(config.initial_multiplier),
            has_interacted: signal(true),
            show_answer: signal(true),
        }
    }

    /// The immutable grid dimension N.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Copy out the current state.
    ///
    /// Inside a reactive scope this reads all four signals, making the
    /// caller depend on each of them.
    pub fn snapshot(&self) -> AppState {
        AppState {
            multiplicand: self.multiplicand.get(),
            multiplier: self.multiplier.get(),
            has_interacted: self.has_interacted.get(),
            show_answer: self.show_answer.get(),
        }
    }

    // Writers are crate-internal: command handlers validate first, then
    // write. No setter checks anything and no setter can fail.

    pub(crate) fn set_multiplicand(&self, value: u32) {
        self.multiplicand.set(value);
    }

    pub(crate) fn set_multiplier(&self, value: u32) {
        self.multiplier.set(value);
    }

    pub(crate) fn set_has_interacted(&self, value: bool) {
        self.has_interacted.set(value);
    }

    pub(crate) fn set_show_answer(&self, value: bool) {
        self.show_answer.set(value);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_from_config() {
        let store = Store::new(&Config::default());
        let state = store.snapshot();

        assert_eq!(state.multiplicand, 1);
        assert_eq!(state.multiplier, 1);
        assert!(state.has_interacted);
        assert!(state.show_answer);
        assert_eq!(store.grid_size(), 9);
    }

    #[test]
    fn test_initial_factors_follow_config() {
        let config = Config {
            initial_multiplicand: 3,
            initial_multiplier: 7,
            ..Config::default()
        };
        let state = Store::new(&config).snapshot();
        assert_eq!(state.multiplicand, 3);
        assert_eq!(state.multiplier, 7);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let store = Store::new(&Config::default());
        let before = store.snapshot();

        store.set_multiplicand(5);
        store.set_show_answer(false);

        // The old snapshot is unaffected, a fresh one sees the writes.
        assert_eq!(before.multiplicand, 1);
        assert!(before.show_answer);
        let after = store.snapshot();
        assert_eq!(after.multiplicand, 5);
        assert!(!after.show_answer);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new(&Config::default());
        let handle = store.clone();

        store.set_multiplier(4);
        assert_eq!(handle.snapshot().multiplier, 4);
    }
}
