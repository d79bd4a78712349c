//! Selection - which control value is selected on each axis.
//!
//! Exactly one value per axis is selected at all times: the current factor
//! itself. The view port uses this to highlight one button per control
//! strip.

use spark_signals::{derived, Derived};

use crate::state::{AppState, Store};
use crate::types::Axis;

/// The selected control value for an axis.
pub fn selected_value(axis: Axis, state: &AppState) -> u32 {
    match axis {
        Axis::Row => state.multiplicand,
        Axis::Column => state.multiplier,
    }
}

/// Create a derived tracking one axis of the store.
pub fn create_selection_derived(store: &Store, axis: Axis) -> Derived<u32> {
    let store = store.clone();
    derived(move || selected_value(axis, &store.snapshot()))
}

// =============================================================================
// Tests
// =============================================================================
