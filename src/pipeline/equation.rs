//! Equation - the structured equation fields.
//!
//! The result is always computed, even while hidden: hiding is a display
//! flag, not a computation gate. Turning the answer back on never changes
//! the number, only reveals it.

use spark_signals::{derived, Derived};

use crate::state::{AppState, Store};
use crate::types::Equation;

/// Compute the equation fields for a state snapshot.
pub fn equation(state: &AppState) -> Equation {
    Equation {
        left: state.multiplicand,
        right: state.multiplier,
        result: state.multiplicand * state.multiplier,
        result_hidden: !state.show_answer,
    }
}

/// Create a derived that recomputes the equation when a factor or the
/// answer visibility changes.
pub fn create_equation_derived(store: &Store) -> Derived<Equation> {
    let store = store.clone();
    derived(move || equation(&store.snapshot()))
}

// =============================================================================
// Tests
// =============================================================================
