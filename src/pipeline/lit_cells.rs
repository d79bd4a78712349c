//! Lit Cells - which grid cells are illuminated.
//!
//! The lit region is always the contiguous rectangle spanning rows
//! `1..=multiplicand` and columns `1..=multiplier`, anchored at (1,1). Its
//! size is therefore exactly the product being visualized. Before the first
//! interaction nothing lights up at all.

use std::collections::BTreeSet;

use spark_signals::{derived, Derived};

use crate::state::{AppState, Store};
use crate::types::Cell;

/// Compute the set of lit cells for a state snapshot.
///
/// Empty while `has_interacted` is false; otherwise all `(row, col)` pairs
/// with `row <= multiplicand` and `col <= multiplier`.
pub fn lit_cells(state: &AppState) -> BTreeSet<Cell> {
    let mut cells = BTreeSet::new();
    if !state.has_interacted {
        return cells;
    }
    for row in 1..=state.multiplicand {
        for col in 1..=state.multiplier {
            cells.insert(Cell::new(row, col));
        }
    }
    cells
}

/// Create a derived that recomputes the lit set when a factor or the
/// interaction flag changes.
pub fn create_lit_cells_derived(store: &Store) -> Derived<BTreeSet<Cell>> {
    let store = store.clone();
    derived(move || lit_cells(&store.snapshot()))
}

// =============================================================================
// Tests
// =============================================================================
