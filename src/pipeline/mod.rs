//! Derivation Pipeline
//!
//! Pure, side-effect-free functions that compute everything the views show
//! from a state snapshot, plus `create_*_derived` constructors that wrap
//! them in reactive deriveds.
//!
//! # Data Flow
//!
//! ```text
//! Store signals → lit_cells / selection / equation → frame → view port
//! ```
//!
//! ## Key Design Principles
//!
//! - **Pure computes**: every `fn(&AppState) -> T` here is deterministic
//!   and recomputes in full. The grid is bounded by `grid_size²`, so there
//!   is nothing worth diffing incrementally.
//! - **Deriveds for change tracking**: the `create_*_derived` constructors
//!   read the store inside the closure, so the derived re-runs exactly
//!   when a field it read has changed. Unchanged state yields the identical
//!   value again.
//! - **Side effects stay outside**: nothing in this module touches the
//!   terminal, the ports, or the store's writers.

pub mod equation;
pub mod frame;
pub mod lit_cells;
pub mod selection;

pub use equation::{create_equation_derived, equation};
pub use frame::{create_frame_derived, frame, AnswerLabels};
pub use lit_cells::{create_lit_cells_derived, lit_cells};
pub use selection::{create_selection_derived, selected_value};
