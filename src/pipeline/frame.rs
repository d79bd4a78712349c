//! Frame - the assembled outbound payload.
//!
//! Bundles every derivation into one [`ViewFrame`] so a view port gets a
//! single consistent value per sync, never a half-updated mix of outputs.

use spark_signals::{derived, Derived};

use crate::config::Config;
use crate::state::{AppState, Store};
use crate::types::{Axis, ViewFrame};

use super::{equation, lit_cells, selected_value};

// =============================================================================
// AnswerLabels
// =============================================================================

/// The swappable answer-toggle label pair.
///
/// The button always names the action it would perform: while the answer is
/// shown it offers to hide it, and the other way around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerLabels {
    pub hide: String,
    pub show: String,
}

impl From<&Config> for AnswerLabels {
    fn from(config: &Config) -> Self {
        Self {
            hide: config.label_hide_answer.clone(),
            show: config.label_show_answer.clone(),
        }
    }
}

// =============================================================================
// Frame assembly
// =============================================================================

/// Assemble the full view payload for a state snapshot.
pub fn frame(state: &AppState, labels: &AnswerLabels) -> ViewFrame {
    let label = if state.show_answer {
        &labels.hide
    } else {
        &labels.show
    };
    ViewFrame {
        lit: lit_cells(state),
        selected_multiplicand: selected_value(Axis::Row, state),
        selected_multiplier: selected_value(Axis::Column, state),
        equation: equation(state),
        answer_button_label: label.clone(),
        answer_button_pressed: state.show_answer,
    }
}

/// Create a derived producing a fresh frame whenever any state field
/// changes. This is the recompute step behind every command.
pub fn create_frame_derived(
    store: &Store,
    labels: AnswerLabels,
) -> Derived<ViewFrame> {
    let store = store.clone();
    derived(move || frame(&store.snapshot(), &labels))
}

// =============================================================================
// Tests
// =============================================================================
