//! Ports - the boundaries the core calls out through.
//!
//! The core emits derived frames and semantic audio cues; adapters decide
//! what (if anything) to do with them. Both ports are synchronous and
//! fire-and-forget: they return nothing and must never raise back into the
//! core. An adapter that fails internally deals with that itself (log and
//! carry on). Port implementations must not call back into the trainer
//! from inside a callback; commands run to completion.

use crate::types::ViewFrame;

// =============================================================================
// Audio cues
// =============================================================================

/// Semantic audio events. The adapter picks the actual sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// A factor was selected (either axis).
    FactorChanged,
    /// The answer visibility was toggled.
    AnswerToggled,
}

// =============================================================================
// Port traits
// =============================================================================

/// Consumes derived frames and updates a rendered surface.
pub trait ViewPort {
    fn render(&mut self, frame: &ViewFrame);
}

/// Notified of semantic events to play a cue. Best effort only.
pub trait AudioPort {
    fn play(&mut self, cue: AudioCue);
}

// =============================================================================
// Null adapters
// =============================================================================

/// A view port that ignores every frame. Useful for headless hosts and
/// tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl ViewPort for NullView {
    fn render(&mut self, _frame: &ViewFrame) {}
}

/// An audio port that stays silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioPort for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}
