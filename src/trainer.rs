//! Trainer - command handlers and session lifecycle.
//!
//! [`Trainer::new`] is the single `Uninitialized → Ready` transition: it
//! validates the configuration, seeds the store, wires the frame derived,
//! and pushes the first frame. After that the four commands are the only
//! way state changes.
//!
//! Every command follows the same discipline:
//!
//! 1. validate the input (invalid input is a silent no-op, never an error),
//! 2. mutate the store,
//! 3. sync: pull a fresh frame from the derived and hand it to the view
//!    port,
//! 4. emit the semantic audio cue, if the command has one.
//!
//! Commands run to completion on the calling thread. The ports are called
//! synchronously but their outcome never feeds back: a view or audio
//! adapter cannot fail a command.
//!
//! # Example
//!
//! ```ignore
//! use kuku_tui::{initialize, Config, NullAudio, NullView};
//!
//! let mut trainer = initialize(Config::default(), Box::new(NullView), Box::new(NullAudio))?;
//! trainer.select_multiplier(4);
//! trainer.select_multiplicand(3);
//! assert_eq!(trainer.frame().equation.result, 12);
//! ```

use log::debug;

use spark_signals::Derived;

use crate::config::{Config, ConfigError};
use crate::pipeline::{create_frame_derived, AnswerLabels};
use crate::ports::{AudioCue, AudioPort, ViewPort};
use crate::state::{AppState, Store};
use crate::types::{Axis, ViewFrame};

// =============================================================================
// Trainer
// =============================================================================

/// A ready trainer session: the store, its frame derived, and the two
/// outbound ports.
pub struct Trainer {
    config: Config,
    store: Store,
    frames: Derived<ViewFrame>,
    view: Box<dyn ViewPort>,
    audio: Box<dyn AudioPort>,
}

/// Validate the configuration and start a session.
///
/// The initial factors count as an interaction (the array starts lit) and
/// the answer starts visible. The first frame is pushed to the view port
/// before this returns, so the surface is never blank.
pub fn initialize(
    config: Config,
    view: Box<dyn ViewPort>,
    audio: Box<dyn AudioPort>,
) -> Result<Trainer, ConfigError> {
    config.validate()?;

    let store = Store::new(&config);
    let frames = create_frame_derived(&store, AnswerLabels::from(&config));
    let mut trainer = Trainer {
        config,
        store,
        frames,
        view,
        audio,
    };
    trainer.sync();
    Ok(trainer)
}

impl Trainer {
    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Select the row-axis factor. Out-of-range values are ignored.
    pub fn select_multiplicand(&mut self, value: u32) {
        self.select_factor(Axis::Row, value);
    }

    /// Select the column-axis factor. Out-of-range values are ignored.
    pub fn select_multiplier(&mut self, value: u32) {
        self.select_factor(Axis::Column, value);
    }

    fn select_factor(&mut self, axis: Axis, value: u32) {
        if !self.in_range(value) {
            // Matches the bounded-button surface this serves: nothing to
            // report, nothing changes.
            debug!(
                "ignoring {} selection {value} (grid is 1..={})",
                axis.factor_name(),
                self.store.grid_size()
            );
            return;
        }
        match axis {
            Axis::Row => self.store.set_multiplicand(value),
            Axis::Column => self.store.set_multiplier(value),
        }
        self.store.set_has_interacted(true);
        self.sync();
        self.audio.play(AudioCue::FactorChanged);
    }

    /// Flip the answer visibility.
    pub fn toggle_answer(&mut self) {
        let shown = self.store.snapshot().show_answer;
        self.store.set_show_answer(!shown);
        self.sync();
        self.audio.play(AudioCue::AnswerToggled);
    }

    /// Set both factors at once. All-or-nothing: if either value is out of
    /// range the whole call is rejected and state is untouched.
    ///
    /// This is the programmatic bulk entry point and is intentionally
    /// silent: no audio cue is emitted.
    pub fn set_equation(&mut self, multiplicand: u32, multiplier: u32) {
        if !self.in_range(multiplicand) || !self.in_range(multiplier) {
            debug!(
                "rejecting equation {multiplicand} x {multiplier} (grid is 1..={})",
                self.store.grid_size()
            );
            return;
        }
        self.store.set_multiplicand(multiplicand);
        self.store.set_multiplier(multiplier);
        self.store.set_has_interacted(true);
        self.sync();
    }

    /// Re-push the current frame without changing state, e.g. after the
    /// host's surface was resized or damaged.
    pub fn refresh(&mut self) {
        self.sync();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.store.snapshot()
    }

    /// The current derived frame, as the view port last saw it.
    pub fn frame(&self) -> ViewFrame {
        self.frames.get()
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn in_range(&self, value: u32) -> bool {
        (1..=self.store.grid_size()).contains(&value)
    }

    /// Recompute and push. The derived only re-runs when a read signal
    /// changed; the push happens on every successful command.
    fn sync(&mut self) {
        let frame = self.frames.get();
        self.view.render(&frame);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::ports::{NullAudio, NullView};
    use crate::types::Cell;

    /// Records every frame it is handed.
    #[derive(Clone, Default)]
    struct RecordingView {
        frames: Rc<RefCell<Vec<ViewFrame>>>,
    }

    impl ViewPort for RecordingView {
        fn render(&mut self, frame: &ViewFrame) {
            self.frames.borrow_mut().push(frame.clone());
        }
    }

    /// Records every cue it is handed.
    #[derive(Clone, Default)]
    struct RecordingAudio {
        cues: Rc<RefCell<Vec<AudioCue>>>,
    }

    impl AudioPort for RecordingAudio {
        fn play(&mut self, cue: AudioCue) {
            self.cues.borrow_mut().push(cue);
        }
    }

    fn trainer_with_recorders() -> (
        Trainer,
        Rc<RefCell<Vec<ViewFrame>>>,
        Rc<RefCell<Vec<AudioCue>>>,
    ) {
        let view = RecordingView::default();
        let audio = RecordingAudio::default();
        let frames = view.frames.clone();
        let cues = audio.cues.clone();
        let trainer =
            initialize(Config::default(), Box::new(view), Box::new(audio)).unwrap();
        (trainer, frames, cues)
    }

    #[test]
    fn test_initialize_pushes_first_frame() {
        let (trainer, frames, cues) = trainer_with_recorders();

        let state = trainer.state();
        assert_eq!(state.multiplicand, 1);
        assert_eq!(state.multiplier, 1);
        assert!(state.has_interacted);
        assert!(state.show_answer);

        let frames = frames.borrow();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].lit.len(), 1);
        assert!(frames[0].lit.contains(&Cell::new(1, 1)));
        assert_eq!(frames[0].equation.result, 1);

        // Startup render is silent.
        assert!(cues.borrow().is_empty());
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        let config = Config {
            grid_size: 0,
            ..Config::default()
        };
        assert!(initialize(config, Box::new(NullView), Box::new(NullAudio)).is_err());
    }

    #[test]
    fn test_factor_selection_updates_and_cues() {
        let (mut trainer, frames, cues) = trainer_with_recorders();

        trainer.select_multiplier(4);
        trainer.select_multiplicand(3);

        let state = trainer.state();
        assert_eq!(state.multiplicand, 3);
        assert_eq!(state.multiplier, 4);

        let frames = frames.borrow();
        let last = frames.last().unwrap();
        assert_eq!(last.lit.len(), 12);
        assert_eq!(last.selected_multiplicand, 3);
        assert_eq!(last.selected_multiplier, 4);
        assert_eq!(last.equation.result, 12);

        assert_eq!(
            *cues.borrow(),
            vec![AudioCue::FactorChanged, AudioCue::FactorChanged]
        );
    }

    #[test]
    fn test_out_of_range_selection_is_a_no_op() {
        let (mut trainer, frames, cues) = trainer_with_recorders();
        let before = trainer.state();

        trainer.select_multiplicand(0);
        trainer.select_multiplicand(10);
        trainer.select_multiplier(0);
        trainer.select_multiplier(10);

        assert_eq!(trainer.state(), before);
        // Only the startup frame; no cue at all.
        assert_eq!(frames.borrow().len(), 1);
        assert!(cues.borrow().is_empty());
    }

    #[test]
    fn test_same_value_reselection_still_syncs() {
        let (mut trainer, frames, cues) = trainer_with_recorders();

        trainer.select_multiplicand(1);

        assert_eq!(frames.borrow().len(), 2);
        assert_eq!(*cues.borrow(), vec![AudioCue::FactorChanged]);
    }

    #[test]
    fn test_toggle_answer_flips_and_cues() {
        let (mut trainer, frames, cues) = trainer_with_recorders();

        trainer.toggle_answer();
        assert!(!trainer.state().show_answer);
        {
            let frames = frames.borrow();
            let last = frames.last().unwrap();
            assert!(last.equation.result_hidden);
            assert_eq!(last.answer_button_label, "Show answer");
            assert!(!last.answer_button_pressed);
        }

        trainer.toggle_answer();
        assert!(trainer.state().show_answer);

        assert_eq!(
            *cues.borrow(),
            vec![AudioCue::AnswerToggled, AudioCue::AnswerToggled]
        );
    }

    #[test]
    fn test_set_equation_is_atomic_and_silent() {
        let (mut trainer, frames, cues) = trainer_with_recorders();

        trainer.set_equation(6, 7);
        let state = trainer.state();
        assert_eq!(state.multiplicand, 6);
        assert_eq!(state.multiplier, 7);
        assert_eq!(frames.borrow().last().unwrap().equation.result, 42);
        // Bulk path never makes a sound.
        assert!(cues.borrow().is_empty());

        // One invalid bound rejects the whole call.
        trainer.set_equation(0, 5);
        trainer.set_equation(3, 10);
        let unchanged = trainer.state();
        assert_eq!(unchanged.multiplicand, 6);
        assert_eq!(unchanged.multiplier, 7);
    }

    #[test]
    fn test_refresh_repushes_without_state_change() {
        let (mut trainer, frames, cues) = trainer_with_recorders();
        let before = trainer.state();

        trainer.refresh();

        assert_eq!(trainer.state(), before);
        let frames = frames.borrow();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], frames[1]);
        assert!(cues.borrow().is_empty());
    }

    #[test]
    fn test_frame_accessor_matches_last_push() {
        let (mut trainer, frames, _) = trainer_with_recorders();
        trainer.select_multiplier(5);
        assert_eq!(trainer.frame(), *frames.borrow().last().unwrap());
    }

    #[test]
    fn test_custom_grid_size_bounds() {
        let config = Config {
            grid_size: 12,
            ..Config::default()
        };
        let mut trainer =
            initialize(config, Box::new(NullView), Box::new(NullAudio)).unwrap();

        trainer.select_multiplicand(12);
        assert_eq!(trainer.state().multiplicand, 12);
        trainer.select_multiplicand(13);
        assert_eq!(trainer.state().multiplicand, 12);
    }
}
