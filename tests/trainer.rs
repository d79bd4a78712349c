//! End-to-end scenarios for the trainer session, driven through the public
//! API exactly as a host would, plus property tests over the whole valid
//! factor range.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use kuku_tui::{
    equation, initialize, lit_cells, AppState, AudioCue, AudioPort, Cell, Config, NullAudio,
    NullView, ViewFrame, ViewPort,
};

// =============================================================================
// Recording ports
// =============================================================================

#[derive(Clone, Default)]
struct RecordingView {
    frames: Rc<RefCell<Vec<ViewFrame>>>,
}

impl ViewPort for RecordingView {
    fn render(&mut self, frame: &ViewFrame) {
        self.frames.borrow_mut().push(frame.clone());
    }
}

#[derive(Clone, Default)]
struct RecordingAudio {
    cues: Rc<RefCell<Vec<AudioCue>>>,
}

impl AudioPort for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.cues.borrow_mut().push(cue);
    }
}

// =============================================================================
// Scenarios (9x9 grid)
// =============================================================================

#[test]
fn startup_renders_a_lit_one_by_one_array() {
    let view = RecordingView::default();
    let frames = view.frames.clone();
    let trainer = initialize(Config::default(), Box::new(view), Box::new(NullAudio)).unwrap();

    assert_eq!(
        trainer.state(),
        AppState {
            multiplicand: 1,
            multiplier: 1,
            has_interacted: true,
            show_answer: true,
        }
    );

    let frames = frames.borrow();
    assert_eq!(frames.len(), 1);
    let first = &frames[0];
    assert_eq!(first.lit.iter().copied().collect::<Vec<_>>(), vec![Cell::new(1, 1)]);
    assert_eq!(first.equation.left, 1);
    assert_eq!(first.equation.right, 1);
    assert_eq!(first.equation.result, 1);
    assert!(!first.equation.result_hidden);
}

#[test]
fn selecting_four_then_three_lights_a_three_by_four_array() {
    let view = RecordingView::default();
    let frames = view.frames.clone();
    let mut trainer =
        initialize(Config::default(), Box::new(view), Box::new(NullAudio)).unwrap();

    trainer.select_multiplier(4);
    trainer.select_multiplicand(3);

    let frames = frames.borrow();
    let last = frames.last().unwrap();
    assert_eq!(last.lit.len(), 12);
    assert!(last.lit.iter().all(|c| c.row <= 3 && c.col <= 4));
    assert!(last.lit.iter().any(|c| c.row == 3));
    assert!(last.lit.iter().any(|c| c.col == 4));
    assert_eq!(last.equation.left, 3);
    assert_eq!(last.equation.right, 4);
    assert_eq!(last.equation.result, 12);
}

#[test]
fn hiding_the_answer_keeps_the_result_computable() {
    let mut trainer =
        initialize(Config::default(), Box::new(NullView), Box::new(NullAudio)).unwrap();

    trainer.set_equation(3, 4);
    trainer.toggle_answer();

    let state = trainer.state();
    assert!(!state.show_answer);
    let frame = trainer.frame();
    assert!(frame.equation.result_hidden);
    assert_eq!(frame.equation.result, 12);
}

#[test]
fn audio_cues_follow_the_command_kind() {
    let audio = RecordingAudio::default();
    let cues = audio.cues.clone();
    let mut trainer =
        initialize(Config::default(), Box::new(NullView), Box::new(audio)).unwrap();

    trainer.select_multiplier(2);
    trainer.toggle_answer();
    trainer.set_equation(5, 5); // silent bulk path
    trainer.select_multiplicand(9);

    assert_eq!(
        *cues.borrow(),
        vec![
            AudioCue::FactorChanged,
            AudioCue::AnswerToggled,
            AudioCue::FactorChanged,
        ]
    );
}

#[test]
fn out_of_range_input_changes_nothing() {
    let view = RecordingView::default();
    let frames = view.frames.clone();
    let mut trainer =
        initialize(Config::default(), Box::new(view), Box::new(NullAudio)).unwrap();
    let before = trainer.state();

    trainer.select_multiplicand(0);
    trainer.select_multiplicand(10);
    trainer.select_multiplier(0);
    trainer.select_multiplier(10);
    trainer.set_equation(0, 5);
    trainer.set_equation(5, 10);

    assert_eq!(trainer.state(), before);
    // Nothing beyond the startup frame was pushed.
    assert_eq!(frames.borrow().len(), 1);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// After set_equation(a, b) the equation result is exactly a*b.
    #[test]
    fn prop_result_is_the_product(a in 1u32..=9, b in 1u32..=9) {
        let mut trainer =
            initialize(Config::default(), Box::new(NullView), Box::new(NullAudio)).unwrap();
        trainer.set_equation(a, b);

        let eq = trainer.frame().equation;
        prop_assert_eq!(eq.left, a);
        prop_assert_eq!(eq.right, b);
        prop_assert_eq!(eq.result, a * b);
    }

    /// The lit set after selecting a and b has exactly a*b cells, all inside
    /// the selected rectangle.
    #[test]
    fn prop_lit_count_matches_product(a in 1u32..=9, b in 1u32..=9) {
        let mut trainer =
            initialize(Config::default(), Box::new(NullView), Box::new(NullAudio)).unwrap();
        trainer.select_multiplicand(a);
        trainer.select_multiplier(b);

        let lit = trainer.frame().lit;
        prop_assert_eq!(lit.len() as u32, a * b);
        for cell in &lit {
            prop_assert!(cell.row >= 1 && cell.row <= a);
            prop_assert!(cell.col >= 1 && cell.col <= b);
        }
    }

    /// Values outside 1..=grid_size never change state, via either the
    /// single-factor commands or the bulk command.
    #[test]
    fn prop_out_of_range_is_ignored(v in 10u32..1000, ok in 1u32..=9) {
        let mut trainer =
            initialize(Config::default(), Box::new(NullView), Box::new(NullAudio)).unwrap();
        trainer.set_equation(ok, ok);
        let before = trainer.state();

        trainer.select_multiplicand(v);
        trainer.select_multiplier(v);
        trainer.select_multiplicand(0);
        trainer.select_multiplier(0);
        trainer.set_equation(v, ok);
        trainer.set_equation(ok, 0);

        prop_assert_eq!(trainer.state(), before);
    }

    /// Derivations are pure: the same snapshot always yields the same
    /// outputs, and a dark state stays dark whatever the factors are.
    #[test]
    fn prop_derivations_are_pure(a in 1u32..=9, b in 1u32..=9, shown in any::<bool>()) {
        let state = AppState {
            multiplicand: a,
            multiplier: b,
            has_interacted: true,
            show_answer: shown,
        };
        prop_assert_eq!(lit_cells(&state), lit_cells(&state));
        prop_assert_eq!(equation(&state), equation(&state));
        prop_assert_eq!(equation(&state).result_hidden, !shown);

        let dark = AppState { has_interacted: false, ..state };
        prop_assert!(lit_cells(&dark).is_empty());
    }
}
