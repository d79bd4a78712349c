//! Renderer - terminal adapters for the view side.
//!
//! [`TerminalView`] is a crossterm-backed [`crate::ports::ViewPort`]: it
//! repaints the whole surface from each frame (the grid is tiny, diffing
//! would buy nothing). The core never sees any of this; it only hands over
//! frames.

mod terminal;

pub use terminal::{equation_text, TerminalView};
