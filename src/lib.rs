//! # kuku-tui
//!
//! Interactive times-table array trainer for the terminal.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The core is a state-to-view synchronization engine. One signal-backed
//! store holds the whole session state (the two factors, the
//! first-interaction flag, the answer visibility); everything the views
//! show is derived from it:
//!
//! ```text
//! commands → Store signals → lit_cells / selection / equation → ViewFrame → ports
//! ```
//!
//! Command handlers are the only writers. They validate input (out-of-range
//! selections are silently dropped, mirroring the bounded-button surface
//! they serve), mutate the store, and push a freshly derived frame to the
//! view port plus a semantic cue to the audio port. Ports are synchronous,
//! fire-and-forget boundaries: their failures never reach the core.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Cell, Axis, Equation, ViewFrame, Attr)
//! - [`config`] - Startup configuration and validation
//! - [`state`] - The signal-backed store and snapshots
//! - [`pipeline`] - Pure derivations and their reactive deriveds
//! - [`ports`] - View/audio port traits and null adapters
//! - [`trainer`] - Command handlers and session lifecycle
//! - [`renderer`] - Crossterm view-port adapter
//! - [`audio`] - Terminal-bell audio-port adapter

pub mod audio;
pub mod config;
pub mod pipeline;
pub mod ports;
pub mod renderer;
pub mod state;
pub mod trainer;
pub mod types;

// Re-export commonly used items
pub use types::{Attr, Axis, Cell, Equation, ViewFrame};

pub use config::{Config, ConfigError, DEFAULT_GRID_SIZE};

pub use state::{AppState, Store};

pub use pipeline::{
    create_equation_derived, create_frame_derived, create_lit_cells_derived,
    create_selection_derived, equation, frame, lit_cells, selected_value, AnswerLabels,
};

pub use ports::{AudioCue, AudioPort, NullAudio, NullView, ViewPort};

pub use trainer::{initialize, Trainer};

pub use renderer::{equation_text, TerminalView};

pub use audio::TerminalBell;
