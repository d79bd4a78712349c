//! Core types for kuku-tui.
//!
//! Plain data that flows through the derivation pipeline and defines what
//! the view and audio ports understand.

use std::collections::BTreeSet;

// =============================================================================
// Cell - one dot on the array grid
// =============================================================================

/// A grid cell position, 1-based on both axes.
///
/// Ordered so cell sets iterate row-major, which is also the order the
/// terminal renderer paints in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

// =============================================================================
// Axis - the two factor-selection dimensions
// =============================================================================

/// One of the two independent factor-selection dimensions.
///
/// `Row` selects the multiplicand (how many rows light up), `Column` the
/// multiplier (how many columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// The factor this axis selects, for error messages and logs.
    pub fn factor_name(self) -> &'static str {
        match self {
            Self::Row => "multiplicand",
            Self::Column => "multiplier",
        }
    }
}

// =============================================================================
// Equation - structured equation fields
// =============================================================================

/// The displayable equation, as structured fields.
///
/// The core never renders text: the view port decides how `result_hidden`
/// turns into a placeholder. `result` is always `left * right`, even when
/// hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub left: u32,
    pub right: u32,
    pub result: u32,
    pub result_hidden: bool,
}

// =============================================================================
// ViewFrame - the outbound payload to the view port
// =============================================================================

/// Everything a view port needs to redraw, derived in full from one state
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFrame {
    /// The lit rectangle, anchored at (1,1). Empty before first interaction.
    pub lit: BTreeSet<Cell>,
    /// The selected value on the row axis (exactly one per axis).
    pub selected_multiplicand: u32,
    /// The selected value on the column axis.
    pub selected_multiplier: u32,
    pub equation: Equation,
    /// Current label for the answer toggle ("hide" wording while the answer
    /// is shown, "show" wording while it is hidden).
    pub answer_button_label: String,
    /// Pressed state of the answer toggle, true while the answer is shown.
    pub answer_button_pressed: bool,
}

// =============================================================================
// Attr - text attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for cheap combination and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::INVERSE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const INVERSE = 1 << 2;
    }
}

// =============================================================================
// Tests
// =============================================================================
