//! Crossterm view-port adapter.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//!       1 2 3 4 5 6 7 8 9     <- column controls (multiplier)
//!    1  ● ● ● ● · · · · ·
//!    2  ● ● ● ● · · · · ·     <- row controls (multiplicand) + grid
//!    3  ● ● ● ● · · · · ·
//!    4  · · · · · · · · ·
//!    ...
//!
//!    3 × 4 = 12
//!    [ Hide answer ]
//! ```
//!
//! `enter`/`leave` own raw mode and the alternate screen; `Drop` restores
//! the terminal on the way out even when the host forgets.

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;

use crate::config::Config;
use crate::ports::ViewPort;
use crate::types::{Attr, Equation, ViewFrame};

/// Screen column where the grid (and the column controls) start.
const GRID_X: u16 = 4;
/// Screen row of the column-control strip; the grid starts one below.
const GRID_Y: u16 = 1;
/// Horizontal spacing between grid columns.
const CELL_STRIDE: u16 = 2;

const LIT_DOT: &str = "\u{25cf}"; // ●
const DARK_DOT: &str = "\u{00b7}"; // ·

/// Render the equation fields as plain text, e.g. `3 × 4 = 12`.
///
/// A hidden result becomes `?`. This is deliberately view-side: the core
/// only supplies the numeric fields and the hidden flag.
pub fn equation_text(equation: &Equation) -> String {
    if equation.result_hidden {
        format!("{} \u{00d7} {} = ?", equation.left, equation.right)
    } else {
        format!(
            "{} \u{00d7} {} = {}",
            equation.left, equation.right, equation.result
        )
    }
}

// =============================================================================
// TerminalView
// =============================================================================

/// Full-redraw terminal renderer.
pub struct TerminalView {
    out: io::Stdout,
    grid_size: u32,
    primary: Color,
    secondary: Color,
    active: bool,
}

impl TerminalView {
    pub fn new(config: &Config) -> Self {
        let (pr, pg, pb) = config.primary_color;
        let (sr, sg, sb) = config.secondary_color;
        Self {
            out: io::stdout(),
            grid_size: config.grid_size,
            primary: Color::Rgb { r: pr, g: pg, b: pb },
            secondary: Color::Rgb { r: sr, g: sg, b: sb },
            active: false,
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        self.active = true;
        Ok(())
    }

    /// Restore the terminal.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        execute!(self.out, LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()?;
        self.active = false;
        Ok(())
    }

    fn draw(&mut self, frame: &ViewFrame) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        self.draw_column_controls(frame)?;
        self.draw_rows(frame)?;

        let text_y = GRID_Y + self.grid_size as u16 + 2;
        self.draw_equation(frame, text_y)?;
        self.draw_answer_button(frame, text_y + 1)?;

        let hint_y = text_y + 3;
        self.put(
            1,
            hint_y,
            "1-9 columns / arrows / a answer / r reset / q quit",
            None,
            Attr::DIM,
        )?;

        self.out.flush()
    }

    fn draw_column_controls(&mut self, frame: &ViewFrame) -> io::Result<()> {
        for value in 1..=self.grid_size {
            let x = GRID_X + (value as u16 - 1) * CELL_STRIDE;
            let attrs = if value == frame.selected_multiplier {
                Attr::BOLD | Attr::INVERSE
            } else {
                Attr::NONE
            };
            self.put(x, 0, &value.to_string(), Some(self.secondary), attrs)?;
        }
        Ok(())
    }

    fn draw_rows(&mut self, frame: &ViewFrame) -> io::Result<()> {
        for row in 1..=self.grid_size {
            let y = GRID_Y + row as u16 - 1;

            // Row control on the left edge.
            let attrs = if row == frame.selected_multiplicand {
                Attr::BOLD | Attr::INVERSE
            } else {
                Attr::NONE
            };
            self.put(1, y, &row.to_string(), Some(self.primary), attrs)?;

            // The full grid row; lit cells from the frame, the rest dark.
            for col in 1..=self.grid_size {
                let x = GRID_X + (col as u16 - 1) * CELL_STRIDE;
                let lit = frame.lit.contains(&crate::types::Cell::new(row, col));
                if lit {
                    self.put(x, y, LIT_DOT, Some(self.primary), Attr::BOLD)?;
                } else {
                    self.put(x, y, DARK_DOT, None, Attr::DIM)?;
                }
            }
        }
        Ok(())
    }

    fn draw_equation(&mut self, frame: &ViewFrame, y: u16) -> io::Result<()> {
        let eq = &frame.equation;
        let left = eq.left.to_string();
        let right = eq.right.to_string();

        let mut x = 1;
        self.put(x, y, &left, Some(self.primary), Attr::BOLD)?;
        x += left.len() as u16;
        self.put(x, y, " \u{00d7} ", None, Attr::NONE)?;
        x += 3;
        self.put(x, y, &right, Some(self.secondary), Attr::BOLD)?;
        x += right.len() as u16;
        self.put(x, y, " = ", None, Attr::NONE)?;
        x += 3;
        if eq.result_hidden {
            self.put(x, y, "?", None, Attr::DIM)?;
        } else {
            self.put(x, y, &eq.result.to_string(), None, Attr::BOLD)?;
        }
        Ok(())
    }

    fn draw_answer_button(&mut self, frame: &ViewFrame, y: u16) -> io::Result<()> {
        let attrs = if frame.answer_button_pressed {
            Attr::INVERSE
        } else {
            Attr::NONE
        };
        let label = format!("[ {} ]", frame.answer_button_label);
        self.put(1, y, &label, None, attrs)
    }

    /// Queue one styled string at a position, resetting styles afterwards.
    fn put(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: Option<Color>,
        attrs: Attr,
    ) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(x, y))?;
        if let Some(color) = color {
            queue!(self.out, SetForegroundColor(color))?;
        }
        if attrs.contains(Attr::BOLD) {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if attrs.contains(Attr::DIM) {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        if attrs.contains(Attr::INVERSE) {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            self.out,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }
}

impl ViewPort for TerminalView {
    fn render(&mut self, frame: &ViewFrame) {
        if let Err(e) = self.draw(frame) {
            // A broken surface must never fail a command.
            warn!("terminal render failed: {e}");
        }
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

// =============================================================================
// Tests
// =============================================================================
