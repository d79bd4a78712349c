//! Audio - terminal bell adapter.
//!
//! The terminal has exactly one sound, so the two cues map to one ring for
//! factor changes and a double ring for answer toggles. Playback is best
//! effort: a failed write is warned about and swallowed, never surfaced.

use std::io::{self, Write};

use log::warn;

use crate::ports::{AudioCue, AudioPort};

const BELL: &str = "\u{0007}";

/// Rings the terminal bell for semantic cues.
#[derive(Debug)]
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    /// `enabled` normally comes from `Config::sound_enabled`.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn ring(&self, cue: AudioCue) -> io::Result<()> {
        let mut out = io::stdout();
        match cue {
            AudioCue::FactorChanged => out.write_all(BELL.as_bytes())?,
            AudioCue::AnswerToggled => {
                out.write_all(BELL.as_bytes())?;
                out.write_all(BELL.as_bytes())?;
            }
        }
        out.flush()
    }
}

impl AudioPort for TerminalBell {
    fn play(&mut self, cue: AudioCue) {
        if !self.enabled {
            return;
        }
        if let Err(e) = self.ring(cue) {
            warn!("bell playback failed: {e}");
        }
    }
}
