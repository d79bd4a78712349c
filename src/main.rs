//! Interactive terminal host for the trainer core.
//!
//! Owns the event loop: one crossterm event at a time is mapped to a
//! command and runs to completion before the next is read. The core never
//! sees the keyboard; it only receives commands.

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use kuku_tui::{
    equation_text, initialize, Config, TerminalBell, TerminalView,
};

/// Interactive times-table array trainer.
#[derive(Debug, Parser)]
#[command(name = "kuku-tui", version, about)]
struct Args {
    /// Path to a JSON configuration file.
    config: Option<PathBuf>,

    /// Override the grid dimension.
    #[arg(long)]
    grid_size: Option<u32>,

    /// Disable the terminal bell.
    #[arg(long)]
    no_sound: bool,
}

fn load_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => Config::from_json_str(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if let Some(grid_size) = args.grid_size {
        config.grid_size = grid_size;
    }
    if args.no_sound {
        config.sound_enabled = false;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let mut view = TerminalView::new(&config);
    view.enter()?;
    let bell = TerminalBell::new(config.sound_enabled);

    // Construction pushes the first frame, so the screen is live from here.
    let mut trainer = initialize(config, Box::new(view), Box::new(bell))?;

    let tick = Duration::from_millis(trainer.config().animation_duration_ms.max(1));
    loop {
        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('a') | KeyCode::Char(' ') => trainer.toggle_answer(),
                KeyCode::Char('r') => trainer.set_equation(1, 1),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    // Digit keys drive the column controls, like the top
                    // button row. '0' falls through the range check.
                    if let Some(value) = c.to_digit(10) {
                        trainer.select_multiplier(value);
                    }
                }
                KeyCode::Up => {
                    let v = trainer.state().multiplicand + 1;
                    trainer.select_multiplicand(v);
                }
                KeyCode::Down => {
                    let v = trainer.state().multiplicand.saturating_sub(1);
                    trainer.select_multiplicand(v);
                }
                KeyCode::Right => {
                    let v = trainer.state().multiplier + 1;
                    trainer.select_multiplier(v);
                }
                KeyCode::Left => {
                    let v = trainer.state().multiplier.saturating_sub(1);
                    trainer.select_multiplier(v);
                }
                _ => {}
            },
            Event::Resize(..) => trainer.refresh(),
            _ => {}
        }
    }

    // TerminalView::drop restores the terminal; print the parting line
    // after the alternate screen is gone.
    let last = trainer.frame();
    drop(trainer);
    println!("{}", equation_text(&last.equation));
    Ok(())
}
