//! Terminal screen - raw mode and alternate screen lifecycle.
//!
//! The binary calls `enter` once, draws frames through `draw`, and must
//! call `exit` on every path out (including errors) to hand the user their
//! terminal back.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::ResetColor,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    QueueableCommand,
};

use crate::core::GameState;
use crate::term::view::GameView;

pub struct TerminalScreen {
    stdout: io::Stdout,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Render one frame and flush it to the terminal.
    pub fn draw(&mut self, view: &GameView, state: &GameState, best: u32) -> Result<()> {
        view.draw(&mut self.stdout, state, best)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}
