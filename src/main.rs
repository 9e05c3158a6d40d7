//! Terminal blockfall runner (default binary).
//!
//! Owns the only clock in the program. Gravity is issued as commands on the
//! cadence the core's interval formula dictates for the current level, fast
//! while soft drop is held, and stopped entirely while paused or between
//! games. The core itself never sees wall-clock time.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{fall_interval_ms, seed_from_clock, GameState};
use blockfall::highscore::HighScoreStore;
use blockfall::input::{should_quit, InputHandler};
use blockfall::term::{GameView, TerminalScreen};
use blockfall::types::Command;

/// Poll cadence while no game is ticking, to stay responsive to input.
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TerminalScreen) -> Result<()> {
    let mut game = GameState::new(seed_from_clock());
    let mut store = HighScoreStore::open_default();
    let view = GameView::new();
    let mut input = InputHandler::new();

    let mut last_fall = Instant::now();

    loop {
        screen.draw(&view, &game, store.best())?;

        let gravity_active = game.is_playing() && !game.is_paused();
        if !gravity_active {
            // Timer stops while paused / game over / not started.
            last_fall = Instant::now();
        }

        let interval = Duration::from_millis(if gravity_active {
            fall_interval_ms(game.level(), input.soft_drop_held())
        } else {
            IDLE_POLL_MS
        });

        // Wait for input, but no longer than the time to the next tick.
        let timeout = interval
            .checked_sub(last_fall.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(command) = input.handle_key_press(key.code) {
                            game.apply(command);
                        }
                    }
                    KeyEventKind::Release => input.handle_key_release(key.code),
                }
            }
        }

        if gravity_active && last_fall.elapsed() >= interval {
            game.apply(Command::Gravity);
            last_fall = Instant::now();
        }

        // Hand finished games to the high-score store. Failures to persist
        // are not worth interrupting play over.
        if let Some(lock) = game.take_last_event() {
            if lock.game_over {
                let _ = store.record(game.score());
            }
        }
    }
}
