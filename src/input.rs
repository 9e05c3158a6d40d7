//! Input mapping - key events to engine commands
//!
//! Only commands from the session's surface are producible here. Soft drop
//! is the exception by design: holding Down never reaches the engine, it
//! sets a held flag that the driver turns into the fast gravity cadence.
//!
//! Terminals that do not report key releases get a hold timeout: the soft
//! drop flag releases itself when no Down press has been seen for a short
//! while (keyboard auto-repeat keeps re-arming it while the key is held).

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

const SOFT_DROP_RELEASE_TIMEOUT_MS: u64 = 150;

/// True for keys that should end the program.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Tracks the soft-drop hold between key events.
#[derive(Debug, Clone)]
pub struct InputHandler {
    soft_drop_held: bool,
    last_soft_drop_press: Instant,
    release_timeout_ms: u64,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_release_timeout(SOFT_DROP_RELEASE_TIMEOUT_MS)
    }

    pub fn with_release_timeout(release_timeout_ms: u64) -> Self {
        Self {
            soft_drop_held: false,
            last_soft_drop_press: Instant::now(),
            release_timeout_ms,
        }
    }

    /// Map a key press to an engine command, tracking soft-drop holds.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Command> {
        match code {
            KeyCode::Down => {
                self.soft_drop_held = true;
                self.last_soft_drop_press = Instant::now();
                None
            }
            KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Right => Some(Command::MoveRight),
            KeyCode::Up => Some(Command::Rotate),
            KeyCode::Char(' ') => Some(Command::HardDrop),
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(Command::TogglePause),
            KeyCode::Enter => Some(Command::Start),
            _ => None,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if code == KeyCode::Down {
            self.soft_drop_held = false;
        }
    }

    /// Whether soft drop is held right now, applying the release timeout.
    pub fn soft_drop_held(&mut self) -> bool {
        if self.soft_drop_held
            && self.last_soft_drop_press.elapsed().as_millis() as u64 > self.release_timeout_ms
        {
            self.soft_drop_held = false;
        }
        self.soft_drop_held
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_key_mapping() {
        let mut input = InputHandler::new();
        assert_eq!(
            input.handle_key_press(KeyCode::Left),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            input.handle_key_press(KeyCode::Right),
            Some(Command::MoveRight)
        );
        assert_eq!(input.handle_key_press(KeyCode::Up), Some(Command::Rotate));
        assert_eq!(
            input.handle_key_press(KeyCode::Char(' ')),
            Some(Command::HardDrop)
        );
        assert_eq!(
            input.handle_key_press(KeyCode::Char('p')),
            Some(Command::TogglePause)
        );
        assert_eq!(
            input.handle_key_press(KeyCode::Esc),
            Some(Command::TogglePause)
        );
        assert_eq!(input.handle_key_press(KeyCode::Enter), Some(Command::Start));
        assert_eq!(input.handle_key_press(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_soft_drop_is_a_hold_not_a_command() {
        let mut input = InputHandler::new();
        assert_eq!(input.handle_key_press(KeyCode::Down), None);
        assert!(input.soft_drop_held());

        input.handle_key_release(KeyCode::Down);
        assert!(!input.soft_drop_held());
    }

    #[test]
    fn test_soft_drop_auto_releases_after_timeout() {
        let mut input = InputHandler::with_release_timeout(50);
        input.handle_key_press(KeyCode::Down);
        assert!(input.soft_drop_held());

        // Simulate a terminal with no release events by aging the press.
        input.last_soft_drop_press = Instant::now() - Duration::from_millis(51);
        assert!(!input.soft_drop_held());
    }

    #[test]
    fn test_repeat_presses_keep_soft_drop_armed() {
        let mut input = InputHandler::with_release_timeout(50);
        input.handle_key_press(KeyCode::Down);
        input.last_soft_drop_press = Instant::now() - Duration::from_millis(40);

        // Auto-repeat delivers another press before the timeout expires.
        input.handle_key_press(KeyCode::Down);
        assert!(input.soft_drop_held());
    }

    #[test]
    fn test_other_releases_do_not_clear_soft_drop() {
        let mut input = InputHandler::new();
        input.handle_key_press(KeyCode::Down);
        input.handle_key_release(KeyCode::Left);
        assert!(input.soft_drop_held());
    }

    #[test]
    fn test_should_quit() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(should_quit(q));
        assert!(should_quit(ctrl_c));
        assert!(!should_quit(plain_c));
    }
}
