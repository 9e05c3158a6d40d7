//! Game state module - the playable session
//!
//! Ties the board, piece catalog, RNG and scoring together behind a small
//! command surface. The session owns no clock and performs no I/O: gravity
//! arrives as a command from the driver on whatever cadence it chooses, and
//! lock results are exposed as a consumable event for collaborators (the
//! high-score store, UI effects).
//!
//! Every command is total: illegal moves and rotations are silently
//! rejected, commands against a not-started or finished session are no-ops,
//! and nothing here returns an error.

use crate::core::rng::SimpleRng;
use crate::core::scoring::{level_for, score_delta};
use crate::core::{Board, Tetromino};
use crate::types::Command;

/// Result of a completed lock, consumed once by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// The promoted piece did not fit at spawn; the session is over and the
    /// final score should be offered to the high-score store.
    pub game_over: bool,
}

/// Complete game session state.
///
/// Value semantics throughout: the session exclusively owns its board and
/// pieces, and each command runs to completion before the next is observed.
/// Callers running from multiple threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Tetromino>,
    next: Option<Tetromino>,
    score: u32,
    lines: u32,
    level: u32,
    is_playing: bool,
    is_paused: bool,
    is_game_over: bool,
    rng: SimpleRng,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a not-started session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            score: 0,
            lines: 0,
            level: 0,
            is_playing: false,
            is_paused: false,
            is_game_over: false,
            rng: SimpleRng::new(seed),
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Tetromino> {
        self.current
    }

    pub fn next(&self) -> Option<Tetromino> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    fn in_play(&self) -> bool {
        self.is_playing && !self.is_paused && !self.is_game_over
    }

    /// Start a fresh game. Always succeeds, from any state.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.current = Some(Tetromino::spawn_random(&mut self.rng));
        self.next = Some(Tetromino::spawn_random(&mut self.rng));
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.is_playing = true;
        self.is_paused = false;
        self.is_game_over = false;
        self.last_event = None;
    }

    /// Move the current piece by (dx, dy).
    ///
    /// An illegal downward move means the piece has landed and locks it.
    /// Illegal horizontal or upward moves are silently ignored.
    pub fn move_piece(&mut self, dx: i8, dy: i8) {
        if !self.in_play() {
            return;
        }
        let Some(piece) = self.current else { return };

        let (nx, ny) = (piece.x + dx, piece.y + dy);
        if self.board.piece_fits(&piece.shape, nx, ny) {
            self.current = Some(Tetromino {
                x: nx,
                y: ny,
                ..piece
            });
        } else if dy > 0 {
            self.lock_current();
        }
    }

    /// Rotate the current piece in place.
    ///
    /// The rotated shape applies only if it fits at the current position.
    /// There is no kick search: a blocked rotation is discarded whole.
    pub fn rotate(&mut self) {
        if !self.in_play() {
            return;
        }
        let Some(piece) = self.current else { return };

        let rotated = piece.shape.rotated();
        if self.board.piece_fits(&rotated, piece.x, piece.y) {
            self.current = Some(Tetromino {
                shape: rotated,
                ..piece
            });
        }
    }

    /// Drop the current piece to the lowest legal row and lock it there.
    pub fn hard_drop(&mut self) {
        if !self.in_play() {
            return;
        }
        let Some(mut piece) = self.current else { return };

        while self.board.piece_fits(&piece.shape, piece.x, piece.y + 1) {
            piece.y += 1;
        }
        self.current = Some(piece);
        self.lock_current();
    }

    /// Toggle pause. Has no effect unless a game is running.
    pub fn toggle_pause(&mut self) {
        if self.is_playing {
            self.is_paused = !self.is_paused;
        }
    }

    /// Lowest legal row for the current piece at its current column.
    ///
    /// Advisory only (ghost piece display); nothing is mutated.
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.current?;
        let mut y = piece.y;
        while self.board.piece_fits(&piece.shape, piece.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Apply a driver command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::MoveLeft => self.move_piece(-1, 0),
            Command::MoveRight => self.move_piece(1, 0),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::TogglePause => self.toggle_pause(),
            Command::Gravity => self.move_piece(0, 1),
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Merge the current piece into the board, clear lines, account score,
    /// and promote the next piece. Runs the game-over check against the
    /// post-clear board.
    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        let (board, cleared) = self.board.merged(&piece).clear_full_rows();
        self.board = board;

        // Score with the level in effect before this lock, then level up.
        let delta = score_delta(cleared, self.level);
        self.score += delta;
        self.lines += cleared as u32;
        self.level = level_for(self.lines);

        let promoted = match self.next.take() {
            Some(next) => next,
            None => Tetromino::spawn_random(&mut self.rng),
        };
        self.next = Some(Tetromino::spawn_random(&mut self.rng));

        let blocked = !self.board.piece_fits(&promoted.shape, promoted.x, promoted.y);
        self.current = Some(promoted);
        if blocked {
            self.is_game_over = true;
            self.is_playing = false;
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            score_delta: delta,
            game_over: blocked,
        });
    }
}
