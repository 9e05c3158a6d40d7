//! Game view - draws a session onto any terminal-command sink.
//!
//! Pure with respect to the game: the view reads state and queues crossterm
//! commands into a writer, never mutating the session. Foreground color
//! changes are only emitted when the color actually changes between cells,
//! which keeps the byte stream small on mostly-empty boards.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::core::{GameState, Tetromino};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal columns per board cell (compensates the glyph aspect ratio).
const CELL_W: u16 = 2;

const FRAME_W: u16 = BOARD_WIDTH as u16 * CELL_W + 2;
const FRAME_H: u16 = BOARD_HEIGHT as u16 + 2;

const BORDER_COLOR: Color = Color::Grey;
const EMPTY_COLOR: Color = Color::DarkGrey;
const TEXT_COLOR: Color = Color::White;
const VALUE_COLOR: Color = Color::Grey;

pub struct GameView {
    origin_x: u16,
    origin_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            origin_x: 1,
            origin_y: 1,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a full frame for the given session into `out`.
    ///
    /// The caller flushes; nothing is written to the terminal until then.
    pub fn draw(&self, out: &mut impl Write, state: &GameState, best: u32) -> Result<()> {
        out.queue(Clear(ClearType::All))?;
        out.queue(ResetColor)?;

        self.draw_frame(out)?;
        self.draw_board(out, state)?;
        self.draw_panel(out, state, best)?;
        self.draw_overlay(out, state)?;

        out.queue(ResetColor)?;
        Ok(())
    }

    fn draw_frame(&self, out: &mut impl Write) -> Result<()> {
        let (x, y) = (self.origin_x, self.origin_y);
        out.queue(SetForegroundColor(BORDER_COLOR))?;

        out.queue(MoveTo(x, y))?;
        out.queue(Print('┌'))?;
        for _ in 0..FRAME_W - 2 {
            out.queue(Print('─'))?;
        }
        out.queue(Print('┐'))?;

        for row in 1..FRAME_H - 1 {
            out.queue(MoveTo(x, y + row))?;
            out.queue(Print('│'))?;
            out.queue(MoveTo(x + FRAME_W - 1, y + row))?;
            out.queue(Print('│'))?;
        }

        out.queue(MoveTo(x, y + FRAME_H - 1))?;
        out.queue(Print('└'))?;
        for _ in 0..FRAME_W - 2 {
            out.queue(Print('─'))?;
        }
        out.queue(Print('┘'))?;
        Ok(())
    }

    /// Locked cells, ghost projection, then the active piece on top.
    fn draw_board(&self, out: &mut impl Write, state: &GameState) -> Result<()> {
        let active = state.current();
        let ghost_y = state.ghost_y();

        let mut last_color: Option<Color> = None;
        for y in 0..BOARD_HEIGHT as i8 {
            out.queue(MoveTo(
                self.origin_x + 1,
                self.origin_y + 1 + y as u16,
            ))?;
            for x in 0..BOARD_WIDTH as i8 {
                let (ch, color) = self.cell_appearance(state, active, ghost_y, x, y);
                if last_color != Some(color) {
                    out.queue(SetForegroundColor(color))?;
                    last_color = Some(color);
                }
                for _ in 0..CELL_W {
                    out.queue(Print(ch))?;
                }
            }
        }
        Ok(())
    }

    fn cell_appearance(
        &self,
        state: &GameState,
        active: Option<Tetromino>,
        ghost_y: Option<i8>,
        x: i8,
        y: i8,
    ) -> (char, Color) {
        if let Some(piece) = active {
            if covers(&piece, piece.y, x, y) {
                return ('█', kind_color(piece.kind));
            }
            if let Some(gy) = ghost_y {
                if covers(&piece, gy, x, y) {
                    return ('░', kind_color(piece.kind));
                }
            }
        }
        match state.board().get(x, y) {
            Some(Some(kind)) => ('█', kind_color(kind)),
            _ => ('·', EMPTY_COLOR),
        }
    }

    fn draw_panel(&self, out: &mut impl Write, state: &GameState, best: u32) -> Result<()> {
        let x = self.origin_x + FRAME_W + 2;
        let mut y = self.origin_y;

        for (label, value) in [
            ("SCORE", state.score()),
            ("LINES", state.lines()),
            ("LEVEL", state.level()),
            ("BEST", best),
        ] {
            put_str(out, x, y, label, TEXT_COLOR)?;
            put_str(out, x, y + 1, &value.to_string(), VALUE_COLOR)?;
            y += 3;
        }

        put_str(out, x, y, "NEXT", TEXT_COLOR)?;
        if let Some(next) = state.next() {
            self.draw_preview(out, x, y + 1, &next)?;
        }
        y += 6;

        for line in ["← → move", "↑ rotate", "↓ soft drop", "space drop", "p pause  q quit"] {
            put_str(out, x, y, line, EMPTY_COLOR)?;
            y += 1;
        }
        Ok(())
    }

    /// Next piece centered in a 4x4 box, like the board scaled down.
    fn draw_preview(&self, out: &mut impl Write, x: u16, y: u16, piece: &Tetromino) -> Result<()> {
        let size = piece.shape.size() as i32;
        let offset = (4 - size) / 2;

        out.queue(SetForegroundColor(kind_color(piece.kind)))?;
        for row in 0..4i32 {
            out.queue(MoveTo(x, y + row as u16))?;
            for col in 0..4i32 {
                let (sx, sy) = (col - offset, row - offset);
                let filled = sx >= 0
                    && sy >= 0
                    && piece.shape.filled(sx as usize, sy as usize);
                let ch = if filled { '█' } else { ' ' };
                for _ in 0..CELL_W {
                    out.queue(Print(ch))?;
                }
            }
        }
        Ok(())
    }

    fn draw_overlay(&self, out: &mut impl Write, state: &GameState) -> Result<()> {
        let lines: &[&str] = if state.is_game_over() {
            &["GAME OVER", "enter: new game"]
        } else if state.is_paused() {
            &["PAUSED"]
        } else if !state.is_playing() {
            &["press enter to start"]
        } else {
            return Ok(());
        };

        let mid_y = self.origin_y + FRAME_H / 2;
        for (i, text) in lines.iter().enumerate() {
            let w = text.chars().count() as u16;
            let x = self.origin_x + FRAME_W.saturating_sub(w) / 2;
            put_str(out, x, mid_y + i as u16, text, TEXT_COLOR)?;
        }
        Ok(())
    }
}

fn put_str(out: &mut impl Write, x: u16, y: u16, s: &str, color: Color) -> Result<()> {
    out.queue(MoveTo(x, y))?;
    out.queue(SetForegroundColor(color))?;
    out.queue(Print(s))?;
    Ok(())
}

/// Whether the piece, with its matrix corner at row `py`, covers (x, y).
fn covers(piece: &Tetromino, py: i8, x: i8, y: i8) -> bool {
    let (dx, dy) = (x - piece.x, y - py);
    dx >= 0 && dy >= 0 && piece.shape.filled(dx as usize, dy as usize)
}

fn kind_color(kind: PieceKind) -> Color {
    let (r, g, b) = match kind {
        PieceKind::I => (80, 220, 220),
        PieceKind::O => (240, 220, 80),
        PieceKind::T => (200, 120, 220),
        PieceKind::S => (100, 220, 120),
        PieceKind::Z => (220, 80, 80),
        PieceKind::J => (80, 120, 220),
        PieceKind::L => (255, 165, 0),
    };
    Color::Rgb { r, g, b }
}
