//! Read model handed to drivers
//!
//! A [`GameSnapshot`] is everything a renderer or test harness is allowed to
//! see. It is plain data and serializes with serde.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::U8Grid;
use crate::piece::Piece;
use crate::shapes::ShapeMask;
use crate::types::{Orientation, PieceType, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceType,
    pub orientation: Orientation,
    pub x: i8,
    pub y: i8,
    pub mask: ShapeMask,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            orientation: value.orientation(),
            x: value.x(),
            y: value.y(),
            mask: *value.mask(),
        }
    }
}

impl ActiveSnapshot {
    /// Absolute cells of the piece with its box top at row `y`
    fn cells_at(&self, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.mask.cells().map(move |(dx, dy)| (self.x + dx, y + dy))
    }

    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.cells_at(self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cell codes, 0 = empty, 1..=7 = locked piece type
    pub board: U8Grid,
    pub active: ActiveSnapshot,
    /// Row the active piece would rest on if dropped straight down
    pub ghost_y: i8,
    pub hold: Option<PieceType>,
    pub can_hold: bool,
    pub next: [PieceType; PREVIEW_LEN],
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
    /// Current gravity interval in seconds
    pub drop_interval: f32,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Absolute cells of the ghost piece
    pub fn ghost_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.active.cells_at(self.ghost_y)
    }

    fn cell_char(&self, x: i8, y: i8) -> char {
        if self.active.cells().any(|cell| cell == (x, y)) {
            return self.active.kind.as_str().to_ascii_uppercase().chars().next().unwrap_or('#');
        }
        match PieceType::from_cell_code(self.board[y as usize][x as usize]) {
            Some(kind) => kind.as_str().chars().next().unwrap_or('#'),
            None if self.ghost_cells().any(|cell| cell == (x, y)) => '+',
            None => '.',
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot::from(&Piece::spawn(PieceType::I)),
            ghost_y: 0,
            hold: None,
            can_hold: true,
            next: [PieceType::I; PREVIEW_LEN],
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            drop_interval: 1.0,
            episode_id: 0,
            piece_id: 0,
        }
    }
}

/// ASCII rendering for headless drivers: locked cells in lowercase, the
/// active piece in uppercase, the ghost as `+`.
impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT as i8 {
            write!(f, "|")?;
            for x in 0..BOARD_WIDTH as i8 {
                write!(f, "{}", self.cell_char(x, y))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+{}+", "-".repeat(BOARD_WIDTH as usize))?;

        let hold = self.hold.map_or("-", |kind| kind.as_str());
        let next: Vec<&str> = self.next.iter().map(|kind| kind.as_str()).collect();
        write!(
            f,
            "score {} level {} lines {} hold {} next {}{}",
            self.score,
            self.level,
            self.lines,
            hold,
            next.join(","),
            if self.game_over { " GAME OVER" } else { "" }
        )
    }
}
