//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the rules engine and its
//! drivers: board dimensions, gravity and scoring constants, piece types,
//! orientations and player actions. Everything here is plain data.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: (3, 0), the top-left corner of the piece's 4x4 box
//!
//! # Gravity
//!
//! Timing is simulation time in seconds. The drop interval at level `n` is
//! `max(0.1, 1.0 - (n - 1) * 0.05)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1.00s |
//! | 2 | 0.95s |
//! | 10 | 0.55s |
//! | 19+ | 0.10s |
//!
//! # Examples
//!
//! ```
//! use srs_tetris_types::{GameAction, Orientation, PieceType, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceType::T;
//! assert_eq!(PieceType::from_str("t"), Some(piece));
//! assert_eq!(piece.cell_code(), 3);
//!
//! assert_eq!(Orientation::North.rotate_cw(), Orientation::East);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column of a new piece's bounding box
pub const SPAWN_X: i8 = 3;

/// Spawn row of a new piece's bounding box
pub const SPAWN_Y: i8 = 0;

/// Number of upcoming pieces exposed by the generator
pub const PREVIEW_LEN: usize = 2;

/// Number of piece types in one bag
pub const BAG_SIZE: usize = 7;

/// Suggested fixed simulation step (60 Hz)
pub const TICK_SECS: f32 = 1.0 / 60.0;

/// Drop interval at level 1 (seconds per row)
pub const BASE_DROP_INTERVAL_SECS: f32 = 1.0;

/// Drop interval reduction per level above 1
pub const DROP_INTERVAL_STEP_SECS: f32 = 0.05;

/// Fastest drop interval
pub const MIN_DROP_INTERVAL_SECS: f32 = 0.1;

/// Lines required to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table, indexed by lines cleared (4 and above use the last entry)
///
/// Points are multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points per row for a successful MoveDown
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row travelled by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// The seven tetromino piece types
///
/// Declaration order is the canonical bag order and matches the board cell
/// codes 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceType {
    /// All piece types in canonical order
    pub const ALL: [PieceType; BAG_SIZE] = [
        PieceType::I,
        PieceType::O,
        PieceType::T,
        PieceType::S,
        PieceType::Z,
        PieceType::J,
        PieceType::L,
    ];

    /// Parse piece type from string (case-insensitive)
    ///
    /// ```
    /// use srs_tetris_types::PieceType;
    ///
    /// assert_eq!(PieceType::from_str("i"), Some(PieceType::I));
    /// assert_eq!(PieceType::from_str("O"), Some(PieceType::O));
    /// assert_eq!(PieceType::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceType::I),
            "o" => Some(PieceType::O),
            "t" => Some(PieceType::T),
            "s" => Some(PieceType::S),
            "z" => Some(PieceType::Z),
            "j" => Some(PieceType::J),
            "l" => Some(PieceType::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceType::I => "i",
            PieceType::O => "o",
            PieceType::T => "t",
            PieceType::S => "s",
            PieceType::Z => "z",
            PieceType::J => "j",
            PieceType::L => "l",
        }
    }

    /// Board cell code for this type (1..=7)
    pub fn cell_code(&self) -> u8 {
        match self {
            PieceType::I => 1,
            PieceType::O => 2,
            PieceType::T => 3,
            PieceType::S => 4,
            PieceType::Z => 5,
            PieceType::J => 6,
            PieceType::L => 7,
        }
    }

    /// Inverse of [`PieceType::cell_code`]; 0 and unknown codes map to `None`
    pub fn from_cell_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }
}

/// Rotation states following the Super Rotation System (SRS)
///
/// - **North**: Spawn orientation
/// - **East**: Rotated 90° clockwise
/// - **South**: Rotated 180°
/// - **West**: Rotated 90° counter-clockwise
///
/// The cycle goes North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All orientations in clockwise order starting at North
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Position in the clockwise cycle (North = 0)
    pub fn index(&self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use srs_tetris_types::Orientation;
    ///
    /// assert_eq!(Orientation::North.rotate_cw(), Orientation::East);
    /// assert_eq!(Orientation::West.rotate_cw(), Orientation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use srs_tetris_types::Orientation;
    ///
    /// assert_eq!(Orientation::North.rotate_ccw(), Orientation::West);
    /// assert_eq!(Orientation::East.rotate_ccw(), Orientation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Parse orientation from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Orientation::North),
            "east" | "e" => Some(Orientation::East),
            "south" | "s" => Some(Orientation::South),
            "west" | "w" => Some(Orientation::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::North => "north",
            Orientation::East => "east",
            Orientation::South => "south",
            Orientation::West => "west",
        }
    }
}

/// Discrete player actions accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (soft drop, +1 point)
    MoveDown,
    /// Rotate piece 90° clockwise with wall kicks
    RotateCw,
    /// Rotate piece 90° counter-clockwise with wall kicks
    RotateCcw,
    /// Drop piece to its resting row and lock it
    HardDrop,
    /// Swap the active piece with the hold slot (once per lock)
    Hold,
    /// Reset the whole session; the only action honored after game over
    Restart,
}

impl GameAction {
    /// All actions, in declaration order
    pub const ALL: [GameAction; 8] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::Restart,
    ];

    /// Parse action from string (case-insensitive)
    ///
    /// ```
    /// use srs_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATECW"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "harddrop" => Some(GameAction::HardDrop),
            "hold" => Some(GameAction::Hold),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceType)`: Cell filled by a locked piece of that type
pub type Cell = Option<PieceType>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_codes_roundtrip_for_all_types() {
        for (i, kind) in PieceType::ALL.iter().enumerate() {
            assert_eq!(kind.cell_code() as usize, i + 1);
            assert_eq!(PieceType::from_cell_code(kind.cell_code()), Some(*kind));
        }
        assert_eq!(PieceType::from_cell_code(0), None);
        assert_eq!(PieceType::from_cell_code(8), None);
    }

    #[test]
    fn orientation_cycle_is_mod_four() {
        for o in Orientation::ALL {
            assert_eq!(o.rotate_cw().rotate_ccw(), o);
            assert_eq!(o.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), o);
        }
    }

    #[test]
    fn action_strings_parse_back() {
        for action in GameAction::ALL {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn action_serializes_as_camel_case() {
        let json = serde_json::to_string(&GameAction::RotateCcw).unwrap();
        assert_eq!(json, "\"rotateCcw\"");
    }

    #[test]
    fn gravity_defaults() {
        assert_eq!(BASE_DROP_INTERVAL_SECS, 1.0);
        assert_eq!(MIN_DROP_INTERVAL_SECS, 0.1);
        assert_eq!(LINE_SCORES, [0, 40, 100, 300, 1200]);
        assert_eq!((SPAWN_X, SPAWN_Y), (3, 0));
    }
}
