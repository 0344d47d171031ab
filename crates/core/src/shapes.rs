//! Shape table - occupancy masks for every piece type and orientation
//!
//! Each piece lives in a 4x4 bounding box whose top-left corner is the piece
//! position. Offsets are `(column, row)` inside that box, rows growing down.
//! Reference: https://tetris.wiki/SRS

use serde::{Deserialize, Serialize};

use crate::types::{Orientation, PieceType};

/// Offset of a single mino relative to the piece origin
pub type MinoOffset = (i8, i8);

/// The four mino offsets of one piece shape
pub type PieceShape = [MinoOffset; 4];

/// 4x4 occupancy mask, indexed `[row][column]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ShapeMask([[bool; 4]; 4]);

impl ShapeMask {
    /// Mask with no occupied cells
    pub const EMPTY: ShapeMask = ShapeMask([[false; 4]; 4]);

    /// Build a mask from mino offsets; offsets outside the 4x4 box are skipped
    pub fn from_offsets(offsets: &[MinoOffset]) -> Self {
        let mut rows = [[false; 4]; 4];
        for &(dx, dy) in offsets {
            if (0..4).contains(&dx) && (0..4).contains(&dy) {
                rows[dy as usize][dx as usize] = true;
            }
        }
        Self(rows)
    }

    /// Whether the cell at `(column, row)` is occupied; false outside the box
    pub fn get(&self, column: usize, row: usize) -> bool {
        row < 4 && column < 4 && self.0[row][column]
    }

    pub fn rows(&self) -> &[[bool; 4]; 4] {
        &self.0
    }

    /// Occupied cells as `(column, row)` offsets, row-major order
    pub fn cells(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(col, _)| (col as i8, row as i8))
        })
    }

    pub fn count(&self) -> usize {
        self.0.iter().flatten().filter(|&&filled| filled).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Get the occupancy mask for a piece type and orientation
///
/// An absent piece type has the empty mask.
pub fn shape_of(kind: Option<PieceType>, orientation: Orientation) -> ShapeMask {
    match kind {
        Some(kind) => ShapeMask::from_offsets(&get_shape(kind, orientation)),
        None => ShapeMask::EMPTY,
    }
}

/// Get the mino offsets for a piece type and orientation
pub fn get_shape(kind: PieceType, orientation: Orientation) -> PieceShape {
    match kind {
        PieceType::I => get_i_shape(orientation),
        PieceType::O => get_o_shape(orientation),
        PieceType::T => get_t_shape(orientation),
        PieceType::S => get_s_shape(orientation),
        PieceType::Z => get_z_shape(orientation),
        PieceType::J => get_j_shape(orientation),
        PieceType::L => get_l_shape(orientation),
    }
}

fn get_i_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        // N: horizontal on row 1
        Orientation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        // E: vertical in column 2
        Orientation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        // S: horizontal on row 2
        Orientation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        // W: vertical in column 1
        Orientation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// Same for all orientations
fn get_o_shape(_orientation: Orientation) -> PieceShape {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

fn get_t_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Orientation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Orientation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_s_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Orientation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Orientation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Orientation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_z_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Orientation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Orientation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Orientation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn get_j_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Orientation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Orientation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn get_l_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Orientation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Orientation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}
