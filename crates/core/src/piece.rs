//! Piece module - the falling tetromino value type
//!
//! A piece is a type, an orientation and the board position of its 4x4
//! bounding box. Its occupancy mask is cached but only ever derived from
//! `(kind, orientation)`, so every orientation change refreshes it.
//! Pieces do not validate anything; legality is decided by the board and the
//! game state.

use crate::shapes::{shape_of, ShapeMask};
use crate::types::{Orientation, PieceType, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceType,
    orientation: Orientation,
    x: i8,
    y: i8,
    mask: ShapeMask,
}

impl Piece {
    /// Create a piece facing North with its box at `(x, y)`
    pub fn new(kind: PieceType, x: i8, y: i8) -> Self {
        Self {
            kind,
            orientation: Orientation::North,
            x,
            y,
            mask: shape_of(Some(kind), Orientation::North),
        }
    }

    /// Create a piece at the spawn position
    pub fn spawn(kind: PieceType) -> Self {
        Self::new(kind, SPAWN_X, SPAWN_Y)
    }

    pub fn kind(&self) -> PieceType {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn mask(&self) -> &ShapeMask {
        &self.mask
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.mask.cells().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.x += 1;
    }

    pub fn move_down(&mut self) {
        self.y += 1;
    }

    /// Replace the orientation and refresh the mask
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.mask = shape_of(Some(self.kind), orientation);
    }

    pub fn set_position(&mut self, x: i8, y: i8) {
        self.x = x;
        self.y = y;
    }

    /// Copy of this piece translated by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        let mut moved = *self;
        moved.set_position(self.x + dx, self.y + dy);
        moved
    }
}
