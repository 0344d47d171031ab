//! Rotation module - SRS wall kick resolution
//!
//! Given a piece type and a from/to orientation pair, returns the ordered
//! offsets to test when rotating. The caller accepts the first candidate that
//! does not collide, so this module never needs to see the board.
//!
//! Offsets are in board coordinates: +x is right, +y is down. The reference
//! tables on https://tetris.wiki/SRS are written with +y up, so every `dy`
//! here is negated relative to them.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Orientation, PieceType};

/// A single kick offset (dx, dy)
pub type Kick = (i8, i8);

/// Ordered kick candidates for one rotation
pub type KickList = ArrayVec<Kick, KICK_TESTS>;

/// Number of tests per rotation for the rotating pieces
pub const KICK_TESTS: usize = 5;

/// Kick table indexed by `[transition][direction][test]`
///
/// `transition` is the clockwise step starting at that orientation
/// (0 = N->E, 1 = E->S, 2 = S->W, 3 = W->N). `direction` 0 is the clockwise
/// step itself, 1 is its counter-clockwise inverse.
pub type KickTable = [[[Kick; KICK_TESTS]; 2]; 4];

const CLOCKWISE: usize = 0;
const COUNTER_CLOCKWISE: usize = 1;

/// Shared by J, L, S, T and Z
pub const JLSTZ_KICKS: KickTable = [
    [
        // N->E
        [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
        // E->N
        [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    ],
    [
        // E->S
        [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
        // S->E
        [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    ],
    [
        // S->W
        [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
        // W->S
        [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    ],
    [
        // W->N
        [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
        // N->W
        [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    ],
];

/// The I piece kicks further because of its 4-wide footprint
pub const I_KICKS: KickTable = [
    [
        // N->E
        [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
        // E->N
        [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    ],
    [
        // E->S
        [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
        // S->E
        [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    ],
    [
        // S->W
        [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
        // W->S
        [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    ],
    [
        // W->N
        [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
        // N->W
        [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    ],
];

/// Orientation reached by one rotation step
pub fn next_orientation(current: Orientation, clockwise: bool) -> Orientation {
    if clockwise {
        current.rotate_cw()
    } else {
        current.rotate_ccw()
    }
}

/// Locate `(from, to)` in a kick table as `(transition, direction)`
///
/// Returns None for pairs that are not a single rotation step.
pub fn kick_index(from: Orientation, to: Orientation) -> Option<(usize, usize)> {
    if to == from.rotate_cw() {
        Some((from.index(), CLOCKWISE))
    } else if to == from.rotate_ccw() {
        Some((to.index(), COUNTER_CLOCKWISE))
    } else {
        None
    }
}

/// Ordered kick offsets to test when rotating `kind` from `from` to `to`
///
/// The O piece and pairs that are not a single step get the lone `(0, 0)` test.
pub fn wall_kicks(kind: PieceType, from: Orientation, to: Orientation) -> KickList {
    let table = match kind {
        PieceType::O => None,
        PieceType::I => Some(&I_KICKS),
        _ => Some(&JLSTZ_KICKS),
    };

    let mut kicks = KickList::new();
    match (table, kick_index(from, to)) {
        (Some(table), Some((transition, direction))) => {
            kicks.extend(table[transition][direction].iter().copied());
        }
        _ => kicks.push((0, 0)),
    }
    kicks
}

/// Rotate `piece` one step, returning the first kicked placement accepted by `fits`
pub fn try_rotate(piece: &Piece, clockwise: bool, fits: impl Fn(&Piece) -> bool) -> Option<Piece> {
    let target = next_orientation(piece.orientation(), clockwise);

    wall_kicks(piece.kind(), piece.orientation(), target)
        .into_iter()
        .map(|(dx, dy)| {
            let mut candidate = piece.shifted(dx, dy);
            candidate.set_orientation(target);
            candidate
        })
        .find(|candidate| fits(candidate))
}
