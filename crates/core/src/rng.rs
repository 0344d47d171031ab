//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization algorithm used in modern Tetris.
//! Each bag contains one of each piece (I, O, T, S, Z, J, L), shuffled.
//! Draws from the bag until empty, then shuffles a fresh bag. A two-piece
//! preview sits one draw ahead of what [`BagGenerator::next`] hands out.
//!
//! The shuffle source is pluggable through [`PieceRng`]; [`SimpleRng`] is a
//! small LCG so seeded games are reproducible.

use crate::piece::Piece;
use crate::types::{PieceType, BAG_SIZE, PREVIEW_LEN};

/// Random source used to shuffle bags
pub trait PieceRng {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 would start the sequence at the increment; keep it distinct
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state, usable as a seed to resume the sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl PieceRng for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    // High bits of an LCG are far better distributed than the low ones
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// 7-bag piece generator with a fixed-length preview
#[derive(Debug, Clone)]
pub struct BagGenerator<R: PieceRng = SimpleRng> {
    /// Current shuffled bag
    bag: [PieceType; BAG_SIZE],
    /// Index of the next undrawn entry; `BAG_SIZE` means exhausted
    cursor: usize,
    /// Upcoming pieces, `preview[0]` is handed out next
    preview: [PieceType; PREVIEW_LEN],
    rng: R,
}

impl BagGenerator<SimpleRng> {
    /// Create a generator seeded with `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: PieceRng> BagGenerator<R> {
    /// Create a generator drawing shuffles from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut generator = Self {
            bag: PieceType::ALL,
            cursor: BAG_SIZE,
            preview: [PieceType::I; PREVIEW_LEN],
            rng,
        };
        generator.fill_preview();
        generator
    }

    fn fill_preview(&mut self) {
        for i in 0..PREVIEW_LEN {
            self.preview[i] = self.draw_from_bag();
        }
    }

    /// Rebuild the bag in canonical order, shuffle it and rewind the cursor
    pub fn refill(&mut self) {
        self.bag = PieceType::ALL;
        self.rng.shuffle(&mut self.bag);
        self.cursor = 0;
    }

    /// Draw the next type straight from the bag, reshuffling when exhausted
    pub fn draw_from_bag(&mut self) -> PieceType {
        if self.cursor >= BAG_SIZE {
            self.refill();
        }

        let kind = self.bag[self.cursor];
        self.cursor += 1;
        kind
    }

    /// Hand out the first preview piece at the spawn position and top up the preview
    pub fn next(&mut self) -> Piece {
        let kind = self.preview[0];
        self.preview.copy_within(1.., 0);
        self.preview[PREVIEW_LEN - 1] = self.draw_from_bag();
        Piece::spawn(kind)
    }

    pub fn preview(&self) -> [PieceType; PREVIEW_LEN] {
        self.preview
    }

    /// Discard the current bag and preview and start over from a fresh bag
    ///
    /// The random stream continues, so the new sequence differs from the last one.
    pub fn reset(&mut self) {
        self.cursor = BAG_SIZE;
        self.fill_preview();
    }

    /// Undrawn remainder of the current bag
    pub fn remaining(&self) -> &[PieceType] {
        &self.bag[self.cursor.min(BAG_SIZE)..]
    }
}

impl Default for BagGenerator<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
