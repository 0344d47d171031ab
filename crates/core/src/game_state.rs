//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, bag generator, rotation and
//! scoring. It handles gravity, piece movement, rotation, hold, line clears
//! and the game lifecycle:
//!
//! ```text
//! spawn -> fall -> lock -> clear -> spawn
//!            \-> hold / hard drop
//! spawn collides -> game over -> restart
//! ```
//!
//! Illegal moves are rejected silently; the `bool` results only report
//! whether anything changed.

use crate::board::Board;
use crate::engine::GameEngine;
use crate::piece::Piece;
use crate::rng::{BagGenerator, PieceRng, SimpleRng};
use crate::rotation;
use crate::scoring::{
    calculate_drop_score, calculate_level, calculate_line_score, drop_interval_secs,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceType, PREVIEW_LEN};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: PieceRng = SimpleRng> {
    board: Board,
    active: Piece,
    hold: Option<PieceType>,
    /// Latched false after a hold until the next lock
    can_hold: bool,
    bag: BagGenerator<R>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Pieces drawn from the bag this episode; hold swaps do not count.
    piece_id: u32,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    /// Simulation seconds accumulated toward the next gravity step
    drop_timer: f32,
    drop_interval: f32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: PieceRng> GameState<R> {
    /// Create a new game drawing bag shuffles from `rng`, with the first piece spawned
    pub fn with_rng(rng: R) -> Self {
        let mut bag = BagGenerator::with_rng(rng);
        let active = bag.next();

        Self {
            board: Board::new(),
            active,
            hold: None,
            can_hold: true,
            bag,
            episode_id: 0,
            piece_id: 1,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            drop_timer: 0.0,
            drop_interval: drop_interval_secs(1),
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn hold_piece(&self) -> Option<PieceType> {
        self.hold
    }

    pub fn preview(&self) -> [PieceType; PREVIEW_LEN] {
        self.bag.preview()
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drop_interval(&self) -> f32 {
        self.drop_interval
    }

    pub fn drop_timer(&self) -> f32 {
        self.drop_timer
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Refresh `out` in place
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = ActiveSnapshot::from(&self.active);
        out.ghost_y = self.ghost_y();
        out.hold = self.hold;
        out.can_hold = self.can_hold;
        out.next = self.bag.preview();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.drop_interval = self.drop_interval;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Make `piece` active; a spawn that collides ends the game
    fn spawn_piece(&mut self, piece: Piece) -> bool {
        self.active = piece;
        if !self.board.fits(&self.active) {
            self.game_over = true;
            return false;
        }
        true
    }

    /// Spawn the next piece from the bag
    fn spawn_from_bag(&mut self) -> bool {
        let piece = self.bag.next();
        self.piece_id = self.piece_id.wrapping_add(1);
        self.spawn_piece(piece)
    }

    /// Apply `step` to a copy of the active piece and keep it if it fits
    fn try_step(&mut self, step: fn(&mut Piece)) -> bool {
        if self.game_over {
            return false;
        }

        let mut candidate = self.active;
        step(&mut candidate);

        if self.board.fits(&candidate) {
            self.active = candidate;
            return true;
        }

        false
    }

    pub fn try_move_left(&mut self) -> bool {
        self.try_step(Piece::move_left)
    }

    pub fn try_move_right(&mut self) -> bool {
        self.try_step(Piece::move_right)
    }

    pub fn try_move_down(&mut self) -> bool {
        self.try_step(Piece::move_down)
    }

    /// Try to rotate the active piece with SRS wall kicks
    ///
    /// Orientation and position are committed together or not at all.
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        if self.game_over {
            return false;
        }

        let board = &self.board;
        match rotation::try_rotate(&self.active, clockwise, |piece| board.fits(piece)) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Row the active piece would rest on if dropped straight down
    pub fn ghost_y(&self) -> i8 {
        let mut ghost = self.active;
        loop {
            let mut below = ghost;
            below.move_down();
            if !self.board.fits(&below) {
                return ghost.y();
            }
            ghost = below;
        }
    }

    /// Lock the active piece, clear rows, score them and spawn the next piece
    ///
    /// Returns the number of rows cleared.
    fn lock_piece(&mut self) -> usize {
        self.board.lock(&self.active);

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.score = self
                .score
                .saturating_add(calculate_line_score(cleared, self.level));
            self.lines = self.lines.saturating_add(cleared as u32);
            self.level = calculate_level(self.lines);
            self.drop_interval = drop_interval_secs(self.level);
        }

        self.spawn_from_bag();
        self.can_hold = true;

        cleared
    }

    /// Drop the active piece to its ghost row and lock it
    ///
    /// Returns the distance dropped; 0 once the game is over.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }

        let ghost_y = self.ghost_y();
        let distance = (ghost_y - self.active.y()).max(0) as u32;

        self.active.set_position(self.active.x(), ghost_y);
        self.score = self
            .score
            .saturating_add(calculate_drop_score(distance, true));

        self.lock_piece();
        self.drop_timer = 0.0;

        distance
    }

    /// Swap active piece with hold piece
    pub fn hold(&mut self) -> bool {
        if self.game_over || !self.can_hold {
            return false;
        }
        self.can_hold = false;

        let current = self.active.kind();
        match self.hold.replace(current) {
            Some(held) => {
                self.spawn_piece(Piece::spawn(held));
            }
            None => {
                self.spawn_from_bag();
            }
        }

        true
    }

    /// Main game tick - accumulate simulation time and apply gravity
    ///
    /// Returns true when a gravity step ran (moved or locked).
    pub fn tick(&mut self, delta_secs: f32) -> bool {
        if self.game_over {
            return false;
        }

        self.drop_timer += delta_secs;
        if self.drop_timer < self.drop_interval {
            return false;
        }

        self.drop_timer = 0.0;
        if !self.try_move_down() {
            self.lock_piece();
        }

        true
    }

    /// Apply a game action
    ///
    /// While the game is over only `Restart` is honored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over && action != GameAction::Restart {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move_left(),
            GameAction::MoveRight => self.try_move_right(),
            GameAction::MoveDown => {
                let moved = self.try_move_down();
                if moved {
                    self.score = self
                        .score
                        .saturating_add(calculate_drop_score(1, false));
                }
                moved
            }
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Hold => self.hold(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Start a new episode: empty board, fresh bag, zeroed session
    pub fn restart(&mut self) {
        self.board.clear();
        self.bag.reset();
        self.hold = None;
        self.can_hold = true;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.piece_id = 0;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.game_over = false;
        self.drop_timer = 0.0;
        self.drop_interval = drop_interval_secs(1);

        self.spawn_from_bag();
    }
}

impl<R: PieceRng> GameEngine for GameState<R> {
    fn advance(&mut self, delta_secs: f32) {
        self.tick(delta_secs);
    }

    fn apply(&mut self, action: GameAction) {
        self.apply_action(action);
    }

    fn snapshot(&self) -> GameSnapshot {
        GameState::snapshot(self)
    }

    fn reset(&mut self) {
        self.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, BOARD_HEIGHT, BOARD_WIDTH};

    /// Replays a fixed cycle of raw values so tests control every shuffle
    struct ScriptedRng {
        values: Vec<u32>,
        next: usize,
    }

    impl PieceRng for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }
    }

    fn fill_row_except(state: &mut GameState, y: i8, gap: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            if x != gap {
                state.board_mut().set(x, y, Some(PieceType::L));
            }
        }
    }

    /// Vertical I piece hanging above column 9
    fn vertical_i_in_last_column() -> Piece {
        let mut piece = Piece::new(PieceType::I, 7, 0);
        piece.set_orientation(Orientation::East);
        piece
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.episode_id, 0);
        assert_eq!(state.piece_id, 1);
        assert!(state.hold.is_none());
        assert!(state.can_hold);
        assert_eq!(state.drop_interval, 1.0);
        assert_eq!((state.active.x(), state.active.y()), (3, 0));
        assert_eq!(state.active.orientation(), Orientation::North);
    }

    #[test]
    fn test_custom_rng_drives_the_bag() {
        // Always picking index 0 leaves the canonical order rotated
        let state = GameState::with_rng(ScriptedRng {
            values: vec![0],
            next: 0,
        });
        let mut seen = vec![state.active().kind()];
        seen.extend(state.preview());
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|kind| PieceType::ALL.contains(kind)));
    }

    #[test]
    fn test_spawn_takes_preview_front() {
        let mut state = GameState::new(12345);
        let next_kind = state.preview()[0];

        state.hard_drop();

        assert!(!state.game_over);
        assert_eq!(state.active.kind(), next_kind);
        assert_eq!(state.piece_id, 2);
    }

    #[test]
    fn test_try_move() {
        let mut state = GameState::new(12345);
        let initial_x = state.active.x();

        assert!(state.try_move_right());
        assert_eq!(state.active.x(), initial_x + 1);

        assert!(state.try_move_left());
        assert_eq!(state.active.x(), initial_x);
    }

    #[test]
    fn test_try_move_stops_at_wall() {
        let mut state = GameState::new(12345);

        let mut moved = 0;
        for _ in 0..10 {
            if state.try_move_left() {
                moved += 1;
            }
        }
        // Spawn column is 3 and every mask column is within 0..=3
        assert!(moved <= 4);
        assert!(!state.try_move_left());
    }

    #[test]
    fn test_move_down_awards_soft_drop_point() {
        let mut state = GameState::new(12345);

        assert!(state.apply_action(GameAction::MoveDown));
        assert_eq!(state.score, 1);
        assert_eq!(state.active.y(), 1);
    }

    #[test]
    fn test_failed_move_down_awards_nothing() {
        let mut state = GameState::new(12345);
        let ghost = state.ghost_y();
        state.active.set_position(state.active.x(), ghost);

        assert!(!state.apply_action(GameAction::MoveDown));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_rotate_round_trip() {
        let mut state = GameState::new(12345);
        state.active = Piece::new(PieceType::T, 4, 5);

        assert!(state.try_rotate(true));
        assert_eq!(state.active.orientation(), Orientation::East);
        assert!(state.try_rotate(false));
        assert_eq!(state.active.orientation(), Orientation::North);
        assert_eq!((state.active.x(), state.active.y()), (4, 5));
    }

    #[test]
    fn test_rotation_uses_wall_kick_at_left_wall() {
        let mut state = GameState::new(12345);
        // T facing East with its stem in column 0
        let mut piece = Piece::new(PieceType::T, -1, 5);
        piece.set_orientation(Orientation::East);
        assert!(state.board.fits(&piece));
        state.active = piece;

        // East -> North would put a mino in column -1; first kick (+1, 0) fixes it
        assert!(state.try_rotate(false));
        assert_eq!(state.active.orientation(), Orientation::North);
        assert_eq!((state.active.x(), state.active.y()), (0, 5));
    }

    #[test]
    fn test_blocked_rotation_leaves_state_unchanged() {
        let mut state = GameState::new(12345);
        // Box the piece in so that no kick can fit
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                state.board_mut().set(x, y, Some(PieceType::O));
            }
        }
        let piece = Piece::new(PieceType::J, 3, 10);
        for (x, y) in piece.cells() {
            state.board_mut().set(x, y, None);
        }
        state.active = piece;

        assert!(!state.try_rotate(true));
        assert!(!state.try_rotate(false));
        assert_eq!(state.active, piece);
    }

    #[test]
    fn test_o_piece_rotation_keeps_cells() {
        let mut state = GameState::new(12345);
        state.active = Piece::spawn(PieceType::O);
        let before: Vec<_> = state.active.cells().collect();

        assert!(state.try_rotate(true));
        assert_eq!(state.active.orientation(), Orientation::East);
        assert_eq!(state.active.cells().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_ghost_y_on_empty_board() {
        let mut state = GameState::new(12345);
        state.active = Piece::spawn(PieceType::T);
        // T North occupies rows 0..=1 of its box
        assert_eq!(state.ghost_y(), 18);
        assert_eq!(state.active.y(), 0);
    }

    #[test]
    fn test_hard_drop_distance_and_score() {
        let mut state = GameState::new(12345);
        state.active = Piece::new(PieceType::T, 3, 4);

        let distance = state.hard_drop();

        // Bottom mino travels from row 5 to row 19
        assert_eq!(distance, 14);
        assert_eq!(state.score, 2 * 14);
        assert_eq!(state.board.get(4, 19), Some(Some(PieceType::T)));
        assert_eq!(state.board.get(4, 18), Some(Some(PieceType::T)));
        assert_eq!(state.drop_timer, 0.0);
    }

    #[test]
    fn test_line_clear_scores_by_level() {
        for (rows, base) in [(1u32, 40u32), (2, 100), (3, 300), (4, 1200)] {
            for level in [1u32, 3] {
                let mut state = GameState::new(7);
                state.level = level;
                for y in (20 - rows as i8)..20 {
                    fill_row_except(&mut state, y, 9);
                }
                state.active = vertical_i_in_last_column();

                let distance = state.hard_drop();

                assert_eq!(distance, 16);
                assert_eq!(state.lines, rows);
                assert_eq!(state.score, 2 * distance + base * level);
            }
        }
    }

    #[test]
    fn test_level_and_gravity_follow_lines() {
        let mut state = GameState::new(7);
        state.lines = 8;
        fill_row_except(&mut state, 18, 9);
        fill_row_except(&mut state, 19, 9);
        state.active = vertical_i_in_last_column();

        state.hard_drop();

        assert_eq!(state.lines, 10);
        assert_eq!(state.level, 2);
        assert!((state.drop_interval - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_gravity_moves_piece_after_interval() {
        let mut state = GameState::new(12345);
        let y = state.active.y();

        assert!(!state.tick(0.5));
        assert_eq!(state.active.y(), y);
        assert!(state.tick(0.5));
        assert_eq!(state.active.y(), y + 1);
        assert_eq!(state.drop_timer, 0.0);
    }

    #[test]
    fn test_gravity_locks_grounded_piece() {
        let mut state = GameState::new(12345);
        state.active = Piece::spawn(PieceType::O);
        let ghost = state.ghost_y();
        state.active.set_position(3, ghost);
        state.can_hold = false;

        assert!(state.tick(1.0));

        assert_eq!(state.board.get(4, 19), Some(Some(PieceType::O)));
        assert_eq!(state.piece_id, 2);
        assert!(state.can_hold);
    }

    #[test]
    fn test_hold_stashes_then_blocks() {
        let mut state = GameState::new(12345);
        let initial_kind = state.active.kind();
        let next_in_queue = state.preview()[0];

        assert!(state.hold());
        assert_eq!(state.hold, Some(initial_kind));
        assert_eq!(state.active.kind(), next_in_queue);
        assert!(!state.can_hold);

        let before = state.snapshot();
        assert!(!state.hold());
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_hold_swap_resets_orientation_and_position() {
        let mut state = GameState::new(12345);
        let first = state.active.kind();
        state.hold();
        state.hard_drop();
        let second = state.active.kind();

        state.try_move_right();
        state.try_rotate(true);
        let piece_id = state.piece_id;
        assert!(state.hold());

        assert_eq!(state.active, Piece::spawn(first));
        assert_eq!(state.hold, Some(second));
        // Swapping does not draw from the bag
        assert_eq!(state.piece_id, piece_id);
    }

    #[test]
    fn test_hold_available_after_lock() {
        let mut state = GameState::new(12345);
        state.hold();
        assert!(!state.can_hold);

        state.hard_drop();

        assert!(!state.game_over);
        assert!(state.can_hold);
    }

    #[test]
    fn test_game_over_when_spawn_area_blocked() {
        let mut state = GameState::new(12345);
        state.active = Piece::new(PieceType::O, 0, 10);
        for x in 3..=6 {
            for y in 0..=1 {
                state.board_mut().set(x, y, Some(PieceType::I));
            }
        }

        // The piece locks elsewhere and the next spawn collides
        assert!(state.apply_action(GameAction::HardDrop));
        assert!(state.game_over);

        let frozen = state.snapshot();
        for action in GameAction::ALL {
            if action != GameAction::Restart {
                assert!(!state.apply_action(action));
            }
        }
        assert!(!state.tick(10.0));
        assert_eq!(state.snapshot(), frozen);

        assert!(state.apply_action(GameAction::Restart));
        assert!(!state.game_over);
        assert!(state.board.cells().iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn test_direct_calls_are_ignored_after_game_over() {
        let mut state = GameState::new(12345);
        state.active = Piece::new(PieceType::O, 0, 10);
        for x in 3..=6 {
            state.board_mut().set(x, 1, Some(PieceType::I));
        }
        state.hard_drop();
        assert!(state.game_over);
        let frozen = state.snapshot();

        assert!(!state.try_move_left());
        assert!(!state.try_move_right());
        assert!(!state.try_move_down());
        assert!(!state.try_rotate(true));
        assert!(!state.try_rotate(false));
        assert!(!state.hold());
        assert_eq!(state.hard_drop(), 0);

        assert_eq!(state.snapshot(), frozen);
    }

    #[test]
    fn test_hold_swap_into_blocked_spawn_ends_game() {
        let mut state = GameState::new(12345);
        state.hold();
        state.hard_drop();
        for x in 3..=6 {
            state.board_mut().set(x, 1, Some(PieceType::Z));
        }

        state.hold();

        assert!(state.game_over);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = GameState::new(12345);
        state.hold();
        state.hard_drop();
        state.apply_action(GameAction::MoveDown);
        state.level = 4;
        state.lines = 35;

        state.apply_action(GameAction::Restart);

        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.hold, None);
        assert!(state.can_hold);
        assert_eq!(state.episode_id, 1);
        assert_eq!(state.piece_id, 1);
        assert_eq!(state.drop_interval, 1.0);
        assert!(state.board.cells().iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn test_engine_trait_matches_inherent_api() {
        let mut state = GameState::new(99);
        let engine: &mut dyn GameEngine = &mut state;

        engine.apply(GameAction::MoveRight);
        engine.advance(1.0);
        let snap = engine.snapshot();
        assert_eq!(snap.active.x, 4);
        assert_eq!(snap.active.y, 1);

        engine.reset();
        assert_eq!(engine.snapshot().episode_id, 1);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(31);
        state.hold();
        let snap = state.snapshot();

        assert_eq!(snap.hold, state.hold);
        assert!(!snap.can_hold);
        assert_eq!(snap.next, state.preview());
        assert_eq!(snap.ghost_y, state.ghost_y());
        assert_eq!(snap.active.kind, state.active.kind());
        assert_eq!(snap.active.mask, *state.active.mask());
        assert_eq!(snap.board, state.board.to_u8_grid());
    }
}
