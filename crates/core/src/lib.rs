//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation
//! logic. It has no dependencies on rendering, input devices or I/O: drivers
//! feed it simulation time and actions through [`GameEngine`] and read back a
//! [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`shapes`]: 4x4 occupancy masks for every piece and orientation
//! - [`piece`]: the active piece (type, orientation, position)
//! - [`board`]: 10x20 grid with collision checks, locking and row clears
//! - [`rng`]: seeded 7-bag generator with a two-piece preview
//! - [`rotation`]: SRS wall kick tables and kicked rotation
//! - [`scoring`]: line clear points, drop bonuses, levels and gravity
//! - [`game_state`]: the state machine tying it all together
//! - [`snapshot`]: read model for drivers
//! - [`engine`]: driver-facing trait
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every run of 7 draws aligned to a bag holds each piece once
//! - **SRS Rotation**: five kick tests per rotation, a single null test for O
//! - **Ghost Piece**: the row a hard drop would land on
//! - **Hold**: one stash per lock
//! - **Scoring**: 40/100/300/1200 times level, +1 per soft drop row, +2 per hard drop row
//!
//! # Example
//!
//! ```
//! use srs_tetris_core::{GameEngine, GameState};
//! use srs_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply(GameAction::MoveRight);
//! game.apply(GameAction::RotateCw);
//! game.apply(GameAction::HardDrop);
//!
//! // Hard drop awards points
//! assert!(game.score() > 0);
//! ```
//!
//! # Timing
//!
//! Gravity runs on simulation seconds. Call
//! [`GameState::tick`](game_state::GameState::tick) (or
//! [`GameEngine::advance`]) with the elapsed time; once the accumulated time
//! reaches the level's drop interval the piece moves down one row, or locks
//! if it cannot.

pub mod board;
pub mod engine;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use srs_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, U8Grid};
pub use engine::GameEngine;
pub use game_state::GameState;
pub use piece::Piece;
pub use rng::{BagGenerator, PieceRng, SimpleRng};
pub use rotation::{try_rotate, wall_kicks, KickList};
pub use scoring::{calculate_drop_score, calculate_level, calculate_line_score, drop_interval_secs};
pub use shapes::{get_shape, shape_of, ShapeMask};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
