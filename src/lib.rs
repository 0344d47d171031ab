//! SRS Tetris (workspace facade crate).
//!
//! Re-exports the rules engine as `srs_tetris::{core, types}` while the
//! implementation lives in dedicated crates under `crates/`. The `config`
//! module holds the headless driver's settings.

pub mod config;

pub use srs_tetris_core as core;
pub use srs_tetris_types as types;
