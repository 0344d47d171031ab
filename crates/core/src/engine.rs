//! Driver-facing engine interface
//!
//! Drivers (test harnesses, headless simulators, rendering front-ends) talk to
//! the rules engine only through this trait.

use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

pub trait GameEngine {
    /// Advance gravity by `delta_secs` of simulation time
    fn advance(&mut self, delta_secs: f32);

    /// Apply one discrete player action
    fn apply(&mut self, action: GameAction);

    /// Read-only projection of everything a renderer may show
    fn snapshot(&self) -> GameSnapshot;

    /// Start a new session, same as [`GameAction::Restart`]
    fn reset(&mut self);
}
