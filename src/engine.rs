//! Stateful wrapper over the pure tick functions.

use rand::Rng;

use crate::clock::Clock;
use crate::compute;
use crate::config::Playfield;
use crate::entities::{GameEvent, GameState, GameStatus, InputSnapshot};

/// Owns the game state together with its randomness and time sources.
///
/// Driven from one thread: call [`Engine::advance`] once per frame, then
/// render [`Engine::state`].
pub struct Engine<R, C> {
    state: GameState,
    rng: R,
    clock: C,
}

impl<R: Rng, C: Clock> Engine<R, C> {
    pub fn new(playfield: Playfield, rng: R, clock: C) -> Self {
        log::debug!(
            "engine created for a {}x{} playfield",
            playfield.width(),
            playfield.height()
        );
        Self {
            state: compute::init_state(playfield),
            rng,
            clock,
        }
    }

    /// Run one tick with the given held actions and return the new state.
    pub fn advance(&mut self, input: &InputSnapshot) -> &GameState {
        let now = self.clock.now_ms();
        self.state = compute::advance(&self.state, input, now, &mut self.rng);
        &self.state
    }

    /// Reset every piece of session state, keeping the playfield.
    pub fn restart(&mut self) {
        self.state = compute::restart(&self.state);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events raised by the last `advance` or `restart`.
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    pub fn is_over(&self) -> bool {
        self.state.status == GameStatus::GameOver
    }
}
