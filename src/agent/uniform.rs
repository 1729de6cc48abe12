use crate::game_state::GameState;
use crate::mv::Move;
use crate::runner::Agent;
use rand::{Rng, RngCore};

/// Picks a uniformly random legal move.
pub struct Uniform;

impl Agent for Uniform {
    fn on_setup(&mut self, _state: &GameState, _seat_id: usize) {}

    fn on_turn(&mut self, _state: &GameState, moves: &[Move], rng: &mut dyn RngCore) -> Move {
        moves[rng.gen_range(0..moves.len())]
    }
}
