use crate::game_state::GameState;
use crate::mv::Move;
use crate::runner::Agent;
use rand::{Rng, RngCore};

/// Uniform random move, but biased towards categories: a purchase if one is
/// available, else a 3-gem collect, else anything else.
pub struct PrunedUniform;

impl Agent for PrunedUniform {
    fn on_setup(&mut self, _state: &GameState, _seat_id: usize) {}

    fn on_turn(&mut self, _state: &GameState, moves: &[Move], rng: &mut dyn RngCore) -> Move {
        let purchase: Vec<&Move> = moves
            .iter()
            .filter(|mv| matches!(mv, Move::Purchase { .. }))
            .collect();
        if !purchase.is_empty() {
            return *purchase[rng.gen_range(0..purchase.len())];
        }

        let collect3: Vec<&Move> = moves
            .iter()
            .filter(|mv| matches!(mv, Move::Collect(gems) if gems.total() >= 3))
            .collect();
        if !collect3.is_empty() {
            return *collect3[rng.gen_range(0..collect3.len())];
        }

        moves[rng.gen_range(0..moves.len())]
    }
}
