use crate::game_state::GameState;
use crate::mv::Move;
use log::info;
use rand::RngCore;

/// Setup + per-turn decision contract. The state passed to `on_turn` is the
/// actual observer state for the seat about to move; `moves` is always
/// `state.get_moves()` computed by the caller.
pub trait Agent {
    fn on_setup(&mut self, state: &GameState, seat_id: usize);
    fn on_turn(&mut self, state: &GameState, moves: &[Move], rng: &mut dyn RngCore) -> Move;
}

/// Observer notified before and after every move. The terminal renderer
/// implements this; nothing else in the core does.
pub trait View {
    fn show_state(&mut self, state: &GameState);
    fn show_turn(&mut self, state: &GameState, mv: &Move, seat: usize);
}

/// Resolves a seat index to the agent that should act for it. Two flavors:
/// two independently owned agents (human vs bot, bot vs bot), or one shared
/// agent playing both seats (MCTS rollouts against itself).
pub trait AgentPair {
    fn agent_mut(&mut self, seat: usize) -> &mut dyn Agent;
}

pub struct TwoAgents<'a>(pub &'a mut dyn Agent, pub &'a mut dyn Agent);

impl<'a> AgentPair for TwoAgents<'a> {
    fn agent_mut(&mut self, seat: usize) -> &mut dyn Agent {
        if seat == 0 {
            &mut *self.0
        } else {
            &mut *self.1
        }
    }
}

pub struct SelfPlay<'a>(pub &'a mut dyn Agent);

impl<'a> AgentPair for SelfPlay<'a> {
    fn agent_mut(&mut self, _seat: usize) -> &mut dyn Agent {
        &mut *self.0
    }
}

/// Drives one game to completion, alternating agents and notifying views.
#[derive(Default)]
pub struct Runner<'v> {
    views: Vec<&'v mut dyn View>,
}

impl<'v> Runner<'v> {
    pub fn new() -> Runner<'v> {
        Runner { views: Vec::new() }
    }

    pub fn add_view(&mut self, view: &'v mut dyn View) {
        self.views.push(view);
    }

    pub fn run_game(
        &mut self,
        state: &mut GameState,
        agents: &mut dyn AgentPair,
        rng: &mut dyn RngCore,
    ) -> Option<usize> {
        for seat in 0..2 {
            agents.agent_mut(seat).on_setup(state, seat);
        }

        while !state.is_terminal() {
            for view in self.views.iter_mut() {
                view.show_state(state);
            }

            let mover = state.next_player();
            let moves = state.get_moves();
            let mv = agents.agent_mut(mover).on_turn(state, &moves, rng);

            for view in self.views.iter_mut() {
                view.show_turn(state, &mv, mover);
            }
            info!("player {} played {:?}", mover + 1, mv);

            state.do_move(&mv, rng);
        }

        let winner = state.winner();
        info!("game finished, winner: {:?}", winner);
        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Uniform;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn self_play_between_uniform_agents_reaches_a_terminal_state() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut state = GameState::new(&mut rng);
        let mut uniform = Uniform;
        let mut runner = Runner::new();
        let winner = runner.run_game(&mut state, &mut SelfPlay(&mut uniform), &mut rng);
        assert!(state.is_terminal());
        assert!(winner.is_none() || winner == Some(0) || winner == Some(1));
    }
}
