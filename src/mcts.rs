use crate::agent::RolloutPolicyKind;
use crate::game_state::GameState;
use crate::mv::Move;
use crate::runner::{Agent, Runner, SelfPlay};
use log::debug;
use rand::{Rng, RngCore};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct MctsOptions {
    pub timeout_seconds: f32,
    pub upper_confidence_bound: f32,
    pub trace_history: bool,
    pub debug: bool,
    pub sims_per_rollout: usize,
    pub rollout_policy: RolloutPolicyKind,
}

impl Default for MctsOptions {
    fn default() -> MctsOptions {
        MctsOptions {
            timeout_seconds: 0.1,
            upper_confidence_bound: 0.8,
            trace_history: true,
            debug: false,
            sims_per_rollout: 5,
            rollout_policy: RolloutPolicyKind::Smart,
        }
    }
}

/// A move considered from some `StateNode`: its aggregate visit count and
/// score, the number of rollouts under which it was legal (the UCT
/// exploration denominator), and the determinized outcomes it has led to so
/// far. Stochastic moves (reveal-triggering Purchase/Reserve) can have more
/// than one child; deterministic moves (Collect/Return/Noble) have at most one.
struct MoveNode {
    chosen: Move,
    rollout_count: u64,
    score: i64,
    available_count: u64,
    children: Vec<StateNode>,
}

impl MoveNode {
    fn new(chosen: Move) -> MoveNode {
        MoveNode {
            chosen,
            rollout_count: 0,
            score: 0,
            available_count: 0,
            children: Vec::new(),
        }
    }

    fn mean(&self) -> f64 {
        self.score as f64 / self.rollout_count as f64
    }

    /// Applies `chosen` to `start`, reusing an existing child with an equal
    /// resulting state when one exists, and returns its index.
    fn trace_or_create(&mut self, start: &GameState, rng: &mut dyn RngCore, searching_player: usize) -> usize {
        let deterministic = matches!(self.chosen, Move::Collect(_) | Move::Return(_) | Move::Noble(_));
        if deterministic && !self.children.is_empty() {
            return 0;
        }

        let mut next = start.clone();
        next.do_move(&self.chosen, rng);

        if deterministic {
            self.children.push(StateNode::new(next));
            return 0;
        }

        let masked = next.mask(searching_player);
        if let Some(idx) = self.children.iter().position(|c| c.state == masked) {
            return idx;
        }
        self.children.push(StateNode::new(masked));
        self.children.len() - 1
    }
}

/// A position in the tree: the owning `GameState`, a per-StateNode
/// `MoveNodeSet` (all moves ever seen here, upserted by move equality so
/// their statistics persist across re-determinizations), and the transient
/// partition of that set into `unexplored` and `children` rebuilt fresh by
/// every `init_rollout`.
struct StateNode {
    state: GameState,
    rollout_count: u64,
    score: i64,
    move_nodes: Vec<MoveNode>,
    determinized: Option<GameState>,
    children: Vec<usize>,
    unexplored: Vec<usize>,
}

impl StateNode {
    fn new(state: GameState) -> StateNode {
        StateNode {
            state,
            rollout_count: 0,
            score: 0,
            move_nodes: Vec::new(),
            determinized: None,
            children: Vec::new(),
            unexplored: Vec::new(),
        }
    }

    fn upsert_move(&mut self, mv: &Move) -> usize {
        if let Some(pos) = self.move_nodes.iter().position(|m| &m.chosen == mv) {
            return pos;
        }
        self.move_nodes.push(MoveNode::new(*mv));
        self.move_nodes.len() - 1
    }

    fn init_rollout(&mut self, rng: &mut dyn RngCore) {
        self.children.clear();
        self.unexplored.clear();

        let mut determinized = self.state.clone();
        determinized.determinize(rng);
        let moves = determinized.get_moves();

        for mv in &moves {
            let idx = self.upsert_move(mv);
            self.move_nodes[idx].available_count += 1;
            if self.move_nodes[idx].rollout_count == 0 {
                self.unexplored.push(idx);
            } else {
                self.children.push(idx);
            }
        }
        self.determinized = Some(determinized);
    }

    fn select_best_child(&self, searching_player: usize, exploration: f32) -> usize {
        let factor: f64 = if self.determinized.as_ref().unwrap().next_player() == searching_player {
            1.0
        } else {
            -1.0
        };

        let mut best_idx = self.children[0];
        let mut best_value = f64::NEG_INFINITY;
        for &idx in &self.children {
            let node = &self.move_nodes[idx];
            debug_assert!(node.rollout_count > 0, "a child offered to Select must have been visited");
            let exploit = factor * node.score as f64 / node.rollout_count as f64;
            let explore = ((exploration as f64) * (node.available_count as f64).ln() / node.rollout_count as f64).sqrt();
            let value = exploit + explore;
            if value > best_value {
                best_value = value;
                best_idx = idx;
            }
        }
        best_idx
    }
}

/// Determinized IS-MCTS over `GameState`: grows a tree of alternating
/// `StateNode`/`MoveNode` layers under a wall-clock budget, re-determinizing
/// every visited `StateNode` so selection always reflects a fresh sample of
/// hidden information, then returns the root's highest mean-score move.
pub struct MonteCarloTreeSearch {
    player_id: usize,
    options: MctsOptions,
    rollout_agent: Box<dyn Agent>,
    previous_move: Option<MoveNode>,
}

impl MonteCarloTreeSearch {
    pub fn new(options: MctsOptions) -> MonteCarloTreeSearch {
        let rollout_agent = options.rollout_policy.make_agent();
        MonteCarloTreeSearch {
            player_id: 0,
            options,
            rollout_agent,
            previous_move: None,
        }
    }

    fn check_limit(&self, start: Instant) -> bool {
        start.elapsed().as_secs_f32() >= self.options.timeout_seconds
    }

    fn score(&self, winner: Option<usize>) -> i64 {
        match winner {
            None => 0,
            Some(seat) if seat == self.player_id => 1,
            Some(_) => -1,
        }
    }

    fn simulate(&mut self, state: &GameState, rng: &mut dyn RngCore) -> i64 {
        let mut local = state.clone();
        local.determinize(rng);
        let mut runner = Runner::new();
        let winner = runner.run_game(&mut local, &mut SelfPlay(&mut *self.rollout_agent), rng);
        self.score(winner)
    }

    fn heuristic(&mut self, leaf: &GameState, rng: &mut dyn RngCore) -> i64 {
        let mut total = 0i64;
        for _ in 0..self.options.sims_per_rollout {
            total += self.simulate(leaf, rng);
        }
        total
    }

    /// Re-determinizes `node`, then either expands one unexplored move,
    /// descends into the best explored child by UCT, or (a fully explored
    /// terminal) evaluates `node` itself. Returns the score to back up.
    fn rollout(&mut self, node: &mut StateNode, rng: &mut dyn RngCore, depth: usize) -> i64 {
        node.init_rollout(rng);
        let sims = self.options.sims_per_rollout as u64;

        if self.options.debug {
            debug!("mcts rollout depth {depth}: {} unexplored, {} children", node.unexplored.len(), node.children.len());
        }

        let score = if !node.unexplored.is_empty() {
            let pick = rng.gen_range(0..node.unexplored.len());
            let move_idx = node.unexplored.swap_remove(pick);
            node.children.push(move_idx);

            let determinized = node.determinized.as_ref().unwrap().clone();
            let child_idx = node.move_nodes[move_idx].trace_or_create(&determinized, rng, self.player_id);
            node.move_nodes[move_idx].children[child_idx].init_rollout(rng);
            let leaf_state = node.move_nodes[move_idx].children[child_idx].state.clone();

            let s = self.heuristic(&leaf_state, rng);

            let child = &mut node.move_nodes[move_idx].children[child_idx];
            child.rollout_count += sims;
            child.score += s;

            node.move_nodes[move_idx].rollout_count += sims;
            node.move_nodes[move_idx].score += s;
            s
        } else if !node.children.is_empty() {
            let move_idx = node.select_best_child(self.player_id, self.options.upper_confidence_bound);
            let determinized = node.determinized.as_ref().unwrap().clone();
            let child_idx = node.move_nodes[move_idx].trace_or_create(&determinized, rng, self.player_id);

            let s = {
                let child = &mut node.move_nodes[move_idx].children[child_idx];
                self.rollout(child, rng, depth + 1)
            };

            node.move_nodes[move_idx].rollout_count += sims;
            node.move_nodes[move_idx].score += s;
            s
        } else {
            debug_assert!(
                node.determinized.as_ref().unwrap().is_terminal(),
                "a state with no legal moves must be terminal"
            );
            let leaf_state = node.state.clone();
            self.heuristic(&leaf_state, rng)
        };

        node.rollout_count += sims;
        node.score += score;
        score
    }

    /// Re-anchors the search tree on the actual observed state, one or two
    /// levels below the previously retained move, or starts fresh.
    fn track_actual_action(&mut self, actual: &GameState, rng: &mut dyn RngCore) -> Option<StateNode> {
        if !self.options.trace_history {
            self.previous_move = None;
            return None;
        }

        let mut prev = self.previous_move.take()?;

        if let Some(pos) = prev.children.iter().position(|c| &c.state == actual) {
            return Some(prev.children.swap_remove(pos));
        }

        for mut state1 in std::mem::take(&mut prev.children) {
            state1.init_rollout(rng);
            let candidates: Vec<usize> = state1.children.clone();
            for move_idx in candidates {
                if let Some(pos) = state1.move_nodes[move_idx].children.iter().position(|c| &c.state == actual) {
                    return Some(state1.move_nodes[move_idx].children.swap_remove(pos));
                }
            }
        }

        None
    }
}

impl Agent for MonteCarloTreeSearch {
    fn on_setup(&mut self, _state: &GameState, seat_id: usize) {
        self.player_id = seat_id;
        self.previous_move = None;
    }

    fn on_turn(&mut self, state: &GameState, _moves: &[Move], rng: &mut dyn RngCore) -> Move {
        let start = Instant::now();

        let mut root = self
            .track_actual_action(state, rng)
            .unwrap_or_else(|| StateNode::new(state.clone()));

        loop {
            self.rollout(&mut root, rng, 0);
            if self.check_limit(start) {
                break;
            }
        }

        debug_assert!(!root.children.is_empty(), "search produced no root children");

        let mut best_idx = root.children[0];
        let mut best_mean = f64::NEG_INFINITY;
        for &idx in &root.children {
            let mean = root.move_nodes[idx].mean();
            if mean > best_mean {
                best_mean = mean;
                best_idx = idx;
            }
        }

        debug!(
            "player {} rollouts: {} mcts chose {:?} (mean {:.5}, {} visits)",
            self.player_id + 1,
            root.rollout_count,
            root.move_nodes[best_idx].chosen,
            best_mean,
            root.move_nodes[best_idx].rollout_count
        );

        let chosen = root.move_nodes[best_idx].chosen;
        self.previous_move = Some(root.move_nodes.remove(best_idx));
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn mcts_returns_a_legal_move_quickly() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = GameState::new(&mut rng);
        let legal = state.get_moves();

        let mut options = MctsOptions::default();
        options.timeout_seconds = 0.05;
        options.sims_per_rollout = 1;
        let mut mcts = MonteCarloTreeSearch::new(options);
        mcts.on_setup(&state, state.next_player());

        let chosen = mcts.on_turn(&state, &legal, &mut rng);
        assert!(legal.contains(&chosen));
    }
}
