use crate::agent::RolloutPolicyKind;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Play,
    Benchmark,
}

/// Command-line surface for the two execution modes: a single watched game
/// between two MCTS agents, or a batch of games across worker threads.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[arg(value_enum, default_value_t = Mode::Play)]
    pub mode: Mode,

    /// Per-turn wall-clock search budget, in seconds.
    #[arg(long, default_value_t = 0.1)]
    pub timeout_seconds: f32,

    /// UCT exploration constant.
    #[arg(long, default_value_t = 0.8)]
    pub upper_confidence_bound: f32,

    /// Playouts aggregated into a single leaf evaluation.
    #[arg(long, default_value_t = 5)]
    pub sims_per_rollout: usize,

    /// Reuse the relevant subtree across turns instead of starting fresh each call.
    #[arg(long, default_value_t = true)]
    pub trace_history: bool,

    /// Print per-turn search diagnostics.
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Playout policy used inside search rollouts.
    #[arg(long, value_enum, default_value_t = RolloutPolicyKind::Smart)]
    pub rollout_policy: RolloutPolicyKind,

    /// Benchmark mode only: number of games to play.
    #[arg(long, default_value_t = 100)]
    pub games: usize,

    /// Benchmark mode only: number of worker threads.
    #[arg(long, default_value_t = 4)]
    pub threads: usize,

    /// Seed for the top-level generator; omit for a nondeterministic run.
    #[arg(long)]
    pub seed: Option<u64>,
}
