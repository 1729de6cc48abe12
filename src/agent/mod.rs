mod console;
mod pruned;
mod smart;
mod uniform;

pub use console::ConsolePlayer;
pub use pruned::PrunedUniform;
pub use smart::{Smart, SmartOptions};
pub use uniform::Uniform;

use crate::runner::Agent;
use clap::ValueEnum;

/// Compile-time choice of playout policy for a CLI-driven binary, rather
/// than a runtime factory closure: the set of policies is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RolloutPolicyKind {
    Uniform,
    PrunedUniform,
    Smart,
}

impl RolloutPolicyKind {
    pub fn make_agent(self) -> Box<dyn Agent> {
        match self {
            RolloutPolicyKind::Uniform => Box::new(Uniform),
            RolloutPolicyKind::PrunedUniform => Box::new(PrunedUniform),
            RolloutPolicyKind::Smart => Box::new(Smart::new(SmartOptions::default())),
        }
    }
}

impl Default for RolloutPolicyKind {
    fn default() -> Self {
        RolloutPolicyKind::Smart
    }
}

/// Sample one weighted index with a classical cumulative-weight draw over
/// nonnegative integer weights.
pub(crate) fn weighted_sample(weights: &[u64], rng: &mut dyn rand::RngCore) -> usize {
    use rand::Rng;
    let total: u64 = weights.iter().sum();
    debug_assert!(total > 0, "weighted_sample called with all-zero weights");
    let mut target = rng.gen_range(0..total);
    for (idx, &weight) in weights.iter().enumerate() {
        if target < weight {
            return idx;
        }
        target -= weight;
    }
    unreachable!("cumulative weight draw fell off the end")
}
