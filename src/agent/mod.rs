mod builder;
mod runner;
mod tally;

use rand::{rngs::SmallRng, Rng, SeedableRng};

pub use builder::{best_defensible_placing, BuilderBot};
pub use runner::RunnerBot;
pub use tally::{Tallied, Tally};

use crate::quoridor::prelude::*;

/// A per-bot decision strategy: asked for exactly one action each turn, and
/// never allowed to touch the board itself.
pub trait Policy {
    fn name(&self) -> &'static str;
    fn choose(&mut self, board: &Board) -> Action;
}

pub enum WhichPolicy {
    Runner,
    Builder,
}

pub struct AgentConfig {
    /// Roughly one turn in this many, the bot reaches for a fence before its
    /// pawn. Zero keeps the fences in the bag for good.
    pub fence_odds: u32,

    /// How many resamples a bot spends hunting for a non-stranding fence.
    pub place_attempts: usize,

    /// Seeds the bot's randomness when set, so runs can be replayed.
    pub seed: Option<u64>,

    pub selected: WhichPolicy,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            fence_odds: 3,
            place_attempts: 5,
            seed: None,
            selected: WhichPolicy::Runner,
        }
    }
}

impl AgentConfig {
    /// Gets the default configuration.
    pub fn new() -> AgentConfig {
        AgentConfig::default()
    }

    /// Produces an agent.
    pub fn get_agent(&self) -> Box<dyn Policy> {
        match self.selected {
            WhichPolicy::Runner  => Box::new(RunnerBot::new(self)),
            WhichPolicy::Builder => Box::new(BuilderBot::new(self)),
        }
    }

    /// Builds the bot's randomness source, seeded if the config asks for it.
    pub(crate) fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None       => SmallRng::from_entropy(),
        }
    }
}

/// Rolls the shared fence-or-pawn die: `true` roughly once per `odds` calls.
pub(crate) fn wants_fence(rng: &mut SmallRng, odds: u32) -> bool {
    odds > 0 && rng.gen_range(0..odds) == 0
}

/// Steps the pawn onto a uniformly random legal destination.
pub(crate) fn random_pawn_move(board: &Board, player: Player, rng: &mut SmallRng) -> Action {
    let destinations = board.valid_pawn_moves(player);
    Action::Move(destinations[rng.gen_range(0..destinations.len())])
}

/// Samples legal placings until one that strands nobody turns up, or the
/// attempt budget runs dry. Never returns a blocking placing.
pub(crate) fn random_nonblocking_fence(board: &Board, rng: &mut SmallRng, budget: usize) -> Option<FencePlacing> {
    let placings = board.valid_fence_placings();
    if placings.is_empty() {
        return None;
    }

    let mut attempts = budget;
    let mut placing = sample_placing(placings, rng);
    while board.is_fence_blocking(placing) && attempts > 0 {
        placing = sample_placing(placings, rng);
        attempts -= 1;
    }
    // The loop only ends with attempts to spare once it holds a safe placing.
    (attempts > 0).then_some(placing)
}

fn sample_placing(placings: &FenceSet, rng: &mut SmallRng) -> FencePlacing {
    let pick = rng.gen_range(0..placings.len());
    FencePlacing::from_id(placings.iter().nth(pick).unwrap())
}
