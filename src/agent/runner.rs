use rand::rngs::SmallRng;

use super::{random_nonblocking_fence, random_pawn_move, wants_fence, AgentConfig, Policy};
use crate::quoridor::prelude::*;

/// Races its pawn along the goal-directed shortest route, spending the
/// occasional fence on a random safe placing along the way.
pub struct RunnerBot {
    rng: SmallRng,
    fence_odds: u32,
    place_attempts: usize,
}

impl RunnerBot {
    pub fn new(config: &AgentConfig) -> RunnerBot {
        RunnerBot {
            rng: config.rng(),
            fence_odds: config.fence_odds,
            place_attempts: config.place_attempts,
        }
    }
}

impl Policy for RunnerBot {
    fn name(&self) -> &'static str {
        "runner"
    }

    fn choose(&mut self, board: &Board) -> Action {
        let me = board.player_to_move();

        if wants_fence(&mut self.rng, self.fence_odds)
            && board.fences_left(me) > 0
            && !board.valid_fence_placings().is_empty()
        {
            if let Some(placing) = random_nonblocking_fence(board, &mut self.rng, self.place_attempts) {
                return Action::Fence(placing);
            }
        }

        // Walk the route when it has a playable first step; the step is only
        // unplayable when the enemy pawn sits on it, and a random legal move
        // (which includes the jumps) covers that.
        match board.route_for(me, Search::AStar) {
            Some(route) => match route.first_step() {
                Some(step) if board.valid_pawn_moves(me).contains(step) => Action::Move(*step),
                _ => random_pawn_move(board, me, &mut self.rng),
            },
            None => random_pawn_move(board, me, &mut self.rng),
        }
    }
}
