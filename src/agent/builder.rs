use rand::rngs::SmallRng;

use super::{random_nonblocking_fence, random_pawn_move, wants_fence, AgentConfig, Policy};
use crate::quoridor::prelude::*;

/// Spends its fences where they hurt: every candidate placing is scored by
/// how it shifts the players' shortest routes, and only a placing that beats
/// the strongest rival candidate gets played. Pawn movement is left to
/// chance.
pub struct BuilderBot {
    rng: SmallRng,
    fence_odds: u32,
    place_attempts: usize,
}

impl BuilderBot {
    pub fn new(config: &AgentConfig) -> BuilderBot {
        BuilderBot {
            rng: config.rng(),
            fence_odds: config.fence_odds,
            place_attempts: config.place_attempts,
        }
    }

    /// Picks this turn's fence. Blocking candidates never make the scored
    /// list; if no candidate defends its score, fall back to a random safe
    /// placing, and failing that, to the pawn.
    fn place_fence(&mut self, board: &Board, me: Player) -> Action {
        let scored: Vec<(FencePlacing, i64)> = board
            .valid_fence_placings()
            .iter()
            .map(FencePlacing::from_id)
            .filter_map(|placing| board.fence_impact(placing).map(|impact| (placing, impact.global(me))))
            .collect();

        if let Some(placing) = best_defensible_placing(&scored) {
            log::debug!("{} picked fence {} from {} scored candidates", me.notate(), placing.notate(), scored.len());
            return Action::Fence(placing);
        }

        match random_nonblocking_fence(board, &mut self.rng, 2 * self.place_attempts) {
            Some(placing) => Action::Fence(placing),
            None          => random_pawn_move(board, me, &mut self.rng),
        }
    }
}

impl Policy for BuilderBot {
    fn name(&self) -> &'static str {
        "builder"
    }

    fn choose(&mut self, board: &Board) -> Action {
        let me = board.player_to_move();

        if wants_fence(&mut self.rng, self.fence_odds)
            && board.fences_left(me) > 0
            && !board.valid_fence_placings().is_empty()
        {
            return self.place_fence(board, me);
        }

        random_pawn_move(board, me, &mut self.rng)
    }
}

/// Weighs each candidate against the strongest rival on the same list:
/// `score(f) = global(f) - min over g != f of global(g)`. The winner is the
/// candidate whose advantage holds up against the best alternative this turn,
/// and it is only worth playing when that score is positive. Ties keep the
/// earliest candidate, so the choice is deterministic.
pub fn best_defensible_placing(candidates: &[(FencePlacing, i64)]) -> Option<FencePlacing> {
    let mut best: Option<(FencePlacing, i64)> = None;
    for (index, &(placing, global)) in candidates.iter().enumerate() {
        let rival_floor = candidates
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != index)
            .map(|(_, &(_, rival))| rival)
            .min()
            .unwrap_or(0);
        let score = global - rival_floor;
        if best.map_or(true, |(_, held)| score > held) {
            best = Some((placing, score));
        }
    }
    best.filter(|&(_, score)| score > 0).map(|(placing, _)| placing)
}
