
use itertools::Itertools;

use crate::quoridor::prelude::*;

/// A transient what-if view of the board with one extra fence laid on top.
/// The base board is only ever read, so any number of candidate overlays can
/// be scored side by side; the overlay is dropped once scoring is done.
#[derive(Clone, Copy, Debug)]
pub struct Hypothetical<'a> {
    base: &'a Board,
    placing: FencePlacing,
}

impl<'a> Hypothetical<'a> {
    /// Lays a candidate placing over a board.
    pub fn new(base: &'a Board, placing: FencePlacing) -> Hypothetical<'a> {
        Hypothetical { base, placing }
    }
}

impl Topology for Hypothetical<'_> {
    fn open(&self, from: &Coord, to: &Coord) -> bool {
        self.base.open(from, to) && !self.placing.severs(from, to)
    }
}

/// The per-player change in shortest-route length a candidate fence would
/// cause, measured in hops: positive lengthens, negative shortens (which a
/// fence alone never does), zero leaves the route untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Impact {
    deltas: [i64; 2],
}

impl Impact {
    /// The delta for one player.
    pub fn of(&self, player: Player) -> i64 {
        self.deltas[player.index()]
    }

    /// Whether the candidate changes nothing for anybody.
    pub fn is_zero(&self) -> bool {
        self.deltas.iter().all(|&delta| delta == 0)
    }

    /// Collapses the mapping into a single score from one bot's chair:
    /// opponents' lost ground counts for it, its own counts against it.
    pub fn global(&self, bot: Player) -> i64 {
        Player::all()
            .iter()
            .map(|&player| {
                if player == bot { -self.of(player) } else { self.of(player) }
            })
            .sum()
    }

    /// Notates the mapping player by player.
    pub fn notate(&self) -> String {
        Player::all()
            .iter()
            .map(|&player| format!("{} {:+}", player.notate(), self.of(player)))
            .join("; ")
    }
}

impl Board {
    /// Whether placing this fence would leave any pawn with no route to its
    /// goal row. Evaluated against the current state; the board itself is
    /// never touched.
    pub fn is_fence_blocking(&self, placing: FencePlacing) -> bool {
        let overlay = Hypothetical::new(self, placing);
        Player::all().iter().any(|&player| {
            compute_route(&overlay, self.pawn(player), &player.goals(), Search::BreadthFirst).is_none()
        })
    }

    /// Scores a candidate fence: how much longer each pawn's shortest route
    /// becomes if the fence lands. Returns None when the placing is blocking,
    /// so a caller can never read an impact off a placement it must not play.
    /// Repeated calls on the same position return the same mapping.
    pub fn fence_impact(&self, placing: FencePlacing) -> Option<Impact> {
        let overlay = Hypothetical::new(self, placing);
        let mut deltas = [0i64; 2];
        for player in Player::all() {
            let hypothetical = compute_route(&overlay, self.pawn(player), &player.goals(), Search::AStar)?;
            let current = compute_route(self, self.pawn(player), &player.goals(), Search::AStar)?;
            deltas[player.index()] = hypothetical.len() as i64 - current.len() as i64;
        }
        Some(Impact { deltas })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fence(s: &str) -> FencePlacing {
        let Action::Fence(placing) = s.parse::<MoveString>().unwrap().action else {
            panic!("expected fence notation, got {s}");
        };
        placing
    }

    #[test]
    fn centre_fence_detours_both_pawns_by_one() {
        let board = Board::new();
        let impact = board.fence_impact(fence("h33")).unwrap();

        // Both routes run down the centre column; the cheapest detour around
        // a fence covering columns 3 and 4 crosses at column 5.
        assert_eq!(impact.of(Player::White), 1);
        assert_eq!(impact.of(Player::Black), 1);
        assert_eq!(impact.global(Player::White), 0);
        assert_eq!(impact.global(Player::Black), 0);
    }

    #[test]
    fn far_corner_fence_touches_nobody() {
        let board = Board::new();
        let impact = board.fence_impact(fence("h00")).unwrap();
        assert!(impact.is_zero());
    }

    #[test]
    fn closing_the_last_gap_is_blocking() {
        let mut board = Board::new();
        board.play_unchecked_engine(Action::Fence(fence("h73")));
        board.play_unchecked_engine(Action::Fence(fence("v72")));

        let gap = fence("v74");
        assert!(board.is_fence_blocking(gap));
        assert_eq!(board.fence_impact(gap), None);

        // The wall one square wider leaves the pocket open on the right.
        assert!(!board.is_fence_blocking(fence("v75")));
    }

    #[test]
    fn duplicate_of_a_placed_fence_changes_nothing() {
        let mut board = Board::new();
        board.play_unchecked_engine(Action::Fence(fence("h33")));

        let impact = board.fence_impact(fence("h33")).unwrap();
        assert!(impact.is_zero());
    }

    #[test]
    fn evaluation_is_deterministic_and_leaves_the_board_alone() {
        let mut board = Board::new();
        board.play_unchecked_engine(Action::Fence(fence("h42")));
        let before = board.notate();

        let first = board.fence_impact(fence("h35"));
        let second = board.fence_impact(fence("h35"));
        assert_eq!(first, second);
        assert_eq!(board.notate(), before);
    }

    #[test]
    fn one_sided_fence_scores_for_the_other_player() {
        let mut board = Board::new();
        board.set_pawn_unchecked_engine(Player::Black, Coord::new(0, 0));

        // A fence under the cornered Black pawn forces only Black around it:
        // White's straight run down the centre column never sees it.
        let impact = board.fence_impact(fence("h00")).unwrap();
        assert_eq!(impact.of(Player::White), 0);
        assert_eq!(impact.of(Player::Black), 2);
        assert_eq!(impact.global(Player::White), 2);
        assert_eq!(impact.global(Player::Black), -2);
    }
}
