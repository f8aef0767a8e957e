pub(crate) mod moves;
pub(crate) mod pretty;
pub(crate) mod walls;

use itertools::Itertools;

use super::prelude::*;

/// The full game state: two pawns, their fence budgets, and every wall on the
/// grid. The board is the only owner of wall state; route searches and impact
/// scoring read it through the Topology trait and never write back.
#[derive(Clone, Debug)]
pub struct Board {
    /// Where each pawn stands, indexed by player.
    pawns: [Coord; 2],

    /// How many fences each player may still place.
    fences_left: [usize; 2],

    /// The fences on the board, by dense placing id.
    placed: FenceSet,

    /// The placings still geometrically available: in bounds, not overlapping
    /// and not crossing anything placed. Blocking placings stay in this set;
    /// whether a placing strands a pawn is evaluated per candidate, because
    /// it depends on where the pawns stand.
    valid_placings: FenceSet,

    /// Cells whose southern edge is severed by a fence.
    blocked_south: CoordSet,

    /// Cells whose eastern edge is severed by a fence.
    blocked_east: CoordSet,

    /// Store the player to move explicitly rather than by history parity, so
    /// engine-only mutations cannot desynchronize it.
    player_to_move: Player,

    /// The linear history of this game.
    history: Vec<Action>,
}

impl Board {
    /// Returns a new board in the fixed starting position.
    pub fn new() -> Board {
        Board {
            pawns: [Player::White.start(), Player::Black.start()],
            fences_left: [FENCES_PER_PLAYER; 2],
            placed: FenceSet::default(),
            valid_placings: (0..NUM_PLACINGS).collect(),
            blocked_south: CoordSet::default(),
            blocked_east: CoordSet::default(),
            player_to_move: Player::White,
            history: vec![],
        }
    }

    /// How many fences a player still holds.
    pub fn fences_left(&self, player: Player) -> usize {
        self.fences_left[player.index()]
    }

    /// The linear history of this game.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Returns the full gamestring for this board: its actions in play order,
    /// or "-" before the first one.
    pub fn notate(&self) -> String {
        if self.history.is_empty() {
            "-".into()
        } else {
            self.history.iter().map(|action| action.notate()).join(";")
        }
    }

    /// Where a player's pawn stands.
    pub fn pawn(&self, player: Player) -> &Coord {
        &self.pawns[player.index()]
    }

    /// Plays an action on this board, if valid.
    pub fn play(&mut self, action: Action) -> Result<()> {
        if self.winner().is_some() {
            return Err(anyhow!("the game is already decided"));
        }
        match action {
            Action::Move(to) => {
                if !self.valid_pawn_moves(self.player_to_move).contains(&to) {
                    return Err(anyhow!("pawn move {} is not valid in this position", to.notate()));
                }
            },
            Action::Fence(placing) => {
                if !placing.in_bounds() {
                    return Err(anyhow!("fence anchor {} is off the board", placing.anchor.notate()));
                }
                if self.fences_left(self.player_to_move) == 0 {
                    return Err(anyhow!("{} has no fences left", self.player_to_move.notate()));
                }
                if !self.valid_placings.contains(&placing.id()) {
                    return Err(anyhow!("fence {} overlaps or crosses a placed fence", placing.notate()));
                }
                if self.is_fence_blocking(placing) {
                    return Err(anyhow!("fence {} would strand a pawn", placing.notate()));
                }
            }
        };
        self.apply(action);
        Ok(())
    }

    /// Plays an action with no checks; engine use only.
    pub fn play_unchecked_engine(&mut self, action: Action) -> () {
        self.apply(action);
    }

    /// The player whose turn it is.
    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    /// The shortest route from a player's pawn to its goal row under the
    /// current walls, by the requested search.
    pub fn route_for(&self, player: Player, search: Search) -> Option<Route> {
        compute_route(self, self.pawn(player), &player.goals(), search)
    }

    /// Teleports a pawn; engine use only, for scripted positions.
    pub fn set_pawn_unchecked_engine(&mut self, player: Player, coord: Coord) -> () {
        self.pawns[player.index()] = coord;
    }

    /// The placings that are geometrically available right now.
    pub fn valid_fence_placings(&self) -> &FenceSet {
        &self.valid_placings
    }

    /// The player whose pawn has reached its goal row, if the race is over.
    pub fn winner(&self) -> Option<Player> {
        Player::all().into_iter().find(|player| self.pawn(*player).row == player.goal_row())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
