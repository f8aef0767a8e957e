use crate::quoridor::coords::Coord;
use crate::quoridor::sets::CoordSet;
use crate::utils::prelude::*;

pub const BOARD_SIZE: usize = 9;
pub const ANCHOR_SIZE: usize = BOARD_SIZE - 1;
pub const FENCES_PER_PLAYER: usize = 10;
pub const NUM_PLACINGS: usize = ANCHOR_SIZE * ANCHOR_SIZE * 2;

// A pawn typing.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Gets both players in turn order.
    pub fn all() -> [Player; 2] {
        [Player::White, Player::Black]
    }

    /// The row this player races toward.
    pub fn goal_row(&self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => BOARD_SIZE - 1
        }
    }

    /// Every cell on the player's goal row.
    pub fn goals(&self) -> CoordSet {
        (0..BOARD_SIZE).map(|col| Coord::new(self.goal_row(), col)).collect()
    }

    /// The player's slot in per-player arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Notates the player.
    pub fn notate(&self) -> String {
        match self {
            Player::White => "W",
            Player::Black => "B"
        }.into()
    }

    /// Parses into a player.
    pub fn parse(s: &str) -> Result<Player> {
        match s {
            "w" | "W" => Ok(Player::White),
            "b" | "B" => Ok(Player::Black),
            _         => Err(anyhow!("invalid notation {s} for player"))
        }
    }

    /// Where the player's pawn starts the game.
    pub fn start(&self) -> Coord {
        match self {
            Player::White => Coord::new(BOARD_SIZE - 1, BOARD_SIZE / 2),
            Player::Black => Coord::new(0, BOARD_SIZE / 2)
        }
    }
}

impl Neg for Player {
    type Output = Player;
    fn neg(self) -> Self::Output {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White
        }
    }
}
