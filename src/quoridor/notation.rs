
use regex::Regex;

use crate::quoridor::prelude::*;

/// A single turn's worth of play: either step the pawn or spend a fence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Coord),
    Fence(FencePlacing),
}

impl Action {
    /// Notates the action the way the parser expects it back.
    pub fn notate(&self) -> String {
        match self {
            Action::Move(coord)    => coord.notate(),
            Action::Fence(placing) => placing.notate()
        }
    }
}

/// A segment of a gamestring that represents one action: a bare digit pair
/// for a pawn destination ("34"), or an orientation letter and an anchor
/// digit pair for a fence ("h34", "v07").
#[derive(Clone, Debug)]
pub struct MoveString {
    pub repr: String,
    pub action: Action,
}

impl std::str::FromStr for MoveString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new("^(?:(?<orientation>[hv])(?<anchor>[0-7][0-7])|(?<cell>[0-8][0-8]))$")?;
        let Some(matches) = pattern.captures(s) else {
            return Err(anyhow!("could not parse movestring {s}"));
        };

        let action = match matches.name("orientation") {
            Some(orientation) => {
                let orientation = orientation.as_str().parse::<Orientation>()?;
                let anchor = matches.name("anchor").unwrap().as_str().parse::<Coord>()?;
                Action::Fence(FencePlacing::new(anchor, orientation))
            },
            None => {
                let cell = matches.name("cell").unwrap().as_str().parse::<Coord>()?;
                Action::Move(cell)
            }
        };

        Ok(MoveString { repr: s.to_owned(), action })
    }
}

/// A parsed gamestring that resolves to a sequence of actions from the fixed
/// starting position. "-" (or an empty string) is the empty game.
///
/// Caveat: the game need not actually be semantically valid, only
/// syntactically; to ensure a gamestring is actually valid, its actions
/// should be tried iteratively against Board::play().
#[derive(Clone, Debug)]
pub struct GameString {
    pub moves: Vec<MoveString>,
}

impl std::str::FromStr for GameString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "-" {
            return Ok(GameString { moves: vec![] });
        }

        let mut moves = vec![];
        for move_str in trimmed.split(";") {
            let mv = move_str.trim().parse::<MoveString>()
                .with_context(|| format!("in gamestring {s}"))?;
            moves.push(mv);
        }

        Ok(GameString { moves })
    }
}
