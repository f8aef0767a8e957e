/*
 *  An implementation of the Quoridor game core in Rust: the board, its fences,
 *  route search, and fence-impact scoring.
 */

pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub mod fences;
pub mod impact;
pub mod notation;
pub mod routes;
pub mod sets;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::Board,
        consts::*,
        coords::{self, *},
        fences::{FencePlacing, Orientation},
        impact::{Hypothetical, Impact},
        notation::{Action, GameString, MoveString},
        routes::{compute_route, weighted_route, Route, Search, Topology},
        sets::*
    };

    pub use super::sets::SetOps;
}
