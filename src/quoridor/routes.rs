
use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;

use crate::quoridor::prelude::*;

/// The traversability view a route search runs against. Implemented by the
/// board for its real wall state, and by hypothetical overlays that mask a
/// candidate fence on top of it.
pub trait Topology {
    /// Whether the edge between two orthogonally adjacent in-bounds cells is open.
    fn open(&self, from: &Coord, to: &Coord) -> bool;

    /// The in-bounds cells reachable from a cell in one step.
    fn neighbours(&self, of: &Coord) -> impl Iterator<Item = Coord> {
        ORTHOGONAL_OFFSETS.iter().filter_map(move |offset| {
            let shifted = of + offset;
            if shifted.in_bounds_signed() && self.open(of, &shifted.coerce()) {
                Some(shifted.coerce())
            } else {
                None
            }
        })
    }
}

/// Which search walks the grid. All three return minimal-cost routes under
/// uniform edge cost; they differ in how much of the board they visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Search {
    BreadthFirst,
    Dijkstra,
    AStar,
}

impl std::str::FromStr for Search {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "bfs"      => Ok(Search::BreadthFirst),
            "dijkstra" => Ok(Search::Dijkstra),
            "astar"    => Ok(Search::AStar),
            _          => Err(anyhow!("invalid notation {s} for Search"))
        }
    }
}

/// A walkable sequence of cells from a start cell to a goal cell. Consecutive
/// cells are adjacent and were open when the route was computed; a pawn
/// already on its goal is a route of zero hops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    cells: Vec<Coord>,
}

impl Route {
    /// The cells of the route in walking order, start first.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// The first cell to step onto, if any hop remains.
    pub fn first_step(&self) -> Option<&Coord> {
        self.cells.get(1)
    }

    /// The goal cell the route reaches.
    pub fn goal(&self) -> &Coord {
        self.cells.last().unwrap()
    }

    /// The number of hops along the route.
    pub fn len(&self) -> usize {
        self.cells.len() - 1
    }

    /// Notates the route as its cells in walking order.
    pub fn notate(&self) -> String {
        self.cells.iter().map(|c| c.notate()).join("; ")
    }

    /// The cell the route leaves from.
    pub fn start(&self) -> &Coord {
        self.cells.first().unwrap()
    }
}

/// Finds a minimal-cost route from `start` to any cell of `goals`, or None if
/// the goal set is unreachable. Pure in its inputs: nothing is cached and the
/// topology is never touched beyond adjacency queries.
pub fn compute_route(topo: &impl Topology, start: &Coord, goals: &CoordSet, search: Search) -> Option<Route> {
    match search {
        Search::BreadthFirst => breadth_first(topo, start, goals),
        Search::Dijkstra     => best_first(topo, start, goals, |_, _| 1, |_| 0),
        Search::AStar        => best_first(topo, start, goals, |_, _| 1, |c| nearest_goal_estimate(c, goals)),
    }
}

/// As compute_route, but with caller-supplied non-negative edge costs. The
/// uniform-cost searches are the special case `|_, _| 1`.
pub fn weighted_route(
    topo: &impl Topology,
    start: &Coord,
    goals: &CoordSet,
    weight: impl Fn(&Coord, &Coord) -> u32,
) -> Option<Route> {
    best_first(topo, start, goals, weight, |_| 0)
}

/// A consistent lower bound on the remaining cost to the goal set: the
/// taxicab distance to the nearest goal cell, walls ignored. Never
/// overestimates, so best-first search stays optimal.
fn nearest_goal_estimate(cell: &Coord, goals: &CoordSet) -> u32 {
    goals.iter().map(|goal| cell.manhattan(&goal) as u32).min().unwrap_or(0)
}

/// Unit-cost flood out from the start, finalizing cells in hop order.
fn breadth_first(topo: &impl Topology, start: &Coord, goals: &CoordSet) -> Option<Route> {
    let mut previous = [[None::<Coord>; BOARD_SIZE]; BOARD_SIZE];
    let mut seen = CoordSet::default();
    let mut frontier = VecDeque::new();

    seen.insert(start);
    frontier.push_back(*start);

    while let Some(cell) = frontier.pop_front() {
        if goals.contains(&cell) {
            return Some(rebuild(&previous, start, &cell));
        }
        for next in topo.neighbours(&cell) {
            if !seen.contains(&next) {
                seen.insert(&next);
                previous[next.row][next.col] = Some(cell);
                frontier.push_back(next);
            }
        }
    }
    None
}

/// Dijkstra's algorithm with a pluggable priority estimate. Cells leave the
/// heap in non-decreasing (distance + estimate) order; among equal
/// priorities, the first-discovered cell wins, which keeps routes
/// deterministic and settles ties between equal-cost goal cells in favour of
/// the one finalized first.
fn best_first(
    topo: &impl Topology,
    start: &Coord,
    goals: &CoordSet,
    weight: impl Fn(&Coord, &Coord) -> u32,
    estimate: impl Fn(&Coord) -> u32,
) -> Option<Route> {
    let mut distance = [[u32::MAX; BOARD_SIZE]; BOARD_SIZE];
    let mut previous = [[None::<Coord>; BOARD_SIZE]; BOARD_SIZE];
    let mut settled = CoordSet::default();
    let mut heap: BinaryHeap<Reverse<(u32, u64, Coord)>> = BinaryHeap::new();
    let mut discovered: u64 = 0;

    distance[start.row][start.col] = 0;
    heap.push(Reverse((estimate(start), discovered, *start)));

    while let Some(Reverse((_, _, cell))) = heap.pop() {
        if settled.contains(&cell) {
            continue;
        }
        settled.insert(&cell);

        if goals.contains(&cell) {
            return Some(rebuild(&previous, start, &cell));
        }

        for next in topo.neighbours(&cell) {
            if settled.contains(&next) {
                continue;
            }
            let tentative = distance[cell.row][cell.col] + weight(&cell, &next);
            if tentative < distance[next.row][next.col] {
                distance[next.row][next.col] = tentative;
                previous[next.row][next.col] = Some(cell);
                discovered += 1;
                heap.push(Reverse((tentative + estimate(&next), discovered, next)));
            }
        }
    }
    None
}

/// Walks the predecessor links backward from the reached goal cell.
fn rebuild(previous: &[[Option<Coord>; BOARD_SIZE]; BOARD_SIZE], start: &Coord, goal: &Coord) -> Route {
    let mut cells = vec![*goal];
    let mut cursor = *goal;
    while cursor != *start {
        cursor = previous[cursor.row][cursor.col].unwrap();
        cells.push(cursor);
    }
    cells.reverse();
    Route { cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_searches() -> [Search; 3] {
        [Search::BreadthFirst, Search::Dijkstra, Search::AStar]
    }

    #[test]
    fn open_board_centre_start_is_eight_hops() {
        let board = Board::new();
        for search in all_searches() {
            let route = compute_route(&board, &Coord::new(8, 4), &Player::White.goals(), search).unwrap();
            assert_eq!(route.len(), 8);
            assert_eq!(route.start(), &Coord::new(8, 4));
            assert_eq!(route.goal().row, 0);
        }
    }

    #[test]
    fn searches_agree_on_length_through_a_maze() {
        let mut board = Board::new();
        for notated in ["h33", "h35", "v27", "h70", "v42"] {
            let Action::Fence(placing) = notated.parse::<MoveString>().unwrap().action else {
                panic!("bad fixture");
            };
            board.play_unchecked_engine(Action::Fence(placing));
        }

        for player in Player::all() {
            let lengths: Vec<usize> = all_searches()
                .iter()
                .map(|&search| {
                    compute_route(&board, board.pawn(player), &player.goals(), search).unwrap().len()
                })
                .collect();
            assert_eq!(lengths[0], lengths[1]);
            assert!(lengths[2] <= lengths[1]);
            assert_eq!(lengths[2], lengths[0]);
        }
    }

    #[test]
    fn start_on_goal_is_a_zero_hop_route() {
        let board = Board::new();
        let route = compute_route(&board, &Coord::new(0, 2), &Player::White.goals(), Search::AStar).unwrap();
        assert_eq!(route.len(), 0);
        assert_eq!(route.first_step(), None);
        assert_eq!(route.cells(), &[Coord::new(0, 2)]);
    }

    #[test]
    fn sealed_pocket_reports_no_route_from_every_search() {
        let mut board = Board::new();
        // Box in the White pawn's corner of the board, leaving one gap...
        board.play_unchecked_engine(Action::Fence(FencePlacing::new(Coord::new(7, 3), Orientation::Horizontal)));
        board.play_unchecked_engine(Action::Fence(FencePlacing::new(Coord::new(7, 2), Orientation::Vertical)));
        // ...then close the gap with an overlay rather than the board itself.
        let gap = FencePlacing::new(Coord::new(7, 4), Orientation::Vertical);
        let sealed = Hypothetical::new(&board, gap);

        for search in all_searches() {
            assert!(compute_route(&sealed, &Coord::new(8, 4), &Player::White.goals(), search).is_none());
            assert!(compute_route(&board, &Coord::new(8, 4), &Player::White.goals(), search).is_some());
        }
    }

    #[test]
    fn weighted_routes_respect_expensive_edges() {
        let board = Board::new();
        // Make every step onto the centre column prohibitively expensive.
        let route = weighted_route(&board, &Coord::new(8, 4), &Player::White.goals(), |_, to| {
            if to.col == 4 { 100 } else { 1 }
        })
        .unwrap();

        assert_eq!(route.len(), 9);
        assert!(route.cells().iter().skip(1).all(|c| c.col != 4));
    }

    #[test]
    fn routes_only_walk_open_edges() {
        let mut board = Board::new();
        board.play_unchecked_engine(Action::Fence(FencePlacing::new(Coord::new(7, 4), Orientation::Horizontal)));

        let route = compute_route(&board, &Coord::new(8, 4), &Player::White.goals(), Search::AStar).unwrap();
        for pair in route.cells().windows(2) {
            assert!(board.open(&pair[0], &pair[1]));
            assert_eq!(pair[0].manhattan(&pair[1]), 1);
        }
    }
}
