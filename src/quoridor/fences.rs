use crate::quoridor::prelude::*;

/// Which way a fence lies across its 2x2 anchor square.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    Horizontal = 0,
    Vertical = 1,
}

impl Orientation {
    /// Gets the orientations in id order.
    pub fn all() -> [Orientation; 2] {
        [Orientation::Horizontal, Orientation::Vertical]
    }

    /// Notates the orientation.
    pub fn notate(&self) -> String {
        match self {
            Orientation::Horizontal => "h",
            Orientation::Vertical   => "v"
        }.into()
    }
}

impl std::str::FromStr for Orientation {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "h" | "H" => Ok(Orientation::Horizontal),
            "v" | "V" => Ok(Orientation::Vertical),
            _         => Err(anyhow!("invalid notation {s} for Orientation"))
        }
    }
}

impl Neg for Orientation {
    type Output = Orientation;
    fn neg(self) -> Self::Output {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical   => Orientation::Horizontal
        }
    }
}

/// A candidate wall segment, two cells long, identified by the top-left cell
/// of the 2x2 square it bisects. Whether placing it would strand a pawn is a
/// question for the board, not for the placing itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FencePlacing {
    pub anchor: Coord,
    pub orientation: Orientation,
}

impl FencePlacing {
    /// Constructs a new placing.
    pub fn new(anchor: Coord, orientation: Orientation) -> FencePlacing {
        FencePlacing { anchor, orientation }
    }

    /// Recovers a placing from its dense id.
    pub fn from_id(id: usize) -> FencePlacing {
        let orientation = match id / (ANCHOR_SIZE * ANCHOR_SIZE) {
            0 => Orientation::Horizontal,
            _ => Orientation::Vertical
        };
        let cell = id % (ANCHOR_SIZE * ANCHOR_SIZE);
        FencePlacing {
            anchor: Coord::new(cell / ANCHOR_SIZE, cell % ANCHOR_SIZE),
            orientation,
        }
    }

    /// The dense id of the placing: 0..64 horizontal, 64..128 vertical.
    pub fn id(&self) -> usize {
        (self.orientation as usize) * ANCHOR_SIZE * ANCHOR_SIZE
            + self.anchor.row * ANCHOR_SIZE
            + self.anchor.col
    }

    /// Determines whether or not the anchor is on the board.
    pub fn in_bounds(&self) -> bool {
        self.anchor.row < ANCHOR_SIZE && self.anchor.col < ANCHOR_SIZE
    }

    /// Every placing this one overlaps or crosses, itself included. Placing a
    /// fence retires this whole set from the legal pool.
    pub fn conflicts(&self) -> FenceSet {
        let mut set = FenceSet::default();
        set.insert(&self.id());
        set.insert(&FencePlacing::new(self.anchor, -self.orientation).id());

        let along = match self.orientation {
            Orientation::Horizontal => [OffsetCoord::new(0, -1), OffsetCoord::new(0, 1)],
            Orientation::Vertical   => [OffsetCoord::new(-1, 0), OffsetCoord::new(1, 0)]
        };
        for offset in along {
            let shifted = self.anchor + offset;
            if shifted.in_anchor_bounds_signed() {
                set.insert(&FencePlacing::new(shifted.coerce(), self.orientation).id());
            }
        }
        set
    }

    /// The two cell-to-cell edges this fence severs.
    pub fn severed_edges(&self) -> [(Coord, Coord); 2] {
        let Coord { row, col } = self.anchor;
        match self.orientation {
            Orientation::Horizontal => [
                (Coord::new(row, col), Coord::new(row + 1, col)),
                (Coord::new(row, col + 1), Coord::new(row + 1, col + 1)),
            ],
            Orientation::Vertical => [
                (Coord::new(row, col), Coord::new(row, col + 1)),
                (Coord::new(row + 1, col), Coord::new(row + 1, col + 1)),
            ],
        }
    }

    /// Whether this fence severs the edge between two adjacent cells.
    pub fn severs(&self, from: &Coord, to: &Coord) -> bool {
        self.severed_edges()
            .iter()
            .any(|(a, b)| (a == from && b == to) || (a == to && b == from))
    }

    /// Notates the placing as its orientation letter and anchor digits.
    pub fn notate(&self) -> String {
        format!("{}{}", self.orientation.notate(), self.anchor.notate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_invertible() {
        let placing = FencePlacing::new(Coord::new(3, 3), Orientation::Vertical);
        assert_eq!(placing.id(), 64 + 3 * 8 + 3);
        assert_eq!(FencePlacing::from_id(placing.id()), placing);
        assert_eq!(FencePlacing::from_id(0), FencePlacing::new(Coord::new(0, 0), Orientation::Horizontal));
        assert_eq!(FencePlacing::from_id(NUM_PLACINGS - 1), FencePlacing::new(Coord::new(7, 7), Orientation::Vertical));
    }

    #[test]
    fn horizontal_fence_severs_the_two_edges_below_its_anchor_row() {
        let placing = FencePlacing::new(Coord::new(3, 3), Orientation::Horizontal);
        assert!(placing.severs(&Coord::new(3, 3), &Coord::new(4, 3)));
        assert!(placing.severs(&Coord::new(4, 4), &Coord::new(3, 4)));
        assert!(!placing.severs(&Coord::new(3, 3), &Coord::new(3, 4)));
        assert!(!placing.severs(&Coord::new(3, 5), &Coord::new(4, 5)));
    }

    #[test]
    fn interior_fence_conflicts_with_three_others() {
        let conflicts = FencePlacing::new(Coord::new(3, 3), Orientation::Horizontal).conflicts();
        let expected = [
            FencePlacing::new(Coord::new(3, 2), Orientation::Horizontal),
            FencePlacing::new(Coord::new(3, 3), Orientation::Horizontal),
            FencePlacing::new(Coord::new(3, 4), Orientation::Horizontal),
            FencePlacing::new(Coord::new(3, 3), Orientation::Vertical),
        ];
        assert_eq!(conflicts.len(), 4);
        assert!(expected.iter().all(|p| conflicts.contains(&p.id())));
    }

    #[test]
    fn corner_fence_conflicts_shrink_at_the_edge() {
        let conflicts = FencePlacing::new(Coord::new(0, 0), Orientation::Vertical).conflicts();
        assert_eq!(conflicts.len(), 3);
        assert!(conflicts.contains(&FencePlacing::new(Coord::new(1, 0), Orientation::Vertical).id()));
        assert!(conflicts.contains(&FencePlacing::new(Coord::new(0, 0), Orientation::Horizontal).id()));
    }
}
