use crate::quoridor::prelude::*;

impl Board {
    /// Records the two edges a fence severs in the blocked-edge masks.
    pub(super) fn sever(&mut self, placing: &FencePlacing) -> () {
        let Coord { row, col } = placing.anchor;
        match placing.orientation {
            Orientation::Horizontal => {
                self.blocked_south.insert(&Coord::new(row, col));
                self.blocked_south.insert(&Coord::new(row, col + 1));
            },
            Orientation::Vertical => {
                self.blocked_east.insert(&Coord::new(row, col));
                self.blocked_east.insert(&Coord::new(row + 1, col));
            }
        };
    }

    /// Cells whose southern edge is currently severed.
    pub(super) fn blocked_south(&self) -> &CoordSet {
        &self.blocked_south
    }

    /// Cells whose eastern edge is currently severed.
    pub(super) fn blocked_east(&self) -> &CoordSet {
        &self.blocked_east
    }
}

impl Topology for Board {
    fn open(&self, from: &Coord, to: &Coord) -> bool {
        let step = to - from;
        match (step.rows, step.cols) {
            (1, 0)  => !self.blocked_south.contains(from),
            (-1, 0) => !self.blocked_south.contains(to),
            (0, 1)  => !self.blocked_east.contains(from),
            (0, -1) => !self.blocked_east.contains(to),
            _       => false,
        }
    }
}
