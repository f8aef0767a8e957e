use crate::quoridor::prelude::*;

/// Simple board coordinate; bounded to the 9x9 pawn grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl std::str::FromStr for Coord {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(anyhow!("expected 2 digit number for Coord; received {s}"));
        }
        let [row, col] = [0, 1]
            .map(|i| s.chars().nth(i).unwrap())
            .map(|x| x.to_string().parse::<usize>());
        let [row, col] = [row?, col?];
        let coord = Coord { row, col };
        if !coord.in_bounds() {
            return Err(anyhow!("coordinate {s} is off the board"));
        }
        Ok(coord)
    }
}

impl Coord {
    /// Determines whether or not the coord is in bounds.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The taxicab distance between two cells.
    pub fn manhattan(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Constructs a new coord.
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The canonical notation of the coord is its digit pair in the grid.
    pub fn notate(&self) -> String {
        format!("{}{}", self.row, self.col)
    }
}

// Simple offset pair that can be used to calculate neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCoord {
    pub rows: isize,
    pub cols: isize,
}

/// Offsets that turn a coordinate into one of its orthogonal neighbours.
pub static ORTHOGONAL_OFFSETS: [OffsetCoord; 4] = [
    OffsetCoord { rows: -1, cols: 0 },
    OffsetCoord { rows: 0, cols: -1 },
    OffsetCoord { rows: 0, cols: 1 },
    OffsetCoord { rows: 1, cols: 0 },
];

impl OffsetCoord {
    /// Coerces the offset into a coordinate unchecked.
    pub fn coerce(&self) -> Coord {
        Coord {
            row: self.rows as usize,
            col: self.cols as usize,
        }
    }

    /// Whether the coord lands on a fence anchor (the top-left cell of a 2x2 square).
    pub fn in_anchor_bounds_signed(&self) -> bool {
        0 <= self.rows && self.rows < ANCHOR_SIZE as isize && 0 <= self.cols && self.cols < ANCHOR_SIZE as isize
    }

    /// Determines whether or not the coord is in bounds.
    pub fn in_bounds_signed(&self) -> bool {
        0 <= self.rows && self.rows < BOARD_SIZE as isize && 0 <= self.cols && self.cols < BOARD_SIZE as isize
    }

    /// The taxicab distance between two points.
    pub fn manhattan(&self, other: OffsetCoord) -> usize {
        self.rows.abs_diff(other.rows) + self.cols.abs_diff(other.cols)
    }

    // Whether two coordinates are neighbours.
    pub fn neighbours(&self, other: OffsetCoord) -> bool {
        self.manhattan(other) == 1
    }

    /// Constructs a new offset coord.
    pub fn new(rows: isize, cols: isize) -> OffsetCoord {
        OffsetCoord { rows, cols }
    }
}

// C -> OC

impl From<Coord> for OffsetCoord {
    fn from(value: Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

impl From<&Coord> for OffsetCoord {
    fn from(value: &Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

// OC + OC

impl Add<&OffsetCoord> for &OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord {
            rows: self.rows + rhs.rows,
            cols: self.cols + rhs.cols,
        }
    }
}

impl Add<OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        &self + &rhs
    }
}

// C + OC

impl Add<&OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        &OffsetCoord::from(self) + rhs
    }
}

impl Add<OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        self + &rhs
    }
}

impl Add<OffsetCoord> for Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&OffsetCoord> for Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        &self + rhs
    }
}

// C - C

impl Sub<&Coord> for &Coord {
    type Output = OffsetCoord;
    fn sub(self, rhs: &Coord) -> Self::Output {
        let [lhs, rhs] = [OffsetCoord::from(self), OffsetCoord::from(rhs)];
        OffsetCoord {
            rows: lhs.rows - rhs.rows,
            cols: lhs.cols - rhs.cols,
        }
    }
}

impl Sub<Coord> for Coord {
    type Output = OffsetCoord;
    fn sub(self, rhs: Coord) -> Self::Output {
        &self - &rhs
    }
}
