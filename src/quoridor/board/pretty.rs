
use crate::quoridor::prelude::*;

impl Board {
    /// Pretty-prints the board: pawns by letter, severed edges as bars.
    pub fn pretty(&self) -> String {
        let mut lines: Vec<String> = vec![];
        for row in 0..BOARD_SIZE {
            let mut cells = String::new();
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col);
                cells.push(match coord {
                    c if c == *self.pawn(Player::White) => 'W',
                    c if c == *self.pawn(Player::Black) => 'B',
                    _                                   => '.'
                });
                if col + 1 < BOARD_SIZE {
                    cells.push(if self.blocked_east().contains(&coord) { '|' } else { ' ' });
                }
            }
            lines.push(cells);

            if row + 1 < BOARD_SIZE {
                let mut seams = String::new();
                for col in 0..BOARD_SIZE {
                    seams.push(if self.blocked_south().contains(&Coord::new(row, col)) { '-' } else { ' ' });
                    if col + 1 < BOARD_SIZE {
                        seams.push(' ');
                    }
                }
                lines.push(seams);
            }
        }
        lines.join("\n")
    }
}
