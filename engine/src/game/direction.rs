use std::collections::HashMap;

use crate::PlayerId;

use super::types::Coordinate;

/// Number of coins in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// The four line orientations a winning sequence can have. Scanning is
/// anchored at the prospective first coin of the line, so only upward and
/// rightward-leaning orientations are needed; the mirrored ones are covered
/// by anchoring at the other end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalUpRight,
    DiagonalUpLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUpRight,
        Direction::DiagonalUpLeft,
    ];

    fn offsets(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUpRight => (1, 1),
            Direction::DiagonalUpLeft => (1, -1),
        }
    }

    /// True iff stepping WIN_LENGTH - 1 times from `coord` stays on the board.
    pub fn is_valid_start(&self, coord: Coordinate, rows: usize, columns: usize) -> bool {
        let (row_step, col_step) = self.offsets();

        if row_step > 0 && coord.row + WIN_LENGTH > rows {
            return false;
        }
        if col_step > 0 && coord.column + WIN_LENGTH > columns {
            return false;
        }
        if col_step < 0 && coord.column < WIN_LENGTH - 1 {
            return false;
        }
        true
    }

    /// The coordinate `n` steps along this direction. Callers must ensure the
    /// result stays on the board, see `is_valid_start`.
    pub fn step(&self, coord: Coordinate, n: usize) -> Coordinate {
        let (row_step, col_step) = self.offsets();
        Coordinate::new(
            (coord.row as isize + row_step * n as isize) as usize,
            (coord.column as isize + col_step * n as isize) as usize,
        )
    }

    /// Whether a four-in-a-row starts at `start` along this direction. An
    /// unoccupied start can never match.
    pub fn has_four_in_row(
        &self,
        start: Coordinate,
        occupancy: &HashMap<Coordinate, PlayerId>,
        rows: usize,
        columns: usize,
    ) -> bool {
        if !self.is_valid_start(start, rows, columns) {
            return false;
        }

        let Some(player) = occupancy.get(&start) else {
            return false;
        };

        (1..WIN_LENGTH).all(|n| occupancy.get(&self.step(start, n)) == Some(player))
    }
}
