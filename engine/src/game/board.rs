use std::collections::HashMap;

use crate::PlayerId;

use super::ledger::MoveLedger;
use super::types::Coordinate;

/// Derived occupancy view over a game's move ledger. The board owns no state
/// of its own; it is rebuilt from the ledger whenever the engine needs it.
#[derive(Debug)]
pub struct Board {
    occupancy: HashMap<Coordinate, PlayerId>,
    rows: usize,
    columns: usize,
}

impl Board {
    pub fn from_ledger(ledger: &MoveLedger, rows: usize, columns: usize) -> Self {
        let occupancy = ledger
            .moves()
            .iter()
            .map(|m| (m.coordinate, m.player.clone()))
            .collect();

        Self {
            occupancy,
            rows,
            columns,
        }
    }

    pub fn occupancy(&self) -> &HashMap<Coordinate, PlayerId> {
        &self.occupancy
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<&PlayerId> {
        self.occupancy.get(&coordinate)
    }

    /// Columns with room for another coin, in ascending column order.
    pub fn available_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| {
                !self
                    .occupancy
                    .contains_key(&Coordinate::new(self.rows - 1, column))
            })
            .collect()
    }

    /// The row a coin dropped into `column` lands at. Occupied rows in a
    /// column form a contiguous run from row 0, so this is the coin count.
    pub fn landing_row(&self, column: usize) -> usize {
        self.occupancy
            .keys()
            .filter(|coordinate| coordinate.column == column)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.occupancy.len() == self.rows * self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with_coins(cells: &[(usize, usize, &str)]) -> MoveLedger {
        let mut ledger = MoveLedger::new();
        for &(row, column, player) in cells {
            ledger.append(Coordinate::new(row, column), PlayerId::from(player));
        }
        ledger
    }

    #[test]
    fn test_all_columns_available_on_empty_board() {
        let board = Board::from_ledger(&MoveLedger::new(), 6, 7);
        assert_eq!(board.available_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_columns_with_occupied_top_row_are_unavailable() {
        let ledger = ledger_with_coins(&[(5, 0, "p1"), (5, 3, "p1"), (5, 4, "p1")]);
        let board = Board::from_ledger(&ledger, 6, 7);
        assert_eq!(board.available_columns(), vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_no_columns_available_when_every_top_row_occupied() {
        let cells: Vec<(usize, usize, &str)> = (0..7).map(|column| (5, column, "p1")).collect();
        let board = Board::from_ledger(&ledger_with_coins(&cells), 6, 7);
        assert_eq!(board.available_columns(), Vec::<usize>::new());
    }

    #[test]
    fn test_landing_row_counts_coins_in_column() {
        let ledger = ledger_with_coins(&[(0, 2, "p1"), (1, 2, "p2"), (2, 2, "p1"), (0, 5, "p2")]);
        let board = Board::from_ledger(&ledger, 6, 7);
        assert_eq!(board.landing_row(2), 3);
        assert_eq!(board.landing_row(5), 1);
        assert_eq!(board.landing_row(0), 0);
    }

    #[test]
    fn test_occupancy_maps_each_coin_to_its_player() {
        let ledger = ledger_with_coins(&[(0, 0, "p1"), (0, 1, "p2"), (1, 1, "p1")]);
        let board = Board::from_ledger(&ledger, 6, 7);

        assert_eq!(board.occupancy().len(), 3);
        assert_eq!(board.get(Coordinate::new(0, 0)), Some(&PlayerId::from("p1")));
        assert_eq!(board.get(Coordinate::new(0, 1)), Some(&PlayerId::from("p2")));
        assert_eq!(board.get(Coordinate::new(1, 1)), Some(&PlayerId::from("p1")));
        assert_eq!(board.get(Coordinate::new(2, 2)), None);
    }

    #[test]
    fn test_board_is_full_only_at_capacity() {
        let mut ledger = MoveLedger::new();
        for row in 0..4 {
            for column in 0..4 {
                ledger.append(Coordinate::new(row, column), PlayerId::from("p1"));
            }
        }
        let board = Board::from_ledger(&ledger, 4, 4);
        assert!(board.is_full());

        let partial = ledger_with_coins(&[(0, 0, "p1")]);
        assert!(!Board::from_ledger(&partial, 4, 4).is_full());
    }
}
