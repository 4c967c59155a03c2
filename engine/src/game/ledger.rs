use crate::PlayerId;

use super::types::Coordinate;

/// A single coin placement. Created only by the game state machine, never
/// mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub coordinate: Coordinate,
    pub player: PlayerId,
    pub sequence: u64,
}

/// Append-only record of a game's moves, ordered by occurrence.
#[derive(Debug, Clone, Default)]
pub struct MoveLedger {
    moves: Vec<Move>,
    next_sequence: u64,
}

impl MoveLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, coordinate: Coordinate, player: PlayerId) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.moves.push(Move {
            coordinate,
            player,
            sequence,
        });
    }

    /// Moves ordered by sequence.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Moves ordered by (column, row), the order occupancy lookups replay in.
    pub fn by_position(&self) -> Vec<&Move> {
        let mut ordered: Vec<&Move> = self.moves.iter().collect();
        ordered.sort_by_key(|m| (m.coordinate.column, m.coordinate.row));
        ordered
    }

    /// The move with the greatest sequence value.
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_move_tracks_latest_append() {
        let mut ledger = MoveLedger::new();
        assert!(ledger.last_move().is_none());

        ledger.append(Coordinate::new(0, 3), PlayerId::from("p1"));
        assert_eq!(ledger.last_move().unwrap().coordinate, Coordinate::new(0, 3));

        ledger.append(Coordinate::new(0, 0), PlayerId::from("p2"));
        let last = ledger.last_move().unwrap();
        assert_eq!(last.coordinate, Coordinate::new(0, 0));
        assert_eq!(last.player, PlayerId::from("p2"));
    }

    #[test]
    fn test_sequences_are_strictly_increasing() {
        let mut ledger = MoveLedger::new();
        for column in 0..5 {
            ledger.append(Coordinate::new(0, column), PlayerId::from("p1"));
        }

        let sequences: Vec<u64> = ledger.moves().iter().map(|m| m.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_by_position_orders_by_column_then_row() {
        let mut ledger = MoveLedger::new();
        ledger.append(Coordinate::new(0, 2), PlayerId::from("p1"));
        ledger.append(Coordinate::new(1, 0), PlayerId::from("p2"));
        ledger.append(Coordinate::new(0, 0), PlayerId::from("p1"));

        let positions: Vec<Coordinate> = ledger
            .by_position()
            .iter()
            .map(|m| m.coordinate)
            .collect();
        assert_eq!(
            positions,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(0, 2),
            ]
        );
    }
}
