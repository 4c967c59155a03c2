pub mod board;
pub mod direction;
pub mod ledger;
pub mod state;
pub mod types;

pub use board::Board;
pub use direction::{Direction, WIN_LENGTH};
pub use ledger::{Move, MoveLedger};
pub use state::{Game, MoveError, Status};
pub use types::Coordinate;
