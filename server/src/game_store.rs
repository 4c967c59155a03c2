use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

use connect_four_engine::config::BoardConfig;
use connect_four_engine::game::{Game, MoveError, Status};
use connect_four_engine::id_generator::generate_game_id;
use connect_four_engine::{GameId, PlayerId, log};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    GameNotFound,
    Move(MoveError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::GameNotFound => write!(f, "game not found"),
            StoreError::Move(e) => write!(f, "{}", e),
        }
    }
}

impl From<MoveError> for StoreError {
    fn from(e: MoveError) -> Self {
        StoreError::Move(e)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoveOutcome {
    pub game_ended: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellSnapshot {
    pub row: usize,
    pub column: usize,
    pub player_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub status: Status,
    pub winner: Option<String>,
    pub cells: Vec<CellSnapshot>,
}

/// In-process registry of running games. Each game sits behind its own mutex:
/// move validation, the ledger append and the status update all happen under
/// that lock, so two simultaneous attempts on the same game serialize and at
/// most one move commits per turn.
#[derive(Clone)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<GameId, Arc<Mutex<Game>>>>>,
    board_config: BoardConfig,
}

impl GameStore {
    pub fn new(board_config: BoardConfig) -> Self {
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
            board_config,
        }
    }

    pub async fn create_game(&self, player_1: PlayerId, player_2: PlayerId) -> GameId {
        let game = Game::new(
            player_1,
            player_2,
            self.board_config.rows,
            self.board_config.columns,
        );

        let mut games = self.games.lock().await;
        let mut game_id = generate_game_id();
        while games.contains_key(&game_id) {
            game_id = generate_game_id();
        }
        games.insert(game_id.clone(), Arc::new(Mutex::new(game)));
        drop(games);

        log!("Game created: {}", game_id);
        game_id
    }

    pub async fn remove_game(&self, game_id: &GameId) -> Result<(), StoreError> {
        let mut games = self.games.lock().await;
        match games.remove(game_id) {
            Some(_) => {
                log!("Game removed: {}", game_id);
                Ok(())
            }
            None => Err(StoreError::GameNotFound),
        }
    }

    async fn get_game(&self, game_id: &GameId) -> Result<Arc<Mutex<Game>>, StoreError> {
        let games = self.games.lock().await;
        games.get(game_id).cloned().ok_or(StoreError::GameNotFound)
    }

    pub async fn attempt_move(
        &self,
        game_id: &GameId,
        player: &PlayerId,
        column: usize,
    ) -> Result<MoveOutcome, StoreError> {
        let game = self.get_game(game_id).await?;
        let mut game = game.lock().await;

        match game.attempt_move(player, column) {
            Ok(game_ended) => {
                log!(
                    "[game:{}] {} dropped a coin into column {} (ended: {}, status: {:?})",
                    game_id,
                    player,
                    column,
                    game_ended,
                    game.status()
                );
                Ok(MoveOutcome { game_ended })
            }
            Err(e) => {
                log!(
                    "[game:{}] {} failed to drop a coin into column {}: {}",
                    game_id,
                    player,
                    column,
                    e
                );
                Err(e.into())
            }
        }
    }

    pub async fn is_users_turn(
        &self,
        game_id: &GameId,
        player: &PlayerId,
    ) -> Result<bool, StoreError> {
        let game = self.get_game(game_id).await?;
        let game = game.lock().await;
        Ok(game.is_users_turn(player))
    }

    pub async fn is_game_over(&self, game_id: &GameId) -> Result<bool, StoreError> {
        let game = self.get_game(game_id).await?;
        let game = game.lock().await;
        Ok(!game.is_pending())
    }

    pub async fn available_columns(&self, game_id: &GameId) -> Result<Vec<usize>, StoreError> {
        let game = self.get_game(game_id).await?;
        let game = game.lock().await;
        Ok(game.board().available_columns())
    }

    pub async fn board_snapshot(&self, game_id: &GameId) -> Result<BoardSnapshot, StoreError> {
        let game = self.get_game(game_id).await?;
        let game = game.lock().await;

        let cells = game
            .ledger()
            .by_position()
            .iter()
            .map(|m| CellSnapshot {
                row: m.coordinate.row,
                column: m.coordinate.column,
                player_id: m.player.to_string(),
            })
            .collect();

        Ok(BoardSnapshot {
            rows: game.rows(),
            columns: game.columns(),
            status: game.status(),
            winner: game.winner().map(|w| w.to_string()),
            cells,
        })
    }
}
