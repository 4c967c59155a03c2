use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use connect_four_engine::game::MoveError;
use connect_four_engine::{GameId, PlayerId, log};

use crate::game_store::{BoardSnapshot, GameStore, MoveOutcome, StoreError};

#[derive(Clone)]
pub struct WebServerState {
    pub store: GameStore,
}

pub fn build_router(store: GameStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/games", post(create_game))
        .route("/games/{game_id}", delete(remove_game))
        .route("/games/{game_id}/moves", post(drop_coin))
        .route("/games/{game_id}/check", get(check_game))
        .route("/games/{game_id}/columns", get(available_columns))
        .route("/games/{game_id}/board", get(board_snapshot))
        .layer(cors)
        .with_state(WebServerState { store })
}

pub async fn run_web_server(store: GameStore, addr: &str) -> Result<(), String> {
    let app = build_router(store);

    log!("Web server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Web server error: {}", e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    log!("Shutdown signal received");
}

struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self(e)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            StoreError::GameNotFound => StatusCode::NOT_FOUND,
            StoreError::Move(MoveError::NotAParticipant) => StatusCode::FORBIDDEN,
            StoreError::Move(MoveError::NotYourTurn | MoveError::ColumnFull) => {
                StatusCode::CONFLICT
            }
        };

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Deserialize)]
struct CreateGameRequest {
    player_1: String,
    player_2: String,
}

#[derive(Serialize)]
struct CreateGameResponse {
    game_id: String,
}

async fn create_game(
    State(state): State<WebServerState>,
    Json(request): Json<CreateGameRequest>,
) -> impl IntoResponse {
    let game_id = state
        .store
        .create_game(
            PlayerId::from(request.player_1),
            PlayerId::from(request.player_2),
        )
        .await;

    (
        StatusCode::CREATED,
        Json(CreateGameResponse {
            game_id: game_id.to_string(),
        }),
    )
}

async fn remove_game(
    State(state): State<WebServerState>,
    Path(game_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.remove_game(&GameId::from(game_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct DropCoinRequest {
    player_id: String,
    column: usize,
}

async fn drop_coin(
    State(state): State<WebServerState>,
    Path(game_id): Path<String>,
    Json(request): Json<DropCoinRequest>,
) -> Result<Json<MoveOutcome>, ApiError> {
    let outcome = state
        .store
        .attempt_move(
            &GameId::from(game_id),
            &PlayerId::from(request.player_id),
            request.column,
        )
        .await?;

    Ok(Json(outcome))
}

#[derive(Deserialize)]
struct CheckQuery {
    player_id: String,
}

#[derive(Serialize)]
struct CheckResponse {
    is_users_turn: bool,
    is_game_over: bool,
}

/// Lightweight polling endpoint the display layer hits while waiting for the
/// opponent to move.
async fn check_game(
    State(state): State<WebServerState>,
    Path(game_id): Path<String>,
    Query(query): Query<CheckQuery>,
) -> Result<Json<CheckResponse>, ApiError> {
    let game_id = GameId::from(game_id);
    let player_id = PlayerId::from(query.player_id);

    let is_users_turn = state.store.is_users_turn(&game_id, &player_id).await?;
    let is_game_over = state.store.is_game_over(&game_id).await?;

    Ok(Json(CheckResponse {
        is_users_turn,
        is_game_over,
    }))
}

#[derive(Serialize)]
struct ColumnsResponse {
    columns: Vec<usize>,
}

async fn available_columns(
    State(state): State<WebServerState>,
    Path(game_id): Path<String>,
) -> Result<Json<ColumnsResponse>, ApiError> {
    let columns = state
        .store
        .available_columns(&GameId::from(game_id))
        .await?;
    Ok(Json(ColumnsResponse { columns }))
}

async fn board_snapshot(
    State(state): State<WebServerState>,
    Path(game_id): Path<String>,
) -> Result<Json<BoardSnapshot>, ApiError> {
    let snapshot = state.store.board_snapshot(&GameId::from(game_id)).await?;
    Ok(Json(snapshot))
}
