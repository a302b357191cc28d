use crate::app_context::{AppContext, RequestContext};
use crate::auth::extractors::Player;
use crate::map::models::LatLng;
use crate::rounds::responses::{
    CurrentRoundResponse, SaveGuessResponse, StartRoundResponse, ValidateRoundResponse,
};
use crate::rounds::services::RoundsHttpHandler;
use crate::storage::rounds::HashMapRoundsStorage;
use axum::extract::State;
use axum::response::Json;

fn request_context(player: Player) -> RequestContext {
    RequestContext {
        public_id: player.public_id,
    }
}

#[axum::debug_handler]
pub async fn start(
    player: Player,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<StartRoundResponse> {
    let request_context = request_context(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .start()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn current(
    player: Player,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<CurrentRoundResponse> {
    let request_context = request_context(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .current()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn save_guess(
    player: Player,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
    Json(guess): Json<LatLng>,
) -> Json<SaveGuessResponse> {
    let request_context = request_context(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .save_guess(guess)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn validate(
    player: Player,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<ValidateRoundResponse> {
    let request_context = request_context(player);
    let response = RoundsHttpHandler::new(app_context, &request_context)
        .validate()
        .await;
    Json(response)
}
