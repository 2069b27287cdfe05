use axum::{Json, extract::State};
use wsid_drink::Leaderboard;

use crate::{error::AppResult, routes::AppState};

pub async fn page(State(state): State<AppState>) -> AppResult<Json<Leaderboard>> {
    Ok(Json(state.drink_command.leaderboard().await?))
}
