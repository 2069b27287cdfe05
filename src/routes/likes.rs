use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use wsid_drink::RateInput;
use wsid_suggestion::UserPreference;

use crate::{auth::AuthUser, error::AppResult, routes::AppState};

#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn rate(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<RateInput>,
) -> AppResult<impl IntoResponse> {
    let like = state.drink_command.rate(&user.id, input).await?;

    Ok(Json(json!({ "success": true, "like": like })))
}

#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn clear(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(drink_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let removed = state.drink_command.clear_rating(&user.id, &drink_id).await?;

    Ok(Json(json!({ "removed": removed })))
}

pub async fn preferences(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> AppResult<Json<UserPreference>> {
    Ok(Json(state.drink_command.preference(&user.id).await?))
}
