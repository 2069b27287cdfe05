use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{auth::AuthUser, error::AppResult, routes::AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInput {
    pub drink_id: String,
}

#[tracing::instrument(skip_all, fields(user_id = %user.id, drink_id = %input.drink_id))]
pub async fn log(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<LogInput>,
) -> AppResult<impl IntoResponse> {
    let log = state.drink_command.log(&user.id, &input.drink_id).await?;

    Ok(Json(json!({ "log": log })))
}
