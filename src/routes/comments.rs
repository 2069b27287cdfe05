use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use wsid_drink::AddCommentInput;

use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentQuery {
    pub drink_id: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CommentQuery>,
) -> AppResult<impl IntoResponse> {
    let Some(drink_id) = query.drink_id.filter(|id| !id.is_empty()) else {
        return Err(AppError::BadRequest("Missing drinkId".to_string()));
    };

    let comments = state.drink_command.comments(&drink_id).await?;

    Ok(Json(json!({ "comments": comments })))
}

#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<AddCommentInput>,
) -> AppResult<impl IntoResponse> {
    let comment = state.drink_command.add_comment(&user.id, input).await?;

    Ok((StatusCode::CREATED, Json(json!({ "comment": comment }))))
}
