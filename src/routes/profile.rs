use axum::{Json, extract::State};
use serde::Serialize;
use wsid_drink::UserStats;
use wsid_user::User;

use crate::{auth::AuthUser, error::AppResult, routes::AppState};

#[derive(Serialize)]
pub struct Profile {
    #[serde(flatten)]
    user: User,
    #[serde(flatten)]
    stats: UserStats,
}

#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn page(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> AppResult<Json<Profile>> {
    let stats = state.drink_command.user_stats(&user.id).await?;

    Ok(Json(Profile { user, stats }))
}
