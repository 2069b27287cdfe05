use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde_json::json;
use wsid_user::{LoginInput, RegisterInput};

use crate::{
    auth::{MaybeAuthUser, build_cookie, removal_cookie},
    error::AppResult,
    routes::AppState,
};

#[tracing::instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> AppResult<impl IntoResponse> {
    let user = state.user_command.register(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Registered", "user": user })),
    ))
}

#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> AppResult<impl IntoResponse> {
    let user = state.user_command.login(input).await?;
    let cookie = build_cookie(&state.config.jwt, user.id.to_owned())?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok((
        jar.add(cookie),
        Json(json!({ "message": "Login successful", "user": user })),
    ))
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        jar.remove(removal_cookie()),
        Json(json!({ "message": "Logged out" })),
    )
}

pub async fn me(MaybeAuthUser(user): MaybeAuthUser) -> impl IntoResponse {
    Json(json!({ "user": user }))
}
