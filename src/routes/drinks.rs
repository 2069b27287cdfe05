use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use rand::{SeedableRng, rngs::StdRng};
use serde_json::json;
use wsid_drink::CreateDrinkInput;

use crate::{error::AppResult, routes::AppState};

/// One freshly generated drink; not persisted.
pub async fn generate(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut rng = StdRng::from_os_rng();
    let drink = state
        .engine
        .generate(&mut rng)
        .map_err(anyhow::Error::from)?;

    Ok(Json(json!({ "drink": drink })))
}

#[tracing::instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDrinkInput>,
) -> AppResult<impl IntoResponse> {
    let drink = state.drink_command.create(input).await?;

    Ok(Json(json!({ "drink": drink })))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let Some(drink) = state.drink_command.find(&id).await? else {
        wsid_shared::not_found!("drink");
    };

    Ok(Json(json!({ "drink": drink })))
}

pub async fn narration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let Some(drink) = state.drink_command.find(&id).await? else {
        wsid_shared::not_found!("drink");
    };

    Ok(Json(json!({ "script": drink.narration() })))
}
