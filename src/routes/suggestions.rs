use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;
use serde_json::json;

use crate::{
    auth::MaybeAuthUser,
    error::{AppError, AppResult},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    // kept as text so a non-numeric count gets the JSON error body
    pub count: Option<String>,
}

/// Ranked suggestions, personalized when the caller is signed in and has
/// rated at least one drink.
#[tracing::instrument(skip_all, fields(count = ?query.count))]
pub async fn list(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    Query(query): Query<SuggestionQuery>,
) -> AppResult<impl IntoResponse> {
    let count = match query.count.as_deref().map(str::trim) {
        Some(raw) => {
            let n = raw
                .parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("Invalid count: {raw}")))?;
            usize::try_from(n).unwrap_or(0)
        }
        None => state.config.suggestion.default_count,
    };

    let preference = match &user {
        Some(user) => Some(state.drink_command.preference(&user.id).await?),
        None => None,
    };
    let personalized = preference.as_ref().is_some_and(|p| !p.is_empty());

    let mut rng = StdRng::from_os_rng();
    let drinks = state
        .engine
        .suggest(count, preference.as_ref(), &mut rng)?;

    Ok(Json(json!({ "drinks": drinks, "personalized": personalized })))
}
