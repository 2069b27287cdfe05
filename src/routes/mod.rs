use axum::{
    Router,
    routing::{delete, get, post},
};
use sqlx::SqlitePool;
use wsid_suggestion::SuggestionEngine;

mod auth;
mod comments;
mod drinklog;
mod drinks;
mod health;
mod leaderboard;
mod likes;
mod profile;
mod suggestions;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub user_command: wsid_user::Command,
    pub drink_command: wsid_drink::Command,
    pub engine: SuggestionEngine,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, state: wsid_shared::State) -> Self {
        let engine = SuggestionEngine::new(config.suggestion.weights());

        Self {
            config,
            user_command: wsid_user::Command::new(state.clone()),
            drink_command: wsid_drink::Command::new(state.clone()),
            engine,
            pool: state.read_db,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/user", get(profile::page))
        .route("/api/generate", post(drinks::generate))
        .route("/api/suggestions", get(suggestions::list))
        .route("/api/drinks", post(drinks::create))
        .route("/api/drinks/{id}", get(drinks::detail))
        .route("/api/drinks/{id}/narration", get(drinks::narration))
        .route("/api/likes", post(likes::rate))
        .route("/api/likes/{drink_id}", delete(likes::clear))
        .route("/api/preferences", get(likes::preferences))
        .route("/api/drinklog", post(drinklog::log))
        .route("/api/comments", get(comments::list).post(comments::create))
        .route("/api/leaderboard", get(leaderboard::page))
        .with_state(app_state)
}
