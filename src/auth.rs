use std::time::{SystemTime, UNIX_EPOCH};

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::JwtConfig, error::AppError, routes::AppState};

pub const SESSION_COOKIE_NAME: &str = "session";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
    pub iat: u64,
}

pub fn generate_token(config: &JwtConfig, sub: impl Into<String>) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        sub: sub.into(),
        exp: now + config.expiration_days * 24 * 60 * 60,
        iat: now,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn decode_token(config: &JwtConfig, token: &str) -> Option<Claims> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .ok()
}

pub fn build_cookie<'a>(config: &JwtConfig, sub: impl Into<String>) -> anyhow::Result<Cookie<'a>> {
    let token = generate_token(config, sub)?;
    let max_age = time::Duration::days(i64::try_from(config.expiration_days)?);

    Ok(Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .build())
}

/// Cookie that makes the browser drop the session.
pub fn removal_cookie<'a>() -> Cookie<'a> {
    Cookie::build(SESSION_COOKIE_NAME).path("/").build()
}

async fn session_user(
    parts: &mut Parts,
    state: &AppState,
) -> Result<Option<wsid_user::User>, AppError> {
    let Ok(jar) = CookieJar::from_request_parts(parts, state).await;

    let Some(token) = jar.get(SESSION_COOKIE_NAME).map(|c| c.value().to_owned()) else {
        return Ok(None);
    };

    let Some(claims) = decode_token(&state.config.jwt, &token) else {
        tracing::warn!("Rejected invalid or expired session token");
        return Ok(None);
    };

    Ok(state.user_command.find(claims.sub).await?)
}

/// Signed-in user; rejects with 401 otherwise.
pub struct AuthUser(pub wsid_user::User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_user(parts, state)
            .await?
            .map(AuthUser)
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))
    }
}

/// Signed-in user when there is one.
pub struct MaybeAuthUser(pub Option<wsid_user::User>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(session_user(parts, state).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            expiration_days: 7,
            secure_cookie: false,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = jwt_config();
        let token = generate_token(&config, "01USER").unwrap();
        let claims = decode_token(&config, &token).unwrap();

        assert_eq!(claims.sub, "01USER");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_token_with_other_secret_is_rejected() {
        let token = generate_token(&jwt_config(), "01USER").unwrap();
        let other = JwtConfig {
            secret: "another_secret_key_minimum_32_characters".to_string(),
            ..jwt_config()
        };

        assert!(decode_token(&other, &token).is_none());
        assert!(decode_token(&jwt_config(), "garbage").is_none());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = build_cookie(&jwt_config(), "01USER").unwrap();

        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(7)));
    }
}
