#![allow(dead_code)]

use std::str::FromStr;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tower::ServiceExt;
use wsid::config::{
    Config, DatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig, SuggestionConfig,
};

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            expiration_days: 7,
            secure_cookie: false,
        },
        observability: ObservabilityConfig::default(),
        suggestion: SuggestionConfig::default(),
    }
}

/// In-memory database with one connection so every query sees the same data.
pub async fn spawn_app() -> anyhow::Result<TestApp> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    wsid::db::migrate(&pool).await?;

    let state = wsid::AppState::new(test_config(), wsid_shared::State::single(pool.clone()));

    Ok(TestApp {
        router: wsid::router(state),
        pool,
    })
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> anyhow::Result<TestResponse> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await?.to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> anyhow::Result<TestResponse> {
        self.send(request(Method::GET, uri, None, cookie)?).await
    }

    pub async fn post(
        &self,
        uri: &str,
        body: Value,
        cookie: Option<&str>,
    ) -> anyhow::Result<TestResponse> {
        self.send(request(Method::POST, uri, Some(body), cookie)?)
            .await
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> anyhow::Result<TestResponse> {
        self.send(request(Method::DELETE, uri, None, cookie)?).await
    }

    /// Registers `name`@wsid.localhost and returns the session cookie pair.
    pub async fn login_as(&self, name: &str) -> anyhow::Result<String> {
        let credentials = serde_json::json!({
            "email": format!("{name}@wsid.localhost"),
            "password": "my_password",
            "name": name,
        });

        let res = self
            .post("/api/auth/register", credentials.clone(), None)
            .await?;
        anyhow::ensure!(res.status == StatusCode::CREATED, "register: {:?}", res.body);

        let res = self.post("/api/auth/login", credentials, None).await?;
        anyhow::ensure!(res.status == StatusCode::OK, "login: {:?}", res.body);

        session_cookie(&res.headers).ok_or_else(|| anyhow::anyhow!("no session cookie"))
    }

    /// Saves a drink through the API and returns its id.
    pub async fn save_drink(&self, name: &str, ingredients: &[&str]) -> anyhow::Result<String> {
        let res = self
            .post(
                "/api/drinks",
                serde_json::json!({ "name": name, "ingredients": ingredients }),
                None,
            )
            .await?;
        anyhow::ensure!(res.status == StatusCode::OK, "save drink: {:?}", res.body);

        res.body["drink"]["id"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| anyhow::anyhow!("drink id missing"))
    }
}

pub fn request(
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> anyhow::Result<Request<Body>> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    Ok(request)
}

/// `session=<token>` from a Set-Cookie header.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_owned)
}
